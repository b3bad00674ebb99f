use std::sync::Arc;

use playvault::api::CatalogClient;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub client: CatalogClient,
    /// Public origin of this site, used for absolute sitemap URLs.
    pub site_base: String,
    pub rate_limiter: Arc<RateLimiter>,
}
