mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use playvault::api::CatalogClient;

use crate::web::security::RateLimiter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let api_base = std::env::var("API_BASE_URL")
        .expect("API_BASE_URL must be set (e.g. https://backend.example.com)");
    let api_token = std::env::var("API_AUTH_TOKEN")
        .expect("API_AUTH_TOKEN must be set (static backend auth header)");
    let site_base = std::env::var("SITE_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    let client = CatalogClient::new(&api_base, &api_token)
        .expect("Failed to build backend API client");

    let state = Data::new(web::state::AppState {
        client,
        site_base,
        rate_limiter: Arc::new(RateLimiter::new()),
    });

    log::info!("serving catalog frontend against {api_base}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(web::middleware::SecurityHeaders)
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(actix_web::web::to(web::handlers::pages::not_found))
    })
    .bind(
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
    )?
    .run()
    .await
}
