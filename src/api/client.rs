use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::common::ApiError;
use crate::models::{AppEnvelope, CatalogPage, CategoryKey, ListingItem, SigninResponse};

/// Every backend request must carry this header.
const AUTH_HEADER: &str = "X-Auth-Token";

/// Bounded wait for any single backend call. A slow backend degrades
/// to an inline error, never a hung page.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Thin HTTP client for the catalog backend. One reqwest client,
/// cloned freely across workers.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, auth_token: &str) -> Result<CatalogClient, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(CatalogClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
        })
    }

    /// `GET /api/apps/category/<key>?page=&limit=`
    pub async fn category(
        &self,
        key: CategoryKey,
        page: u32,
        limit: u32,
    ) -> Result<CatalogPage, ApiError> {
        let url = format!(
            "{}/api/apps/category/{}?page={}&limit={}",
            self.base_url, key, page, limit
        );
        self.get_json(&url).await
    }

    /// `GET /api/apps/all?q=&page=&limit=`
    pub async fn search(
        &self,
        q: &str,
        page: u32,
        limit: u32,
    ) -> Result<CatalogPage, ApiError> {
        let url = format!(
            "{}/api/apps/all?q={}&page={}&limit={}",
            self.base_url,
            urlencoding::encode(q.trim()),
            page,
            limit
        );
        self.get_json(&url).await
    }

    /// `GET /api/apps/get/<id>`
    pub async fn app(&self, id: &str) -> Result<ListingItem, ApiError> {
        let url = format!("{}/api/apps/get/{}", self.base_url, id);
        let envelope: AppEnvelope = self.get_json(&url).await?;
        Ok(envelope.app)
    }

    /// `POST /api/user/signin`
    pub async fn signin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SigninResponse, ApiError> {
        let url = format!("{}/api/user/signin", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &self.auth_token)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        resp.json::<SigninResponse>()
            .await
            .map_err(|e| ApiError::Shape(e.to_string()))
    }

    /// `POST /api/user/signup`. A 409 means the account already exists.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/user/signup", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &self.auth_token)
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        if resp.status() == StatusCode::CONFLICT {
            return Err(ApiError::Conflict);
        }
        Self::check_status(resp).await?;
        Ok(())
    }

    /// `POST /api/apps/admin/create`. The viewer's session token rides
    /// along as a bearer token; the backend does the admin check.
    pub async fn create_app(
        &self,
        form: reqwest::multipart::Form,
        session_token: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/api/apps/admin/create", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &self.auth_token)
            .bearer_auth(session_token)
            .multipart(form)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Shape(e.to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(url)
            .header(AUTH_HEADER, &self.auth_token)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Shape(e.to_string()))
    }

    async fn check_status(
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<ErrorBody>()
            .await
            .map(|b| b.message)
            .unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Render-safe projection of a listing fetch: callers always get a
/// defined (possibly empty) state, never a propagated error.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    pub items: Vec<ListingItem>,
    pub total: u64,
    pub error: Option<String>,
}

impl CatalogView {
    pub fn from_result(result: Result<CatalogPage, ApiError>) -> CatalogView {
        match result {
            Ok(page) => CatalogView {
                items: page.items,
                total: page.total,
                error: None,
            },
            Err(e) => {
                log::warn!("catalog fetch failed: {e}");
                CatalogView {
                    items: Vec::new(),
                    total: 0,
                    error: Some(e.user_message()),
                }
            }
        }
    }
}
