//! Low-level HTTP client — `StorefrontHttp`.
//!
//! Wraps `reqwest` and injects the anti-forgery and AJAX-marker headers the
//! backend expects on every request. Returns wire types; conversion to
//! domain types happens in the gateway layer.

use crate::error::HttpError;

use async_lock::RwLock;
use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the per-session anti-forgery token.
const CSRF_HEADER: &str = "X-CSRF-TOKEN";
/// Marker header the backend uses to recognize AJAX requests.
const AJAX_HEADER: &str = "X-Requested-With";
const AJAX_MARKER: &str = "XMLHttpRequest";

/// Low-level HTTP client for the storefront backend.
pub struct StorefrontHttp {
    base_url: String,
    client: Client,
    /// Anti-forgery token, read from the page session at startup.
    csrf_token: Arc<RwLock<Option<String>>>,
}

impl StorefrontHttp {
    pub fn new(base_url: &str, csrf_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            csrf_token: Arc::new(RwLock::new(csrf_token)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the anti-forgery token (e.g. after a session refresh).
    pub async fn set_csrf_token(&self, token: Option<String>) {
        *self.csrf_token.write().await = token;
    }

    /// GET a JSON endpoint.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let req = self
            .client
            .get(url)
            .header("Accept", "application/json");
        let req = self.with_markers(req).await;
        Self::decode(req.send().await?).await
    }

    /// POST a multipart form and decode the JSON response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: &str,
        form: multipart::Form,
    ) -> Result<T, HttpError> {
        let req = self.client.post(url).multipart(form);
        let req = self.with_markers(req).await;
        Self::decode(req.send().await?).await
    }

    async fn with_markers(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = self.csrf_token.read().await.as_ref() {
            req = req.header(CSRF_HEADER, token.as_str());
        }
        req.header(AJAX_HEADER, AJAX_MARKER)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, HttpError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            419 => Err(HttpError::CsrfMismatch),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for StorefrontHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            csrf_token: self.csrf_token.clone(),
        }
    }
}
