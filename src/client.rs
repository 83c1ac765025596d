//! High-level client — `StorefrontClient` wires the HTTP, storage and
//! controller layers.

use crate::domain::order::client::{HttpOrderGateway, OrderGateway};
use crate::error::SdkError;
use crate::form::{FormView, OrderForm};
use crate::http::StorefrontHttp;
use crate::network;
use crate::storage::{FileStore, KeyValueStore};
use crate::tracking::{OrderArchive, TrackingPage, TrackingView};

use std::sync::Arc;

/// The primary entry point for the storefront SDK.
///
/// Owns the HTTP client and the local store, and constructs page controller
/// handles over the embedding UI's views.
pub struct StorefrontClient {
    http: StorefrontHttp,
    gateway: Arc<dyn OrderGateway>,
    store: Arc<dyn KeyValueStore>,
}

impl StorefrontClient {
    pub fn builder() -> StorefrontClientBuilder {
        StorefrontClientBuilder::default()
    }

    /// Replace the per-session anti-forgery token.
    pub async fn set_csrf_token(&self, token: impl Into<String>) {
        self.http.set_csrf_token(Some(token.into())).await;
    }

    /// Build the order form controller over the given view. Runs the
    /// initial validation and summary render.
    pub fn order_form(&self, view: Arc<dyn FormView>) -> Arc<OrderForm> {
        OrderForm::init(view, self.gateway.clone())
    }

    /// Build the tracking page controller over the given view and run the
    /// initial load sequence.
    pub async fn tracking_page(&self, view: Arc<dyn TrackingView>) -> Arc<TrackingPage> {
        let archive = OrderArchive::new(self.store.clone());
        TrackingPage::init(view, self.gateway.clone(), archive).await
    }
}

// ─── Builder ─────────────────────────────────────────────────────────────────

pub struct StorefrontClientBuilder {
    base_url: String,
    submit_url: Option<String>,
    csrf_token: Option<String>,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl Default for StorefrontClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_BASE_URL.to_string(),
            submit_url: None,
            csrf_token: None,
            store: None,
        }
    }
}

impl StorefrontClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Endpoint the form posts to; defaults to the base URL plus
    /// [`network::SUBMIT_ORDER_PATH`].
    pub fn submit_url(mut self, url: &str) -> Self {
        self.submit_url = Some(url.to_string());
        self
    }

    /// Anti-forgery token read from the page session.
    pub fn csrf_token(mut self, token: &str) -> Self {
        self.csrf_token = Some(token.to_string());
        self
    }

    /// Storage backend for the local order list; defaults to the on-disk
    /// store under the platform data directory.
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<StorefrontClient, SdkError> {
        let http = StorefrontHttp::new(&self.base_url, self.csrf_token);
        let submit_url = self
            .submit_url
            .unwrap_or_else(|| format!("{}{}", http.base_url(), network::SUBMIT_ORDER_PATH));
        let gateway: Arc<dyn OrderGateway> =
            Arc::new(HttpOrderGateway::new(http.clone(), submit_url));
        let store: Arc<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FileStore::default_location()?),
        };

        Ok(StorefrontClient {
            http,
            gateway,
            store,
        })
    }
}
