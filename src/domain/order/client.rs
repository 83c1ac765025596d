//! Order gateway — the controllers' seam to the backend endpoints.

use super::wire::{OrdersResponse, SubmitResponse};
use super::Order;
use crate::error::HttpError;
use crate::http::StorefrontHttp;
use crate::network;

use async_trait::async_trait;
use reqwest::multipart::Form;

/// Backend operations the page controllers need.
///
/// Object-safe so tests can substitute a scripted fake for the live client.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// POST the form fields as a multipart request to the submit endpoint.
    async fn submit_order(
        &self,
        fields: &[(String, String)],
    ) -> Result<SubmitResponse, HttpError>;

    /// GET the order list. Errors are the caller's to absorb.
    async fn fetch_orders(&self) -> Result<Vec<Order>, HttpError>;
}

/// `OrderGateway` over the live backend.
pub struct HttpOrderGateway {
    http: StorefrontHttp,
    submit_url: String,
}

impl HttpOrderGateway {
    pub fn new(http: StorefrontHttp, submit_url: impl Into<String>) -> Self {
        Self {
            http,
            submit_url: submit_url.into(),
        }
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn submit_order(
        &self,
        fields: &[(String, String)],
    ) -> Result<SubmitResponse, HttpError> {
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }
        self.http.post_multipart(&self.submit_url, form).await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, HttpError> {
        let url = format!("{}{}", self.http.base_url(), network::ORDERS_PATH);
        let resp: OrdersResponse = self.http.get_json(&url).await?;
        Ok(resp.orders)
    }
}
