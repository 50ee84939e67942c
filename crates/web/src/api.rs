//! Upstream commerce API client.
//!
//! Thin REST/JSON client for the basket, checkout, and order resources.
//! Responses are read as text first so non-success statuses and parse
//! failures can be logged with a truncated body for diagnostics.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use company_orders_core::{Basket, Checkout, DeliveryDetails, Order};

use crate::config::OrdersConfig;

/// Errors that can occur when calling the upstream commerce API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request path did not resolve against the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API returned a non-success status.
    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not parse as the expected resource.
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the upstream commerce API.
#[derive(Clone)]
pub struct OrdersApiClient {
    inner: Arc<OrdersApiClientInner>,
}

struct OrdersApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl OrdersApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &OrdersConfig) -> Self {
        Self {
            inner: Arc::new(OrdersApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                api_key: config.api_key.clone(),
            }),
        }
    }

    /// Get the current basket.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, status, or parse failure.
    pub async fn get_basket(&self) -> Result<Basket, ApiError> {
        self.get_json("basket").await
    }

    /// Attach delivery details to the basket.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, status, or parse failure.
    pub async fn add_delivery_details(
        &self,
        details: &DeliveryDetails,
    ) -> Result<Basket, ApiError> {
        let url = self.inner.base_url.join("basket")?;
        let response = self
            .inner
            .client
            .patch(url)
            .header("Authorization", self.inner.api_key.expose_secret())
            .json(&serde_json::json!({ "deliveryDetails": details }))
            .send()
            .await?;
        read_json(response, "basket").await
    }

    /// Get a checkout by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, other `ApiError`
    /// variants on transport, status, or parse failure.
    pub async fn get_checkout(&self, checkout_id: &str) -> Result<Checkout, ApiError> {
        self.get_json(&format!("checkouts/{checkout_id}")).await
    }

    /// Get an order by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown ids, other `ApiError`
    /// variants on transport, status, or parse failure.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, ApiError> {
        self.get_json(&format!("orders/{order_id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.inner.base_url.join(path)?;
        let response = self
            .inner
            .client
            .get(url)
            .header("Authorization", self.inner.api_key.expose_secret())
            .send()
            .await?;
        read_json(response, path).await
    }
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    resource: &str,
) -> Result<T, ApiError> {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(resource.to_string()));
    }

    let body = response.text().await?;
    if !status.is_success() {
        tracing::error!(
            status = %status,
            resource,
            body = %body.chars().take(500).collect::<String>(),
            "Commerce API returned non-success status"
        );
        return Err(ApiError::Status(status));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            resource,
            body = %body.chars().take(500).collect::<String>(),
            "Failed to parse commerce API response"
        );
        ApiError::Parse(e)
    })
}
