//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::OrdersApiClient;
use crate::config::OrdersConfig;
use crate::mappers::factory::CertificateMapperFactory;
use crate::mappers::filing_history::FilingHistoryDescriptions;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The mapper factory and the filing history
/// descriptions are built once at startup; mapping calls stay pure.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: OrdersConfig,
    api: OrdersApiClient,
    mapper_factory: CertificateMapperFactory,
    descriptions: FilingHistoryDescriptions,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: OrdersConfig) -> Self {
        let api = OrdersApiClient::new(&config);
        let mapper_factory = CertificateMapperFactory::new(config.feature_flags);
        let descriptions = FilingHistoryDescriptions::bundled();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                mapper_factory,
                descriptions,
            }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &OrdersConfig {
        &self.inner.config
    }

    /// Get a reference to the upstream API client.
    #[must_use]
    pub fn api(&self) -> &OrdersApiClient {
        &self.inner.api
    }

    /// Get a reference to the certificate mapper factory.
    #[must_use]
    pub fn mapper_factory(&self) -> &CertificateMapperFactory {
        &self.inner.mapper_factory
    }

    /// Get a reference to the filing history description resolver.
    #[must_use]
    pub fn descriptions(&self) -> &FilingHistoryDescriptions {
        &self.inner.descriptions
    }

    /// Working days quoted for standard dispatch.
    #[must_use]
    pub fn dispatch_days(&self) -> &str {
        &self.inner.config.dispatch_days
    }
}
