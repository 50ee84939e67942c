//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `API_URL` - Base URL of the upstream commerce API
//! - `CHS_API_KEY` - API key presented to the upstream API
//!
//! ## Optional
//! - `ORDERS_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDERS_PORT` - Listen port (default: 3000)
//! - `DISPATCH_DAYS` - Working days quoted for standard dispatch
//!   (default: 10; interpolated verbatim into delivery method text)
//! - `LP_CERTIFICATE_ORDERS_ENABLED` - Enable LP certificate layouts
//! - `LLP_CERTIFICATE_ORDERS_ENABLED` - Enable LLP certificate layouts
//! - `LIQUIDATION_CERTIFICATES_ENABLED` - Enable liquidated-company layouts
//! - `ADMINISTRATION_CERTIFICATES_ENABLED` - Enable administrated-company
//!   layouts
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct OrdersConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the upstream commerce API
    pub api_url: Url,
    /// API key for the upstream commerce API
    pub api_key: SecretString,
    /// Working days quoted for standard dispatch, interpolated verbatim
    pub dispatch_days: String,
    /// Mapper availability flags
    pub feature_flags: FeatureFlags,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Feature flags gating the specialized certificate mappers.
///
/// Captured once at startup and passed into the mapper factory by value;
/// nothing mutates flags during a request. Tests construct arbitrary
/// combinations directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFlags {
    pub lp_certificate_orders_enabled: bool,
    pub llp_certificate_orders_enabled: bool,
    pub liquidation_enabled: bool,
    pub administration_enabled: bool,
}

impl OrdersConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORDERS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERS_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ORDERS_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDERS_PORT".to_string(), e.to_string()))?;
        let api_url = Url::parse(&get_required_env("API_URL")?)
            .map_err(|e| ConfigError::InvalidEnvVar("API_URL".to_string(), e.to_string()))?;
        let api_key = SecretString::from(get_required_env("CHS_API_KEY")?);
        let dispatch_days = get_env_or_default("DISPATCH_DAYS", "10");
        let feature_flags = FeatureFlags::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            api_url,
            api_key,
            dispatch_days,
            feature_flags,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl FeatureFlags {
    fn from_env() -> Self {
        Self {
            lp_certificate_orders_enabled: get_bool_env("LP_CERTIFICATE_ORDERS_ENABLED"),
            llp_certificate_orders_enabled: get_bool_env("LLP_CERTIFICATE_ORDERS_ENABLED"),
            liquidation_enabled: get_bool_env("LIQUIDATION_CERTIFICATES_ENABLED"),
            administration_enabled: get_bool_env("ADMINISTRATION_CERTIFICATES_ENABLED"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a boolean environment variable; unset or unrecognized values are
/// false.
fn get_bool_env(key: &str) -> bool {
    std::env::var(key).is_ok_and(|value| parse_bool(&value))
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
