//! Fetch configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::request::validate_url;
use crate::FetchError;

/// Product listing endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Where and how to fetch the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Product listing endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in milliseconds. Ignored in the browser.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent sent by native builds.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!("shop-data/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    /// Default configuration pointed at `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// The timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the endpoint and timeout.
    pub fn validate(&self) -> Result<(), FetchError> {
        validate_url(&self.endpoint)?;
        if self.timeout_ms == 0 {
            return Err(FetchError::RequestError(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
