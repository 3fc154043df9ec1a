//! HTTP fetch layer for the storefront.
//!
//! Provides a small GET-only client with automatic JSON handling that runs
//! both in the browser (wasm32, via `fetch`) and natively.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::{FetchClient, FetchConfig};
//!
//! let config = FetchConfig::default();
//! let client = FetchClient::from_config(&config)?;
//!
//! let products: Vec<serde_json::Value> = client
//!     .get(&config.endpoint)
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod config;
mod error;
mod request;
mod response;
mod transport;

use std::collections::BTreeMap;

pub use config::{FetchConfig, DEFAULT_ENDPOINT};
pub use error::FetchError;
pub use request::{validate_url, Request};
pub use response::Response;
pub use transport::{HttpTransport, Transport};

/// HTTP client for outbound requests.
///
/// Generic over its [`Transport`] so callers can substitute the network.
#[derive(Debug, Clone)]
pub struct FetchClient<T = HttpTransport> {
    transport: T,
    default_headers: BTreeMap<String, String>,
}

impl FetchClient<HttpTransport> {
    /// Create a reqwest-backed client.
    pub fn from_config(config: &FetchConfig) -> Result<Self, FetchError> {
        config.validate()?;
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> FetchClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T) -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            transport,
            default_headers,
        }
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key.clone(), value.clone());
        }
        ClientRequestBuilder {
            transport: &self.transport,
            request,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a, T> {
    transport: &'a T,
    request: Request,
}

impl<T: Transport> ClientRequestBuilder<'_, T> {
    /// Send the request and return the buffered response.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(url = %self.request.url(), "sending request");
        let response = self.transport.send(self.request).await?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "response received");
        Ok(response)
    }
}
