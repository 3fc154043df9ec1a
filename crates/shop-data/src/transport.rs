//! The seam between the fetch client and the network.

use async_trait::async_trait;

use crate::{FetchConfig, FetchError, Request, Response};

/// Something that can perform a GET and buffer the response.
///
/// Futures are not `Send`: in the browser the request runs on the single UI
/// thread through `fetch`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// reqwest-backed transport. Uses `fetch` on wasm32 and hyper elsewhere.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from config.
    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let builder = reqwest::Client::builder();

        // Browsers own timeouts and the User-Agent header.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone());

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        request.validate()?;

        let mut builder = self.client.get(request.url());
        for (key, value) in request.headers() {
            builder = builder.header(key, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}
