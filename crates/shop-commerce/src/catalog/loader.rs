//! Catalog loader: one GET against the listing endpoint.

use shop_data::{FetchClient, FetchConfig, HttpTransport, Transport};

use crate::catalog::{Catalog, CatalogState, Product};
use crate::error::LoadError;

/// Fetches the product listing.
#[derive(Debug, Clone)]
pub struct CatalogClient<T = HttpTransport> {
    client: FetchClient<T>,
    endpoint: String,
}

impl CatalogClient<HttpTransport> {
    /// Create a reqwest-backed loader for `config.endpoint`.
    pub fn from_config(config: &FetchConfig) -> Result<Self, LoadError> {
        let client = FetchClient::from_config(config)?;
        Ok(Self::new(client, config.endpoint.clone()))
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Create a loader over an existing client.
    pub fn new(client: FetchClient<T>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The listing endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and parse the listing without touching any state.
    pub async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        tracing::info!(endpoint = %self.endpoint, "loading catalog");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let entries: Vec<serde_json::Value> = response.json()?;
        Ok(parse_catalog(entries))
    }

    /// Run one full load cycle against `catalog`.
    pub async fn load<'c>(&self, catalog: &'c mut Catalog) -> &'c CatalogState {
        let ticket = catalog.begin_load();
        let result = self.fetch().await;
        catalog.finish_load(ticket, result);
        catalog.state()
    }
}

/// Turn the entries of a listing array into products.
///
/// Entries that do not form a usable product are skipped with a warning so
/// that one bad record cannot blank the grid.
pub fn parse_catalog(entries: Vec<serde_json::Value>) -> Vec<Product> {
    let total = entries.len();

    let products: Vec<Product> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Product>(entry) {
            Ok(product) => match product.defect() {
                None => Some(product),
                Some(defect) => {
                    tracing::warn!(index, id = %product.id, %defect, "skipping catalog entry");
                    None
                }
            },
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed catalog entry");
                None
            }
        })
        .collect();

    if products.len() < total {
        tracing::warn!(
            kept = products.len(),
            skipped = total - products.len(),
            "catalog contained unusable entries"
        );
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shop_data::{FetchError, Request, Response};
    use std::collections::HashMap;

    const ENDPOINT: &str = "https://store.test/products";

    /// Serves one canned outcome for every request.
    struct CannedTransport(Result<(u16, &'static str), FetchError>);

    #[async_trait(?Send)]
    impl Transport for CannedTransport {
        async fn send(&self, _request: Request) -> Result<Response, FetchError> {
            self.0
                .clone()
                .map(|(status, body)| Response::new(status, HashMap::new(), body.as_bytes().to_vec()))
        }
    }

    fn loader(outcome: Result<(u16, &'static str), FetchError>) -> CatalogClient<CannedTransport> {
        CatalogClient::new(FetchClient::with_transport(CannedTransport(outcome)), ENDPOINT)
    }

    const THREE_PRODUCTS: &str = r#"[
        {"id": 3, "title": "Mens Cotton Jacket", "price": 55.99, "category": "men's clothing",
         "image": "https://img.test/3.jpg", "rating": {"rate": 4.7, "count": 500}},
        {"id": 1, "title": "Backpack", "price": 109.95, "category": "men's clothing",
         "image": "https://img.test/1.jpg"},
        {"id": 2, "title": "Slim Fit T-Shirt", "price": 22.3, "category": "men's clothing",
         "image": "https://img.test/2.jpg", "rating": {"rate": 4.1, "count": 259}}
    ]"#;

    #[tokio::test]
    async fn test_load_success_preserves_order() {
        let mut catalog = Catalog::new();
        let state = loader(Ok((200, THREE_PRODUCTS))).load(&mut catalog).await;

        let ids: Vec<&str> = state.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(state.products()[1].rating, None);
    }

    #[tokio::test]
    async fn test_load_http_500_is_error() {
        let mut catalog = Catalog::new();
        let state = loader(Ok((500, "Internal Server Error")))
            .load(&mut catalog)
            .await;

        let message = state.error().expect("error state");
        assert!(!message.is_empty());
        assert!(state.products().is_empty());
    }

    #[tokio::test]
    async fn test_load_transport_failure_hides_raw_error() {
        let mut catalog = Catalog::new();
        let raw = "error sending request: tcp connect error: Connection refused (os error 111)";
        let state = loader(Err(FetchError::RequestError(raw.to_string())))
            .load(&mut catalog)
            .await;

        let message = state.error().expect("error state");
        assert!(!message.contains("os error"));
    }

    #[tokio::test]
    async fn test_load_non_array_is_error() {
        let mut catalog = Catalog::new();
        let state = loader(Ok((200, r#"{"products": []}"#)))
            .load(&mut catalog)
            .await;
        assert_eq!(state.error(), Some("The store sent an unexpected response."));
    }

    #[tokio::test]
    async fn test_fetch_maps_status() {
        let err = loader(Ok((404, "not found"))).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_catalog(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_skips_unusable_entries() {
        let body = r#"[
            {"id": 1, "title": "ok", "price": 1.5},
            {"title": "no id", "price": 2},
            {"id": 3, "title": "no price"},
            {"id": 4, "title": "negative", "price": -9},
            "not even an object",
            {"id": 6, "title": "also ok", "price": 0}
        ]"#;
        let products = loader(Ok((200, body))).fetch().await.unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6"]);
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_malformed() {
        let err = loader(Ok((200, "<!doctype html>"))).fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }
}
