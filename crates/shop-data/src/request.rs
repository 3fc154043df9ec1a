//! Outbound GET request description.

use std::collections::BTreeMap;

use reqwest::Url;

use crate::FetchError;

/// A GET request handed to a [`Transport`](crate::Transport).
///
/// The storefront only ever reads, so there is no method or body here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) url: String,
    pub(crate) headers: BTreeMap<String, String>,
}

impl Request {
    /// Create a request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Add a header, replacing any previous value for the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Iterate over headers in name order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reject anything that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), FetchError> {
        validate_url(&self.url)
    }
}

/// Check that `url` parses as an absolute http(s) URL with a host.
pub fn validate_url(url: &str) -> Result<(), FetchError> {
    let invalid = || FetchError::InvalidUrl(url.to_string());

    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}
