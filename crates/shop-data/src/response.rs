//! HTTP response handling.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::FetchError;

/// Longest error body excerpt carried in [`FetchError::HttpError`].
const ERROR_EXCERPT_LEN: usize = 200;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error carries a short excerpt of the body for diagnostics.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let text = String::from_utf8_lossy(&self.body);
        let message = match text.trim() {
            "" => "empty response body".to_string(),
            t => t.chars().take(ERROR_EXCERPT_LEN).collect(),
        };
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}
