//! Catalog load errors.

use shop_data::FetchError;
use thiserror::Error;

/// Why a catalog load failed.
///
/// `Display` carries the technical detail for logs. What the shopper sees
/// comes from [`LoadError::user_message`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Configured endpoint is not a usable URL.
    #[error("Invalid catalog endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network or transport failure.
    #[error("Catalog request failed: {0}")]
    Transport(String),

    /// The request did not complete in time.
    #[error("Catalog request timed out")]
    Timeout,

    /// Non-success HTTP status.
    #[error("Catalog endpoint returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// Body was not a JSON array of products.
    #[error("Catalog response is malformed: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Short, human-readable message for the storefront.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Status { .. } => "Something went wrong!",
            LoadError::Transport(_) | LoadError::Timeout => {
                "Unable to reach the store. Check your connection and try again."
            }
            LoadError::Malformed(_) => "The store sent an unexpected response.",
            LoadError::InvalidEndpoint(_) => "The store is not configured correctly.",
        }
    }
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::InvalidUrl(url) => LoadError::InvalidEndpoint(url),
            FetchError::RequestError(msg) => LoadError::Transport(msg),
            FetchError::Timeout => LoadError::Timeout,
            FetchError::HttpError { status, message } => LoadError::Status {
                status,
                detail: message,
            },
            FetchError::ParseError(msg) => LoadError::Malformed(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_short_and_non_empty() {
        let errors = [
            LoadError::InvalidEndpoint("x".into()),
            LoadError::Transport("dns error: failed to lookup address".into()),
            LoadError::Timeout,
            LoadError::Status {
                status: 500,
                detail: "boom".into(),
            },
            LoadError::Malformed("expected value at line 1".into()),
        ];
        for err in &errors {
            let msg = err.user_message();
            assert!(!msg.is_empty());
            assert!(!msg.contains("dns"));
            assert!(!msg.contains("line 1"));
        }
    }

    #[test]
    fn test_from_fetch_error() {
        let err: LoadError = FetchError::HttpError {
            status: 503,
            message: "unavailable".into(),
        }
        .into();
        assert_eq!(
            err,
            LoadError::Status {
                status: 503,
                detail: "unavailable".into()
            }
        );
        assert_eq!(LoadError::from(FetchError::Timeout), LoadError::Timeout);
    }
}
