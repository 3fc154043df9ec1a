//! Product identifiers.
//!
//! The listing endpoint assigns ids; some sources use integers, some strings.
//! Both are accepted and held as text so that `7` and `"7"` name the same
//! product.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog product. Unique and stable within one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ProductId(String);

/// Wire forms of an id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl From<RawId> for ProductId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_match() {
        let from_int: ProductId = serde_json::from_str("7").unwrap();
        let from_text: ProductId = serde_json::from_str(r#""7""#).unwrap();
        assert_eq!(from_int, from_text);
        assert_eq!(from_int, ProductId::from(7_i64));
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = ProductId::new("sku-9");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""sku-9""#);
    }

    #[test]
    fn test_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<ProductId>("1.5").is_err());
        assert!(serde_json::from_str::<ProductId>("null").is_err());
    }

    #[test]
    fn test_id_parse_trims() {
        let id: ProductId = " 12 ".parse().unwrap();
        assert_eq!(id.as_str(), "12");
    }
}
