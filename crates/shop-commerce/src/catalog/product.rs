//! Product types.

use crate::ids::ProductId;
use crate::money::Amount;
use serde::{Deserialize, Deserializer, Serialize};

/// A product in the catalog.
///
/// Field names follow the listing endpoint's JSON. Only `id` and `price` are
/// required; text fields default to empty and a missing or malformed
/// `rating` is treated as absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Identifier assigned by the catalog source.
    pub id: ProductId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Unit price.
    pub price: Amount,
    /// Long description (not shown in the grid).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Average customer rating.
    #[serde(
        default,
        deserialize_with = "lenient_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Rating>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: Amount::new(price),
            description: None,
            category: String::new(),
            image: String::new(),
            rating: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u32) -> Self {
        self.rating = Some(Rating { rate, count });
        self
    }

    /// Why this entry cannot be shown, if it cannot.
    pub fn defect(&self) -> Option<String> {
        if self.id.as_str().is_empty() {
            return Some("empty id".to_string());
        }
        if !self.price.is_valid_price() {
            return Some(format!("invalid price {}", self.price.value()));
        }
        None
    }
}

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Average score.
    pub rate: f64,
    /// Number of ratings.
    pub count: u32,
}

impl Rating {
    /// "rate (count)", as shown next to the price.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.rate, self.count)
    }
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
