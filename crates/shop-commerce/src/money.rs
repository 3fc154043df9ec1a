//! Monetary amounts.
//!
//! Prices arrive as JSON decimals with no currency attached. Amounts keep
//! full `f64` precision through every sum and product; rounding to two
//! places happens only when formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Symbol used by [`Amount::display`].
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A currency-agnostic monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Zero.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// The unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// A usable price: finite and not negative.
    pub fn is_valid_price(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: i64) -> Amount {
        Amount(self.0 * quantity as f64)
    }

    /// Value rounded half away from zero to two decimal places.
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }

    /// Format without symbol (e.g., "59.97").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.rounded())
    }

    /// Format with the default symbol (e.g., "$59.97").
    pub fn display(&self) -> String {
        self.display_with(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Format with a caller-chosen symbol.
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.display_amount())
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

impl Mul<i64> for Amount {
    type Output = Amount;

    fn mul(self, quantity: i64) -> Amount {
        self.times(quantity)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::zero(), Add::add)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_then_round() {
        let total = Amount::new(19.99) * 3;
        assert_eq!(total.display_amount(), "59.97");
        assert_eq!(total.display(), "$59.97");
    }

    #[test]
    fn test_sum_keeps_precision_until_display() {
        // 0.1 + 0.2 is not exactly 0.3 in binary; the sum must not be
        // rounded per term.
        let total: Amount = [0.1, 0.2].into_iter().map(Amount::new).sum();
        assert!((total.value() - 0.3).abs() < 1e-12);
        assert_ne!(total.value(), 0.3);
        assert_eq!(total.display_amount(), "0.30");
    }

    #[test]
    fn test_round_once_differs_from_round_each() {
        // Ten lines of 0.004 round to 0.00 each but sum to 0.04.
        let total: Amount = std::iter::repeat(Amount::new(0.004)).take(10).sum();
        assert_eq!(total.display_amount(), "0.04");
    }

    #[test]
    fn test_display_with_symbol() {
        assert_eq!(Amount::new(109.95).display_with("€"), "€109.95");
        assert_eq!(Amount::new(22.3).display_amount(), "22.30");
        assert_eq!(Amount::zero().display(), "$0.00");
    }

    #[test]
    fn test_valid_price() {
        assert!(Amount::new(0.0).is_valid_price());
        assert!(Amount::new(7.95).is_valid_price());
        assert!(!Amount::new(-1.0).is_valid_price());
        assert!(!Amount::new(f64::NAN).is_valid_price());
        assert!(!Amount::new(f64::INFINITY).is_valid_price());
    }

    #[test]
    fn test_serde_transparent() {
        let a: Amount = serde_json::from_str("55.99").unwrap();
        assert_eq!(a.value(), 55.99);
        assert_eq!(serde_json::to_string(&a).unwrap(), "55.99");
    }
}
