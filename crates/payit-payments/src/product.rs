//! Product Configuration

use serde::{Deserialize, Serialize};

/// Metadata for the single product the store sells.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Product name shown on the checkout page and in Stripe
    pub name: String,

    /// Short product description
    pub description: String,

    /// Unit price in the smallest currency unit
    pub price_cents: i64,

    /// Lowercase ISO currency code, e.g. "usd"
    pub currency: String,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

impl ProductConfig {
    /// Human-readable unit price, e.g. `$19.99`.
    #[allow(clippy::cast_precision_loss)]
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price_cents as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(cents: i64) -> ProductConfig {
        ProductConfig {
            name: "Demo product".into(),
            description: "Great product".into(),
            price_cents: cents,
            currency: "usd".into(),
            success_url: "https://example.com/success".into(),
            cancel_url: "https://example.com/cancel".into(),
        }
    }

    #[test]
    fn test_price_display() {
        assert_eq!(product(1999).price_display(), "$19.99");
        assert_eq!(product(500).price_display(), "$5.00");
    }
}
