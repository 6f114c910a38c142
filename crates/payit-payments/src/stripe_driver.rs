//! Stripe Checkout Driver
//!
//! Implements [`CheckoutProvider`] with the "Stripe Checkout (Hosted)"
//! approach: one payment-mode session for the configured product, with the
//! requested quantity on a single line item.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, CreateCheckoutSessionPaymentMethodTypes,
    Currency,
};

use crate::checkout::{CheckoutProvider, CheckoutRequest, CheckoutSession};
use crate::error::{PaymentError, Result};
use crate::product::ProductConfig;

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
    product: ProductConfig,
}

impl StripeClient {
    /// Create a new Stripe-backed checkout driver for the given product.
    pub fn new(secret_key: &str, product: ProductConfig) -> Self {
        Self {
            client: Client::new(secret_key),
            product,
        }
    }

    fn currency(&self) -> Result<Currency> {
        self.product
            .currency
            .parse::<Currency>()
            .map_err(|_| PaymentError::Config(format!("unsupported currency: {}", self.product.currency)))
    }

    /// Get the underlying Stripe client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl CheckoutProvider for StripeClient {
    /// Create a Stripe Checkout session (Hosted approach)
    ///
    /// Returns the session ID and the URL to redirect the user to.
    async fn create_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let quantity = u64::try_from(request.quantity).unwrap_or(0).max(1);
        let currency = self.currency()?;

        tracing::debug!(quantity, product = %self.product.name, "creating stripe checkout session");

        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&self.product.success_url);
        params.cancel_url = Some(&self.product.cancel_url);
        params.mode = Some(CheckoutSessionMode::Payment);
        params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(quantity),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency,
                unit_amount: Some(self.product.price_cents),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: self.product.name.clone(),
                    description: Some(self.product.description.clone()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Stripe("No checkout URL returned".into()))?;

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(currency: &str) -> ProductConfig {
        ProductConfig {
            name: "Demo product".into(),
            description: "Great product".into(),
            price_cents: 1999,
            currency: currency.into(),
            success_url: "https://example.com/success".into(),
            cancel_url: "https://example.com/cancel".into(),
        }
    }

    #[test]
    fn test_currency_parses_known_code() {
        let client = StripeClient::new("sk_test_xxx", product("usd"));
        assert_eq!(client.currency().unwrap(), Currency::USD);
    }

    #[test]
    fn test_currency_rejects_unknown_code() {
        let client = StripeClient::new("sk_test_xxx", product("doubloons"));
        assert!(matches!(
            client.currency().unwrap_err(),
            PaymentError::Config(_)
        ));
    }
}
