//! # payit-payments
//!
//! Checkout session creation for the payit demo store.
//!
//! The store sells a single configured product through Stripe Checkout
//! (Hosted): the frontend collects a quantity, the server asks Stripe for a
//! session, and the browser is redirected to Stripe's hosted payment page.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Your Site  │────▶│  Stripe Hosted  │────▶│  Your Site  │
//! │ (checkout)  │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! The crate is split along the provider seam: [`CheckoutService`] holds the
//! domain rules (quantity defaulting) and delegates to any
//! [`CheckoutProvider`]; [`StripeClient`] is the only real provider.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use payit_payments::{CheckoutRequest, CheckoutService, ProductConfig, StripeClient};
//!
//! let client = StripeClient::new("sk_test_xxx", product);
//! let service = CheckoutService::new(Arc::new(client));
//!
//! let session = service.create_session(CheckoutRequest { quantity: 2 }).await?;
//! // Redirect user to: session.url
//! ```

mod checkout;
mod error;
mod product;
mod stripe_driver;

pub use checkout::{CheckoutProvider, CheckoutRequest, CheckoutService, CheckoutSession};
pub use error::{PaymentError, Result};
pub use product::ProductConfig;
pub use stripe_driver::StripeClient;
