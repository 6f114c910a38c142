//! Application State

use std::sync::Arc;

use payit_payments::{CheckoutService, ProductConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout service backed by the configured payment provider
    pub checkout: Arc<CheckoutService>,

    /// The single product this store sells
    pub product: Arc<ProductConfig>,
}
