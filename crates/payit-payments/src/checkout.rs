//! Checkout Types and Service
//!
//! Provider-agnostic half of the payments crate: request/result types, the
//! [`CheckoutProvider`] seam, and the [`CheckoutService`] applying domain
//! defaults before delegating to whichever provider is wired in.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Caller-supplied inputs for creating a checkout session.
///
/// An absent or non-positive quantity means "one unit"; the service applies
/// that default so providers always see a valid quantity.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub quantity: i64,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider session ID
    pub id: String,

    /// URL to redirect user to
    pub url: String,
}

/// A payment provider capable of creating hosted checkout sessions.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_session(&self, request: CheckoutRequest) -> Result<CheckoutSession>;
}

/// Provider-agnostic business rules for initiating checkout flows.
pub struct CheckoutService {
    provider: Arc<dyn CheckoutProvider>,
}

impl CheckoutService {
    /// Wire the given provider into a reusable checkout service.
    pub fn new(provider: Arc<dyn CheckoutProvider>) -> Self {
        Self { provider }
    }

    /// Apply domain defaults before delegating to the configured provider.
    pub async fn create_session(&self, mut request: CheckoutRequest) -> Result<CheckoutSession> {
        if request.quantity <= 0 {
            request.quantity = 1;
        }

        self.provider.create_session(request).await
    }
}
