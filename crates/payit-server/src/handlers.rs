//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use payit_payments::{CheckoutRequest, CheckoutSession};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub product: String,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub name: String,
    pub description: String,
    pub price_display: String,
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        product: state.product.name.clone(),
    })
}

/// Product display data for the checkout page
pub async fn product_info(State(state): State<AppState>) -> Json<ProductResponse> {
    Json(ProductResponse {
        name: state.product.name.clone(),
        description: state.product.description.clone(),
        price_display: state.product.price_display(),
        currency: state.product.currency.to_uppercase(),
    })
}

/// Create a checkout session for the configured product.
///
/// An absent body is accepted and means "one unit"; a malformed body is a 400.
pub async fn create_checkout(
    State(state): State<AppState>,
    payload: Option<Json<CheckoutRequest>>,
) -> Result<Json<CheckoutSession>, (StatusCode, Json<ErrorResponse>)> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let session = state.checkout.create_session(request).await.map_err(|e| {
        tracing::error!("Checkout error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.user_message().into(),
                code: "CHECKOUT_ERROR".into(),
            }),
        )
    })?;

    tracing::info!(session = %session.id, "checkout session created");

    Ok(Json(session))
}
