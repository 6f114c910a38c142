//! payit HTTP Server
//!
//! Axum-based server for the single-product demo store: serves the WASM
//! checkout frontend and the small JSON API it talks to.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payit_payments::{CheckoutService, StripeClient};

use crate::config::Config;
use crate::handlers::{create_checkout, health_check, product_info};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (.env.local is sourced when present)
    let config = Config::load().map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    tracing::info!(product = %config.product.name, "✓ Stripe configured");

    // Wire the Stripe driver into the checkout service
    let stripe = StripeClient::new(&config.stripe_secret_key, config.product.clone());
    let checkout = Arc::new(CheckoutService::new(Arc::new(stripe)));

    let state = AppState {
        checkout,
        product: Arc::new(config.product.clone()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/product", get(product_info))
        .route("/api/checkout", post(create_checkout))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("🚀 payit server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /api/product  - Product display data");
    tracing::info!("  POST /api/checkout - Create Stripe checkout session");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped cleanly");

    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutting down server...");
}
