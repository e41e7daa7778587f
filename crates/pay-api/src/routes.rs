//! # Routes
//!
//! Axum router configuration for the gateway API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health, / - Health check
/// - GET  /api/v1/gateway/metadata - Gateway capability metadata
/// - GET  /api/v1/gateway/config - Configuration fields (loads bank accounts)
/// - POST /api/v1/checkout - Open a checkout, JSON outcome
/// - POST /api/v1/checkout/link - Open a checkout, rendered HTML link
/// - GET  /api/v1/transactions/{transaction_id} - Transaction status
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let gateway_routes = Router::new()
        .route("/metadata", get(handlers::metadata))
        .route("/config", get(handlers::gateway_config));

    let api_routes = Router::new()
        .nest("/gateway", gateway_routes)
        .route("/checkout", post(handlers::create_checkout))
        .route("/checkout/link", post(handlers::checkout_link))
        .route("/transactions/{transaction_id}", get(handlers::get_transaction));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
