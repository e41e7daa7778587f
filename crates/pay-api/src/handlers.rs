//! # Request Handlers
//!
//! Axum request handlers for the gateway API.
//! Each handler maps to at most one processor call and never surfaces a
//! processor failure as an HTTP error. Failures become messages or empty
//! records, as the billing host expects.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
    Json,
};
use pay_core::{config_fields, CheckoutRequest, ConfigField, GatewayMetaData, PaymentLink, TransactionInformation};
use pay_slickpay::account_options;
use tracing::{info, instrument};

/// Fill in the host URLs the caller left out. The request is otherwise
/// forwarded as-is: currency is the only thing checked, by the strategy.
fn with_host_urls(state: &AppState, mut request: CheckoutRequest) -> CheckoutRequest {
    if request.webhook_url.is_empty() {
        request.webhook_url = state.urls.webhook_url();
    }
    if request.return_url.is_empty() {
        request.return_url = state.urls.return_url(&request.invoice_id);
    }
    request
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "slickpay-gateway",
        "provider": state.strategy.provider_name(),
        "version": env!("CARGO_PKG_VERSION"),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Gateway capability metadata
pub async fn metadata() -> Json<GatewayMetaData> {
    Json(GatewayMetaData::default())
}

/// Configuration field declarations, with the bank account dropdown filled
/// from the processor when credentials are configured
#[instrument(skip(state))]
pub async fn gateway_config(State(state): State<AppState>) -> Json<Vec<ConfigField>> {
    let accounts = account_options(state.settings.as_ref()).await;
    Json(config_fields(&accounts))
}

/// Open a checkout and report the outcome as JSON
#[instrument(skip(state, request), fields(invoice_id = %request.invoice_id))]
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Json<PaymentLink> {
    let request = with_host_urls(&state, request);
    let link = state.strategy.payment_link(&request).await;

    info!(
        "Checkout for invoice {}: {}",
        request.invoice_id,
        link.redirect_url().unwrap_or("no redirect")
    );

    Json(link)
}

/// Open a checkout and render the payment link fragment
#[instrument(skip(state, request), fields(invoice_id = %request.invoice_id))]
pub async fn checkout_link(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Html<String> {
    let request = with_host_urls(&state, request);
    let link = state.strategy.payment_link(&request).await;
    Html(link.to_html(&state.config.pay_now_label))
}

/// Transaction status; an empty object when nothing was found
#[instrument(skip(state))]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Json<TransactionInformation> {
    Json(state.strategy.transaction_information(&transaction_id).await)
}
