//! # Slick-Pay Gateway
//!
//! HTTP front for the Slick-Pay (CIB/EDAHABIA) payment adapter.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or provide config/gateway.toml)
//! export SLICKPAY_PUBLIC_KEY=...
//! export SLICKPAY_BANK_ACCOUNT=...
//! export SLICKPAY_MODE=test
//! export SYSTEM_URL=https://billing.example.dz
//!
//! # Run the server
//! slickpay-gateway
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.strategy.provider_name());
    info!("Webhook URL: {}", state.urls.webhook_url());

    let app = routes::create_router(state);

    info!("slickpay-gateway {} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if !is_prod {
        info!("Checkout: POST http://{}/api/v1/checkout", addr);
        info!("Status:   GET  http://{}/api/v1/transactions/{{id}}", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
