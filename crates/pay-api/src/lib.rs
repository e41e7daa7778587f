//! # pay-api
//!
//! HTTP API layer for slickpay-gateway.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The four operations a billing host calls on the gateway
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/gateway/metadata` | Gateway metadata |
//! | GET | `/api/v1/gateway/config` | Configuration fields |
//! | POST | `/api/v1/checkout` | Open checkout (JSON outcome) |
//! | POST | `/api/v1/checkout/link` | Open checkout (HTML payment link) |
//! | GET | `/api/v1/transactions/{id}` | Transaction status |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
