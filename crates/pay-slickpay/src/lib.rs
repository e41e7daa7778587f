//! # pay-slickpay
//!
//! Slick-Pay (CIB/EDAHABIA) payment strategy for slickpay-gateway.
//!
//! Three processor calls are covered:
//!
//! | operation | request |
//! |---|---|
//! | open a hosted checkout | `POST {base}/users/invoices` |
//! | transaction status | `GET {base}/invoices/{id}` |
//! | settlement accounts | `GET {base}/users/accounts` |
//!
//! `{base}` is the sandbox or live API root picked by [`pay_core::ApiMode`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_slickpay::SlickpayGateway;
//! use pay_core::{CheckoutRequest, PaymentStrategy};
//!
//! // SLICKPAY_PUBLIC_KEY, SLICKPAY_BANK_ACCOUNT, SLICKPAY_MODE
//! let gateway = SlickpayGateway::from_env()?;
//!
//! let link = gateway.payment_link(&CheckoutRequest::new("1024", 4500.0, "DZD")).await;
//! let info = gateway.transaction_information("118").await;
//! ```

pub mod accounts;
pub mod client;
pub mod config;
pub mod gateway;
pub mod invoice;
pub mod status;

/// Provider name used in sessions, errors and logs
pub const PROVIDER: &str = "slickpay";

// Re-exports
pub use accounts::account_options;
pub use client::SlickpayClient;
pub use config::SlickpayConfig;
pub use gateway::SlickpayGateway;
pub use invoice::{integrity_hash, InvoicePayload, WebhookMetaData};
