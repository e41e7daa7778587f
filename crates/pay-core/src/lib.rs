//! # pay-core
//!
//! Core types and traits for the slickpay-gateway payment adapter.
//!
//! This crate provides:
//! - `PaymentStrategy` trait for implementing payment processors
//! - `ApiMode` and the legacy test-mode flag conversion
//! - `CheckoutRequest`, `CheckoutSession` and `PaymentLink` for the checkout flow
//! - `TransactionInformation` for status lookups
//! - `GatewayMetaData` and `ConfigField` descriptors for the billing host
//! - `ConfigLookup` for injected configuration access
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{CheckoutRequest, Customer, PaymentStrategy};
//!
//! let request = CheckoutRequest::new("1024", 4500.0, "DZD")
//!     .with_description("Hosting - March")
//!     .with_customer(Customer::new("Amine", "Benali").with_email("amine@example.dz"))
//!     .with_return_url("https://billing.example.dz/viewinvoice.php?id=1024");
//!
//! // Never fails: a redirect, a currency notice or an error message
//! let link = strategy.payment_link(&request).await;
//! println!("{}", link.to_html("Pay Now"));
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod gateway;
pub mod loose;
pub mod mode;
pub mod strategy;
pub mod token;
pub mod transaction;

// Re-exports for convenience
pub use checkout::{
    CheckoutRequest, CheckoutSession, Customer, PaymentLink, DEFAULT_PAY_NOW_LABEL,
    FALLBACK_ERROR_MESSAGE, SUPPORTED_CURRENCY,
};
pub use config::{ConfigLookup, EnvLookup};
pub use error::{PaymentError, PaymentResult};
pub use gateway::{
    config_fields, AccountOptions, BankAccount, ConfigField, FieldKind, FieldOption,
    GatewayMetaData,
};
pub use mode::ApiMode;
pub use strategy::{BoxedPaymentStrategy, CallbackUrls, PaymentStrategy};
pub use token::{random_token, webhook_signature};
pub use transaction::{parse_timestamp, TransactionInformation};
