//! # Payment Strategy Trait
//!
//! The seam between the host-facing operations and a concrete processor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentStrategy (trait)                  │
//! │  ├── create_checkout()        typed, one POST               │
//! │  ├── fetch_transaction()      typed, one GET                │
//! │  ├── list_accounts()          typed, one GET                │
//! │  ├── payment_link()           lossy, never fails            │
//! │  └── transaction_information() lossy, never fails           │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!                  │ SlickpayGateway   │
//!                  └───────────────────┘
//! ```
//!
//! The typed methods let callers tell "no data" apart from "transport
//! failure". The lossy methods keep the host contract: they log what went
//! wrong and degrade to a displayable message or an empty record.

use crate::checkout::{CheckoutRequest, CheckoutSession, PaymentLink, FALLBACK_ERROR_MESSAGE};
use crate::error::{PaymentError, PaymentResult};
use crate::gateway::BankAccount;
use crate::transaction::TransactionInformation;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Open a hosted checkout for the invoice.
    ///
    /// Fails with [`PaymentError::UnsupportedCurrency`] before any network
    /// call when the invoice currency cannot be settled, and with
    /// [`PaymentError::ProviderError`] carrying the processor's message when
    /// the processor returned no checkout URL.
    async fn create_checkout(&self, request: &CheckoutRequest) -> PaymentResult<CheckoutSession>;

    /// Look up a transaction. `Ok(None)` means the processor answered
    /// without a transaction id.
    async fn fetch_transaction(
        &self,
        transaction_id: &str,
    ) -> PaymentResult<Option<TransactionInformation>>;

    /// Bank accounts payments can settle into.
    async fn list_accounts(&self) -> PaymentResult<Vec<BankAccount>>;

    /// Get the provider name (for logging and routing).
    fn provider_name(&self) -> &'static str;

    /// Payment link for the invoice page. Never fails.
    async fn payment_link(&self, request: &CheckoutRequest) -> PaymentLink {
        match self.create_checkout(request).await {
            Ok(session) => PaymentLink::Redirect {
                url: session.checkout_url,
            },
            Err(PaymentError::UnsupportedCurrency { currency }) => {
                debug!("Refusing checkout in {}", currency);
                PaymentLink::CurrencyNotice
            }
            Err(err) => {
                warn!(
                    provider = self.provider_name(),
                    invoice_id = %request.invoice_id,
                    "Checkout failed: {}",
                    err
                );
                let message = err
                    .provider_message()
                    .unwrap_or(FALLBACK_ERROR_MESSAGE)
                    .to_string();
                PaymentLink::Error { message }
            }
        }
    }

    /// Transaction record for the host. Lookup failures yield the empty record.
    async fn transaction_information(&self, transaction_id: &str) -> TransactionInformation {
        match self.fetch_transaction(transaction_id).await {
            Ok(Some(info)) => info,
            Ok(None) => TransactionInformation::default(),
            Err(err) => {
                warn!(
                    provider = self.provider_name(),
                    transaction_id,
                    "Transaction lookup failed: {}",
                    err
                );
                TransactionInformation::default()
            }
        }
    }
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// Host URLs the processor is pointed back at
#[derive(Debug, Clone)]
pub struct CallbackUrls {
    /// Base URL of the billing host (e.g., "https://billing.example.dz")
    pub system_url: String,
    /// Gateway module name, used in the callback path
    pub module_name: String,
}

impl CallbackUrls {
    pub fn new(system_url: impl Into<String>) -> Self {
        Self {
            system_url: system_url.into(),
            module_name: "slickpay".to_string(),
        }
    }

    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    /// `{system_url}/modules/gateways/callback/{module}.php`
    pub fn webhook_url(&self) -> String {
        format!(
            "{}/modules/gateways/callback/{}.php",
            self.system_url.trim_end_matches('/'),
            self.module_name
        )
    }

    /// Invoice page the payer returns to after checkout
    pub fn return_url(&self, invoice_id: &str) -> String {
        format!(
            "{}/viewinvoice.php?id={}",
            self.system_url.trim_end_matches('/'),
            invoice_id
        )
    }
}

impl Default for CallbackUrls {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Strategy that answers from canned results
    struct CannedStrategy {
        checkout: fn() -> PaymentResult<CheckoutSession>,
        lookup: fn() -> PaymentResult<Option<TransactionInformation>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PaymentStrategy for CannedStrategy {
        async fn create_checkout(
            &self,
            request: &CheckoutRequest,
        ) -> PaymentResult<CheckoutSession> {
            if !request.has_supported_currency() {
                return Err(PaymentError::UnsupportedCurrency {
                    currency: request.currency.clone(),
                });
            }
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.checkout)()
        }

        async fn fetch_transaction(
            &self,
            _transaction_id: &str,
        ) -> PaymentResult<Option<TransactionInformation>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.lookup)()
        }

        async fn list_accounts(&self) -> PaymentResult<Vec<BankAccount>> {
            Ok(Vec::new())
        }

        fn provider_name(&self) -> &'static str {
            "canned"
        }
    }

    fn canned(
        checkout: fn() -> PaymentResult<CheckoutSession>,
        lookup: fn() -> PaymentResult<Option<TransactionInformation>>,
    ) -> CannedStrategy {
        CannedStrategy {
            checkout,
            lookup,
            calls: AtomicUsize::new(0),
        }
    }

    fn session() -> PaymentResult<CheckoutSession> {
        Ok(CheckoutSession {
            invoice_id: "7".into(),
            provider: "canned".into(),
            checkout_url: "https://pay.example/7".into(),
        })
    }

    fn found() -> PaymentResult<Option<TransactionInformation>> {
        Ok(Some(TransactionInformation::new("7").with_status("paid")))
    }

    #[test]
    fn test_webhook_url() {
        let urls = CallbackUrls::new("https://billing.example.dz/");
        assert_eq!(
            urls.webhook_url(),
            "https://billing.example.dz/modules/gateways/callback/slickpay.php"
        );
        assert_eq!(
            urls.return_url("1024"),
            "https://billing.example.dz/viewinvoice.php?id=1024"
        );

        let urls = CallbackUrls::new("https://billing.example.dz").with_module_name("slickpay_dz");
        assert!(urls.webhook_url().ends_with("/callback/slickpay_dz.php"));
    }

    #[tokio::test]
    async fn test_payment_link_redirect() {
        let strategy = canned(session, found);
        let link = strategy
            .payment_link(&CheckoutRequest::new("7", 100.0, "DZD"))
            .await;
        assert_eq!(link.redirect_url(), Some("https://pay.example/7"));
    }

    #[tokio::test]
    async fn test_payment_link_currency_notice() {
        let strategy = canned(session, found);
        let link = strategy
            .payment_link(&CheckoutRequest::new("7", 100.0, "USD"))
            .await;
        assert_eq!(link, PaymentLink::CurrencyNotice);
        assert_eq!(strategy.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_payment_link_provider_message() {
        let strategy = canned(
            || {
                Err(PaymentError::ProviderError {
                    provider: "canned".into(),
                    message: "The account field is required".into(),
                })
            },
            found,
        );
        let link = strategy
            .payment_link(&CheckoutRequest::new("7", 100.0, "DZD"))
            .await;
        assert_eq!(link, PaymentLink::error("The account field is required"));
    }

    #[tokio::test]
    async fn test_payment_link_transport_failure() {
        let strategy = canned(|| Err(PaymentError::NetworkError("refused".into())), found);
        let link = strategy
            .payment_link(&CheckoutRequest::new("7", 100.0, "DZD"))
            .await;
        assert_eq!(link, PaymentLink::error(FALLBACK_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_transaction_information_swallows_errors() {
        let strategy = canned(session, || Err(PaymentError::Serialization("bad".into())));
        assert!(strategy.transaction_information("7").await.is_empty());

        let strategy = canned(session, || Ok(None));
        assert!(strategy.transaction_information("7").await.is_empty());

        let strategy = canned(session, found);
        let info = strategy.transaction_information("7").await;
        assert_eq!(info.status.as_deref(), Some("paid"));
    }
}
