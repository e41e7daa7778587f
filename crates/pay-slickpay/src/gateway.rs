//! # Slick-Pay Gateway
//!
//! [`PaymentStrategy`] implementation over the Slick-Pay v2 API. Each
//! operation issues exactly one request; nothing is cached or retried.

use crate::accounts::parse_accounts;
use crate::client::SlickpayClient;
use crate::config::SlickpayConfig;
use crate::invoice::{checkout_url, InvoicePayload};
use crate::status::parse_transaction;
use crate::PROVIDER;
use async_trait::async_trait;
use pay_core::{
    webhook_signature, BankAccount, CheckoutRequest, CheckoutSession, ConfigLookup, PaymentError,
    PaymentResult, PaymentStrategy, TransactionInformation,
};
use tracing::{debug, info, instrument};

/// Hosted-checkout strategy for CIB/EDAHABIA cards
pub struct SlickpayGateway {
    config: SlickpayConfig,
    client: SlickpayClient,
}

impl SlickpayGateway {
    pub fn new(config: SlickpayConfig) -> PaymentResult<Self> {
        let client = SlickpayClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(SlickpayConfig::from_env()?)
    }

    /// Create from an injected settings source
    pub fn from_lookup(lookup: &dyn ConfigLookup) -> PaymentResult<Self> {
        Self::new(SlickpayConfig::from_lookup(lookup)?)
    }

    pub fn config(&self) -> &SlickpayConfig {
        &self.config
    }
}

#[async_trait]
impl PaymentStrategy for SlickpayGateway {
    #[instrument(skip(self, request), fields(invoice_id = %request.invoice_id, mode = %self.config.mode))]
    async fn create_checkout(&self, request: &CheckoutRequest) -> PaymentResult<CheckoutSession> {
        if !request.has_supported_currency() {
            return Err(PaymentError::UnsupportedCurrency {
                currency: request.currency.clone(),
            });
        }

        let payload = InvoicePayload::build(
            request,
            &self.config.bank_account,
            &self.config.public_key,
            webhook_signature(),
        );

        debug!(
            "Creating Slick-Pay invoice: amount={}, account={}",
            payload.amount, payload.account
        );

        let body = self.client.post(&["users", "invoices"], &payload).await?;
        let checkout_url = checkout_url(&body)?;

        info!("Created Slick-Pay invoice checkout: {}", checkout_url);

        Ok(CheckoutSession {
            invoice_id: request.invoice_id.clone(),
            provider: PROVIDER.to_string(),
            checkout_url,
        })
    }

    #[instrument(skip(self), fields(mode = %self.config.mode))]
    async fn fetch_transaction(
        &self,
        transaction_id: &str,
    ) -> PaymentResult<Option<TransactionInformation>> {
        let body = self.client.get(&["invoices", transaction_id]).await?;
        let info = parse_transaction(&body);

        match &info {
            Some(info) => debug!("Slick-Pay transaction status: {:?}", info.status),
            None => debug!("Slick-Pay returned no transaction"),
        }

        Ok(info)
    }

    #[instrument(skip(self), fields(mode = %self.config.mode))]
    async fn list_accounts(&self) -> PaymentResult<Vec<BankAccount>> {
        let body = self.client.get(&["users", "accounts"]).await?;
        Ok(parse_accounts(&body))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
