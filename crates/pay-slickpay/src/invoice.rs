//! # Invoice Creation
//!
//! Request body for `POST /users/invoices` and interpretation of its
//! response.

use pay_core::{loose, CheckoutRequest, PaymentError, PaymentResult};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct InvoicePayload {
    pub amount: f64,
    pub account: String,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Return URL after the hosted checkout
    pub url: String,
    pub items: Vec<InvoiceItem>,
    pub webhook_url: String,
    pub webhook_signature: String,
    pub webhook_meta_data: WebhookMetaData,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Echoed back by the processor on the webhook call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMetaData {
    pub x_invoice_id: String,
    pub x_amount: f64,
    pub x_hash: String,
}

/// Lowercase hex MD5 of `invoice_id ++ public_key`
pub fn integrity_hash(invoice_id: &str, public_key: &str) -> String {
    format!("{:x}", md5::compute(format!("{}{}", invoice_id, public_key)))
}

impl InvoicePayload {
    pub fn build(
        request: &CheckoutRequest,
        bank_account: &str,
        public_key: &str,
        webhook_signature: String,
    ) -> Self {
        let customer = &request.customer;

        Self {
            amount: request.amount,
            account: bank_account.to_string(),
            firstname: customer.first_name.clone(),
            lastname: customer.last_name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            address: customer.formatted_address(),
            url: request.return_url.clone(),
            items: vec![InvoiceItem {
                name: request.description.clone(),
                price: request.amount,
                quantity: 1,
            }],
            webhook_url: request.webhook_url.clone(),
            webhook_signature,
            webhook_meta_data: WebhookMetaData {
                x_invoice_id: request.invoice_id.clone(),
                x_amount: request.amount,
                x_hash: integrity_hash(&request.invoice_id, public_key),
            },
        }
    }
}

/// Checkout URL from an invoice response.
///
/// A response without a usable `url` becomes a provider error carrying the
/// processor's `message`, or a serialization error when there is none.
pub fn checkout_url(body: &Value) -> PaymentResult<String> {
    if let Some(url) = loose::non_empty(body, "url") {
        return Ok(loose::to_text(url));
    }

    match loose::non_empty(body, "message") {
        Some(message) => Err(PaymentError::ProviderError {
            provider: crate::PROVIDER.to_string(),
            message: loose::to_text(message),
        }),
        None => Err(PaymentError::Serialization(
            "Invoice response has neither url nor message".to_string(),
        )),
    }
}
