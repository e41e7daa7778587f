//! # Checkout Types
//!
//! Invoice checkout request and outcome types.

use serde::{Deserialize, Serialize};

/// The only currency the processor settles in
pub const SUPPORTED_CURRENCY: &str = "DZD";

/// Shown when the processor gives no usable reason for a failed checkout
pub const FALLBACK_ERROR_MESSAGE: &str = "Please contact the website administrator";

/// Default label of the submit button on the payment form
pub const DEFAULT_PAY_NOW_LABEL: &str = "Pay Now";

/// Payer details as known to the billing host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub country: String,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builder: set the postal address
    pub fn with_address(
        mut self,
        address1: impl Into<String>,
        address2: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postcode: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.address1 = address1.into();
        self.address2 = address2.into();
        self.city = city.into();
        self.state = state.into();
        self.postcode = postcode.into();
        self.country = country.into();
        self
    }

    /// Single-line postal address: `"{address1} {address2}, {city}, {state} - {postcode}, {country}"`
    pub fn formatted_address(&self) -> String {
        format!(
            "{} {}, {}, {} - {}, {}",
            self.address1, self.address2, self.city, self.state, self.postcode, self.country
        )
    }
}

/// An invoice the host wants paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Host invoice id, echoed back in the webhook metadata
    pub invoice_id: String,

    /// Invoice description, used as the single line item name
    #[serde(default)]
    pub description: String,

    /// Amount in major units
    pub amount: f64,

    /// ISO 4217 code as the host reports it
    pub currency: String,

    #[serde(default)]
    pub customer: Customer,

    /// Where the payer lands after the hosted checkout
    #[serde(default)]
    pub return_url: String,

    /// Where the processor posts payment confirmations
    #[serde(default)]
    pub webhook_url: String,
}

impl CheckoutRequest {
    pub fn new(invoice_id: impl Into<String>, amount: f64, currency: impl Into<String>) -> Self {
        Self {
            invoice_id: invoice_id.into(),
            description: String::new(),
            amount,
            currency: currency.into(),
            customer: Customer::default(),
            return_url: String::new(),
            webhook_url: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = url.into();
        self
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = url.into();
        self
    }

    /// Whether the processor can take this invoice at all
    pub fn has_supported_currency(&self) -> bool {
        self.currency == SUPPORTED_CURRENCY
    }
}

/// A hosted checkout the payer can be redirected to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Host invoice id the session was opened for
    pub invoice_id: String,
    /// Provider name
    pub provider: String,
    /// Hosted payment page
    pub checkout_url: String,
}

/// What the payer sees on the invoice page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PaymentLink {
    /// Checkout opened; send the payer here
    Redirect { url: String },
    /// Invoice currency is not DZD; nothing was sent to the processor
    CurrencyNotice,
    /// Checkout could not be opened
    Error { message: String },
}

impl PaymentLink {
    pub fn error(message: impl Into<String>) -> Self {
        PaymentLink::Error {
            message: message.into(),
        }
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            PaymentLink::Redirect { url } => Some(url),
            _ => None,
        }
    }

    /// Human readable text for the non-redirect outcomes
    pub fn message(&self) -> Option<String> {
        match self {
            PaymentLink::Redirect { .. } => None,
            PaymentLink::CurrencyNotice => Some(format!(
                "CIB/EDAHABIA (Slick-Pay) is available only for {} currency!",
                SUPPORTED_CURRENCY
            )),
            PaymentLink::Error { message } => Some(message.clone()),
        }
    }

    /// Render as the HTML fragment embedded in the invoice page
    pub fn to_html(&self, pay_now_label: &str) -> String {
        match self {
            PaymentLink::Redirect { url } => format!(
                r#"<form method="post" action="{}"><input type="submit" value="{}" /></form>"#,
                escape_html(url),
                escape_html(pay_now_label)
            ),
            PaymentLink::CurrencyNotice => format!(
                r#"<div style="margin: 1rem; padding: 1rem; border: 1px solid #9ec5fe; border-radius: 0.375rem; background: #cfe2ff; color: #052c65;"><strong>Notice:</strong> <i>CIB/EDAHABIA (Slick-Pay)</i> is available only for <i>{}</i> currency!</div>"#,
                SUPPORTED_CURRENCY
            ),
            PaymentLink::Error { message } => format!(
                r#"<div style="margin: 1rem; padding: 1rem; border: 1px solid #f1aeb5; border-radius: 0.375rem; background: #f8d7da; color: #58151c;"><strong>Payment Gateway Error:</strong> {}.</div>"#,
                escape_html(message)
            ),
        }
    }
}

fn html_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match html_entity(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}
