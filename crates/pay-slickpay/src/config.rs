//! # Slick-Pay Configuration
//!
//! Settings are read through a [`ConfigLookup`], so the same code serves
//! host-provided settings, a TOML file or the environment.
//!
//! | lookup key | env var | meaning |
//! |---|---|---|
//! | `publicKey` | `SLICKPAY_PUBLIC_KEY` | bearer token (required) |
//! | `bankAccount` | `SLICKPAY_BANK_ACCOUNT` | settlement account uuid |
//! | `mode` | `SLICKPAY_MODE` | `test` / `production` |
//! | `testMode` | `SLICKPAY_TEST_MODE` | legacy flag, used when `mode` is unset |
//! | `apiBaseUrl` | `SLICKPAY_API_BASE_URL` | overrides the mode's API root |
//! | `verifyHostname` | `SLICKPAY_VERIFY_HOSTNAME` | check TLS hostnames (default off) |

use pay_core::config::{BANK_ACCOUNT, PUBLIC_KEY, TEST_MODE};
use pay_core::{ApiMode, ConfigLookup, EnvLookup, PaymentError};
use std::time::Duration;

/// Key of the typed API mode
pub const MODE: &str = "mode";
/// Key of the API root override
pub const API_BASE_URL: &str = "apiBaseUrl";
/// Key of the TLS hostname verification switch
pub const VERIFY_HOSTNAME: &str = "verifyHostname";

/// Slick-Pay API configuration
#[derive(Clone)]
pub struct SlickpayConfig {
    /// Account public key, sent as the bearer token
    pub public_key: String,

    /// Bank account uuid payments settle into
    pub bank_account: String,

    pub mode: ApiMode,

    /// API root override (for testing/mocking)
    pub api_base_url: Option<String>,

    /// Verify the server hostname during the TLS handshake
    pub verify_hostname: bool,

    pub connect_timeout: Duration,

    /// Whole-request timeout
    pub timeout: Duration,
}

impl SlickpayConfig {
    /// Create config with explicit values
    pub fn new(public_key: impl Into<String>, bank_account: impl Into<String>, mode: ApiMode) -> Self {
        Self {
            public_key: public_key.into(),
            bank_account: bank_account.into(),
            mode,
            api_base_url: None,
            verify_hostname: false,
            connect_timeout: Duration::from_secs(3),
            timeout: Duration::from_secs(20),
        }
    }

    /// Load configuration from `SLICKPAY_*` environment variables.
    pub fn from_env() -> Result<Self, PaymentError> {
        Self::from_lookup(&EnvLookup::default())
    }

    /// Load configuration from an injected settings source.
    pub fn from_lookup(lookup: &dyn ConfigLookup) -> Result<Self, PaymentError> {
        let public_key = lookup.get_non_empty(PUBLIC_KEY).ok_or_else(|| {
            PaymentError::Configuration(format!("{} not set", PUBLIC_KEY))
        })?;

        let mode = match lookup.get_non_empty(MODE) {
            Some(raw) => raw
                .parse::<ApiMode>()
                .map_err(PaymentError::Configuration)?,
            None => ApiMode::from_legacy_str(lookup.get(TEST_MODE).as_deref()),
        };

        let verify_hostname = lookup
            .get_non_empty(VERIFY_HOSTNAME)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        let mut config = Self::new(
            public_key,
            lookup.get(BANK_ACCOUNT).unwrap_or_default(),
            mode,
        );
        config.api_base_url = lookup.get_non_empty(API_BASE_URL);
        config.verify_hostname = verify_hostname;

        Ok(config)
    }

    /// API root: the override if set, else the mode's URL
    pub fn base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or_else(|| self.mode.base_url())
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.public_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Builder: turn TLS hostname verification on or off
    pub fn with_verify_hostname(mut self, verify: bool) -> Self {
        self.verify_hostname = verify;
        self
    }
}

impl std::fmt::Debug for SlickpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlickpayConfig")
            .field("public_key", &"<redacted>")
            .field("bank_account", &self.bank_account)
            .field("mode", &self.mode)
            .field("api_base_url", &self.api_base_url)
            .field("verify_hostname", &self.verify_hostname)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}
