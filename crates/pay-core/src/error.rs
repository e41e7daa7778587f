//! # Payment Error Types
//!
//! Typed error handling for the slickpay-gateway adapter.
//! The typed client operations return `Result<T, PaymentError>`; the lossy
//! host-facing operations turn these into notices or empty records.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Currency not supported by the processor
    #[error("Unsupported currency: {currency}")]
    UnsupportedCurrency { currency: String },

    /// The processor answered but did not return what was asked for
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body was not the JSON we expected
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::UnsupportedCurrency { .. } => 400,
            PaymentError::ProviderError { .. } => 502,
            PaymentError::NetworkError(_) => 503,
            PaymentError::Serialization(_) => 502,
            PaymentError::Internal(_) => 500,
        }
    }

    /// The message the processor itself returned, if this error carries one
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            PaymentError::ProviderError { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::InvalidRequest("test".into()).status_code(),
            400
        );
        assert_eq!(
            PaymentError::UnsupportedCurrency {
                currency: "EUR".into()
            }
            .status_code(),
            400
        );
        assert_eq!(PaymentError::NetworkError("timeout".into()).status_code(), 503);
    }

    #[test]
    fn test_provider_message() {
        let err = PaymentError::ProviderError {
            provider: "slickpay".into(),
            message: "Invalid account".into(),
        };
        assert_eq!(err.provider_message(), Some("Invalid account"));
        assert_eq!(err.to_string(), "Provider error [slickpay]: Invalid account");

        assert!(PaymentError::NetworkError("refused".into())
            .provider_message()
            .is_none());
    }
}
