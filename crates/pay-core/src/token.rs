//! Random tokens for webhook registration.

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Default length of a webhook signature token
pub const DEFAULT_TOKEN_LENGTH: usize = 10;

/// Generate `length` characters drawn uniformly from `[0-9a-zA-Z]`
/// using the operating system CSPRNG.
pub fn random_token(length: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Token sent as `webhook_signature` with each invoice.
///
/// Nothing on our side checks it when the processor calls back.
pub fn webhook_signature() -> String {
    random_token(DEFAULT_TOKEN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_alphabet() {
        for _ in 0..100 {
            let token = random_token(10);
            assert_eq!(token.len(), 10);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_tokens_differ() {
        assert_ne!(webhook_signature(), webhook_signature());
    }

    #[test]
    fn test_custom_length() {
        assert_eq!(random_token(0), "");
        assert_eq!(random_token(32).len(), 32);
    }
}
