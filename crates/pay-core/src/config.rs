//! # Configuration Lookup
//!
//! Gateway settings are read through an injected [`ConfigLookup`] rather
//! than discovered from ambient globals, so callers decide where they
//! come from (host settings, a TOML file, the environment, a test map).

use std::collections::HashMap;

/// Key of the processor public key
pub const PUBLIC_KEY: &str = "publicKey";
/// Key of the settlement bank account uuid
pub const BANK_ACCOUNT: &str = "bankAccount";
/// Key of the loosely typed test-mode flag
pub const TEST_MODE: &str = "testMode";

/// Read-only access to gateway settings
pub trait ConfigLookup: Send + Sync {
    /// Value stored under `key`, `None` when the key is absent
    fn get(&self, key: &str) -> Option<String>;

    /// Value stored under `key` when present and non-empty
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }
}

impl ConfigLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: ConfigLookup + ?Sized> ConfigLookup for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Settings from environment variables (and a `.env` file if present).
///
/// Lookup keys are mapped to `{prefix}_{KEY}` in screaming snake case,
/// e.g. `publicKey` → `SLICKPAY_PUBLIC_KEY`.
#[derive(Debug, Clone)]
pub struct EnvLookup {
    prefix: String,
}

impl EnvLookup {
    pub fn new(prefix: impl Into<String>) -> Self {
        dotenvy::dotenv().ok();
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable name for a lookup key
    pub fn var_name(&self, key: &str) -> String {
        let mut name = String::with_capacity(self.prefix.len() + key.len() + 4);
        name.push_str(&self.prefix);
        name.push('_');
        for (i, c) in key.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                name.push('_');
            }
            name.push(c.to_ascii_uppercase());
        }
        name
    }
}

impl Default for EnvLookup {
    fn default() -> Self {
        Self::new("SLICKPAY")
    }
}

impl ConfigLookup for EnvLookup {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(self.var_name(key)).ok()
    }
}
