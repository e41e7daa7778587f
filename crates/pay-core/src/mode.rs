//! # API Mode
//!
//! Selects the processor environment (sandbox vs. live).
//!
//! The billing host stores the "test mode" checkbox as an untyped value,
//! so the boundary conversion [`ApiMode::from_legacy`] is the only place
//! that deals with the loose representation. Everything past it works with
//! the two-variant enum.

use crate::loose;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Sandbox API root
pub const TEST_BASE_URL: &str = "https://devapi.slick-pay.com/api/v2";

/// Live API root
pub const PRODUCTION_BASE_URL: &str = "https://prodapi.slick-pay.com/api/v2";

/// Processor environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    Test,
    Production,
}

impl ApiMode {
    /// Convert the host's loosely typed test-mode flag.
    ///
    /// `null` (flag never saved) selects [`ApiMode::Test`]. Any other value
    /// that is falsy, loosely equal to `0`, or equal to `"no"` selects
    /// [`ApiMode::Production`]; everything else selects [`ApiMode::Test`].
    ///
    /// | value | mode |
    /// |---|---|
    /// | `false`, `0`, `""`, `"0"`, `"0.0"`, `" 0"`, `"no"` | Production |
    /// | `null`, `true`, `1`, `"on"`, `"yes"` | Test |
    pub fn from_legacy(flag: &Value) -> Self {
        if flag.is_null() {
            return ApiMode::Test;
        }

        let production =
            loose::is_empty(flag) || loose::equals_zero(flag) || flag.as_str() == Some("no");

        if production {
            ApiMode::Production
        } else {
            ApiMode::Test
        }
    }

    /// Same as [`ApiMode::from_legacy`] for a flag read as text
    /// (`None` when the key is absent).
    pub fn from_legacy_str(flag: Option<&str>) -> Self {
        match flag {
            Some(s) => Self::from_legacy(&Value::String(s.to_string())),
            None => ApiMode::Test,
        }
    }

    /// API root for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiMode::Test => TEST_BASE_URL,
            ApiMode::Production => PRODUCTION_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMode::Test => "test",
            ApiMode::Production => "production",
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, ApiMode::Test)
    }
}

impl Default for ApiMode {
    fn default() -> Self {
        ApiMode::Test
    }
}

impl std::fmt::Display for ApiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" | "sandbox" | "dev" => Ok(ApiMode::Test),
            "production" | "prod" | "live" => Ok(ApiMode::Production),
            other => Err(format!("unknown API mode: {}", other)),
        }
    }
}
