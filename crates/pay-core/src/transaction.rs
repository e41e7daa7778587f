//! # Transaction Information
//!
//! Normalized view of a processor transaction, as shown to the billing host.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Status record for a single transaction.
///
/// A lookup that found nothing yields the empty record
/// (`TransactionInformation::default()`), never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Processor status string, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_data: BTreeMap<String, Value>,
}

impl TransactionInformation {
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: Some(transaction_id.into()),
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn set_additional_datum(&mut self, key: impl Into<String>, value: Value) {
        self.additional_data.insert(key.into(), value);
    }

    /// True when no field is populated
    pub fn is_empty(&self) -> bool {
        self.transaction_id.is_none()
            && self.amount.is_none()
            && self.created.is_none()
            && self.status.is_none()
            && self.additional_data.is_empty()
    }
}

/// Parse the ISO-like timestamps the processor emits.
///
/// Accepts RFC 3339 (`2024-03-01T10:15:00Z`, `...+01:00`, fractional
/// seconds), `YYYY-MM-DD HH:MM:SS[.f]`, `YYYY-MM-DDTHH:MM:SS[.f]` and bare
/// dates. Times without an offset are taken as UTC.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_empty_record() {
        let info = TransactionInformation::default();
        assert!(info.is_empty());
        assert_eq!(serde_json::to_value(&info).unwrap(), json!({}));
    }

    #[test]
    fn test_builder() {
        let mut info = TransactionInformation::new("118")
            .with_amount(2500.0)
            .with_status("paid");
        info.set_additional_datum("serial", json!("SP-0001"));

        assert!(!info.is_empty());
        assert_eq!(info.transaction_id.as_deref(), Some("118"));
        assert_eq!(info.additional_data["serial"], json!("SP-0001"));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap();

        assert_eq!(parse_timestamp("2024-03-01T10:15:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T11:15:00+01:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T10:15:00.000000Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01 10:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T10:15:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_timestamp_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
