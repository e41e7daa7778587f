//! # Transaction Status
//!
//! Maps `GET /invoices/{id}` responses onto [`TransactionInformation`].
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "id": 118,
//!   "amount": "4500.00",
//!   "date": "2024-03-01T10:15:00.000000Z",
//!   "status": "paid",
//!   "transaction": { "serial": "SP-0001", "log": "..." }
//! }
//! ```

use pay_core::{loose, parse_timestamp, TransactionInformation};
use serde_json::Value;
use tracing::warn;

/// Extra keys copied from the nested `transaction` object when non-empty
const ADDITIONAL_KEYS: [&str; 2] = ["serial", "log"];

/// `None` when the body has no usable `id`.
pub fn parse_transaction(body: &Value) -> Option<TransactionInformation> {
    let id = loose::non_empty(body, "id")?;
    let mut info = TransactionInformation::new(loose::to_text(id));

    info.amount = body.get("amount").and_then(loose::to_f64);

    if let Some(date) = body.get("date").and_then(Value::as_str) {
        info.created = parse_timestamp(date);
        if info.created.is_none() {
            warn!("Unparseable transaction date {:?}", date);
        }
    }

    info.status = body
        .get("status")
        .filter(|v| !v.is_null())
        .map(loose::to_text);

    if let Some(transaction) = body.get("transaction") {
        for key in ADDITIONAL_KEYS {
            if let Some(value) = loose::non_empty(transaction, key) {
                info.set_additional_datum(key, value.clone());
            }
        }
    }

    Some(info)
}
