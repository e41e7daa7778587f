//! # Bank Accounts
//!
//! Maps `GET /users/accounts` onto [`BankAccount`]s and feeds the bank
//! account dropdown of the gateway configuration.

use crate::config::{SlickpayConfig, MODE};
use crate::gateway::SlickpayGateway;
use pay_core::config::{PUBLIC_KEY, TEST_MODE};
use pay_core::{loose, AccountOptions, BankAccount, ConfigLookup, PaymentStrategy};
use serde_json::Value;
use tracing::{info, warn};

/// Entries of `data[]` that carry a uuid. Anything else yields an empty list.
pub fn parse_accounts(body: &Value) -> Vec<BankAccount> {
    body.get("data")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let uuid = loose::non_empty(entry, "uuid")?;
                    Some(BankAccount {
                        uuid: loose::to_text(uuid),
                        title: entry.get("title").map(loose::to_text).unwrap_or_default(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Account options for the configuration form.
///
/// Nothing is requested until a public key is saved and the test-mode
/// setting exists.
pub async fn account_options(lookup: &dyn ConfigLookup) -> AccountOptions {
    let has_mode = lookup.get(TEST_MODE).is_some() || lookup.get(MODE).is_some();
    if lookup.get_non_empty(PUBLIC_KEY).is_none() || !has_mode {
        return AccountOptions::NotRequested;
    }

    let gateway = match SlickpayConfig::from_lookup(lookup).and_then(SlickpayGateway::new) {
        Ok(gateway) => gateway,
        Err(err) => return AccountOptions::Failed(err.to_string()),
    };

    match gateway.list_accounts().await {
        Ok(accounts) => {
            info!("Loaded {} Slick-Pay bank accounts", accounts.len());
            AccountOptions::Loaded(accounts)
        }
        Err(err) => {
            warn!("Failed to load Slick-Pay bank accounts: {}", err);
            AccountOptions::Failed(err.to_string())
        }
    }
}
