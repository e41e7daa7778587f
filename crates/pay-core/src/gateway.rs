//! # Gateway Descriptors
//!
//! Capability metadata and the configuration fields an administrator fills
//! in when activating the gateway on the billing host.

use serde::{Deserialize, Serialize};

/// Name shown to payers and administrators
pub const DISPLAY_NAME: &str = "CIB/EDAHABIA (Slick-Pay)";

/// Dropdown hint when the account list loaded (or was never requested)
pub const BANK_ACCOUNT_HINT: &str =
    "Select your bank account. (Page must be reloaded to display options)";

/// Gateway capabilities, keyed the way the billing host expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewayMetaData {
    pub display_name: String,
    #[serde(rename = "APIVersion")]
    pub api_version: String,
    pub disable_local_credit_card_input: bool,
    pub tokenised_storage: bool,
}

impl Default for GatewayMetaData {
    fn default() -> Self {
        Self {
            display_name: DISPLAY_NAME.to_string(),
            api_version: "1.1".to_string(),
            disable_local_credit_card_input: true,
            tokenised_storage: false,
        }
    }
}

/// A bank account registered with the processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub uuid: String,
    pub title: String,
}

/// One option of a dropdown field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Widget used to edit a configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Fixed value, not editable
    System { value: String },
    Text {
        size: u32,
        #[serde(default)]
        default: String,
    },
    Dropdown { options: Vec<FieldOption> },
    /// Checkbox
    YesNo,
}

/// A configuration field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    /// Key the value is stored under
    pub name: String,
    pub friendly_name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigField {
    fn new(name: &str, friendly_name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            friendly_name: friendly_name.to_string(),
            kind,
            description: None,
        }
    }

    fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outcome of loading the bank account list for the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOptions {
    /// Credentials not configured yet, nothing was requested
    NotRequested,
    Loaded(Vec<BankAccount>),
    /// The processor call failed with this message
    Failed(String),
}

/// Build the configuration field list.
///
/// Field keys (`publicKey`, `bankAccount`, `testMode`) are the ones
/// [`crate::config::ConfigLookup`] implementations are read with.
pub fn config_fields(accounts: &AccountOptions) -> Vec<ConfigField> {
    let (options, hint) = match accounts {
        AccountOptions::NotRequested => (Vec::new(), BANK_ACCOUNT_HINT.to_string()),
        AccountOptions::Loaded(list) => (
            list.iter()
                .map(|a| FieldOption {
                    value: a.uuid.clone(),
                    label: a.title.clone(),
                })
                .collect(),
            BANK_ACCOUNT_HINT.to_string(),
        ),
        AccountOptions::Failed(message) => (
            Vec::new(),
            format!("Select your bank account. (API Error : {})", message),
        ),
    };

    vec![
        ConfigField::new(
            "FriendlyName",
            "FriendlyName",
            FieldKind::System {
                value: DISPLAY_NAME.to_string(),
            },
        ),
        ConfigField::new(
            "publicKey",
            "Public Key",
            FieldKind::Text {
                size: 128,
                default: String::new(),
            },
        )
        .describe("Your Slick-pay.com account public key."),
        ConfigField::new("bankAccount", "Bank account", FieldKind::Dropdown { options })
            .describe(hint),
        ConfigField::new("testMode", "Test Mode", FieldKind::YesNo)
            .describe("Tick to enable test mode."),
    ]
}
