//! Chart-of-accounts entries.

use platform_contracts_canonical::{AccountType, Contract, FieldCheck};
use serde::{Deserialize, Serialize};

/// Chart of accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID in the source system.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account type token (see [`AccountType`]); free-form on the wire.
    #[serde(default)]
    pub account_type: String,
    /// Source-system sub type.
    #[serde(default)]
    pub sub_type: String,
    /// Ledger account number.
    #[serde(default)]
    pub account_number: String,
    /// Schedule C line the account maps to.
    #[serde(default)]
    pub schedule_c_line: String,
    /// Whether the account accepts postings.
    #[serde(default = "crate::defaults::yes")]
    pub is_active: bool,
    /// Parent account, for sub-accounts.
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Account {
    /// An active top-level account with no type information.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type: String::new(),
            sub_type: String::new(),
            account_number: String::new(),
            schedule_c_line: String::new(),
            is_active: true,
            parent_id: None,
        }
    }

    /// The account type, when it is one of the known tokens.
    pub fn kind(&self) -> Option<AccountType> {
        self.account_type.parse().ok()
    }
}

impl Contract for Account {
    const NAME: &'static str = "Account";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["id", "name"])
            .typed::<String>(&["id", "name", "account_type", "account_number"])
            .typed::<bool>(&["is_active"]);
    }
}
