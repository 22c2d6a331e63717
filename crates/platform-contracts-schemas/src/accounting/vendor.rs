//! Vendors and payees.

use platform_contracts_canonical::{Contract, FieldCheck};
use serde::{Deserialize, Serialize};

/// Vendor / payee reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor ID in the source system.
    pub id: String,
    /// Legal name.
    pub name: String,
    /// Name shown to users.
    #[serde(default)]
    pub display_name: String,
    /// Whether payments to the vendor are 1099-reportable.
    #[serde(default)]
    pub is_1099_eligible: bool,
    /// Whether the vendor is in use.
    #[serde(default = "crate::defaults::yes")]
    pub is_active: bool,
}

impl Vendor {
    /// An active vendor that is not 1099-eligible.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: String::new(),
            is_1099_eligible: false,
            is_active: true,
        }
    }
}

impl Contract for Vendor {
    const NAME: &'static str = "Vendor";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["id", "name"])
            .typed::<String>(&["id", "name", "display_name"])
            .typed::<bool>(&["is_active"]);
    }
}
