use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::contract::Contract;
use crate::validation::FieldCheck;

/// Free-form JSON object carried alongside a record.
pub type Metadata = Map<String, Value>;

/// Reference to a tenant (team) across services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRef {
    /// Hub team UUID or slug.
    pub tenant_id: String,
    /// System the reference originated from.
    #[serde(default)]
    pub source_system: String,
}

impl TenantRef {
    /// A reference with no source system.
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            source_system: String::new(),
        }
    }
}

impl Contract for TenantRef {
    const NAME: &'static str = "TenantRef";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["tenant_id"])
            .typed::<String>(&["tenant_id", "source_system"]);
    }
}

/// Reference to an entity held by an external system (`qbo`, `plaid`, `stripe`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRef {
    /// External system name.
    pub system: String,
    /// Identifier inside the external system.
    pub external_id: String,
    /// Entity kind in the external system.
    #[serde(default)]
    pub external_type: String,
    /// Extra attributes.
    #[serde(default)]
    pub metadata: Metadata,
}

impl ExternalRef {
    /// A reference with no type or metadata.
    pub fn new(system: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            external_id: external_id.into(),
            external_type: String::new(),
            metadata: Metadata::new(),
        }
    }
}

impl Contract for ExternalRef {
    const NAME: &'static str = "ExternalRef";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["system", "external_id"])
            .typed::<String>(&["system", "external_id", "external_type"]);
    }
}
