//! Transactions parked in suspense.

use chrono::{DateTime, Utc};
use platform_contracts_canonical::{
    Contract, FieldCheck, SchemaVersion, SuspenseReason, Versioned,
};
use serde::{Deserialize, Serialize};

/// Transaction parked pending clarification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspenseItem {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Suspense record identifier.
    pub suspense_id: String,
    /// Parked transaction.
    pub transaction_id: String,
    /// Client the transaction belongs to.
    pub client_id: String,
    /// Tenant the client belongs to.
    pub tenant_id: String,
    /// Reason token (see [`SuspenseReason`]).
    #[serde(default)]
    pub reason: String,
    /// Suspense account holding the amount.
    #[serde(default)]
    pub suspense_account_id: String,
    /// Amount as received, unparsed.
    #[serde(default)]
    pub original_amount: String,
    /// Transaction description.
    #[serde(default)]
    pub description: String,
    /// When the transaction was parked.
    #[serde(default)]
    pub parked_at: Option<DateTime<Utc>>,
    /// Whether the item has been cleared.
    #[serde(default)]
    pub resolved: bool,
    /// When the item was cleared.
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    /// Account the transaction was finally posted to.
    #[serde(default)]
    pub resolution_account_id: String,
    /// Who cleared the item.
    #[serde(default)]
    pub resolved_by: String,
    /// Clarification requests sent so far.
    #[serde(default)]
    pub clarification_attempts: i64,
}

impl SuspenseItem {
    /// An unresolved item with no reason recorded.
    pub fn new(
        suspense_id: impl Into<String>,
        transaction_id: impl Into<String>,
        client_id: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            suspense_id: suspense_id.into(),
            transaction_id: transaction_id.into(),
            client_id: client_id.into(),
            tenant_id: tenant_id.into(),
            reason: String::new(),
            suspense_account_id: String::new(),
            original_amount: String::new(),
            description: String::new(),
            parked_at: None,
            resolved: false,
            resolved_at: None,
            resolution_account_id: String::new(),
            resolved_by: String::new(),
            clarification_attempts: 0,
        }
    }

    /// The reason, when it is one of the known tokens.
    pub fn suspense_reason(&self) -> Option<SuspenseReason> {
        self.reason.parse().ok()
    }
}

impl Versioned for SuspenseItem {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for SuspenseItem {
    const NAME: &'static str = "SuspenseItem";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["suspense_id", "transaction_id", "client_id", "tenant_id"])
            .typed::<String>(&["suspense_id", "transaction_id", "client_id", "tenant_id"])
            .typed::<i64>(&["clarification_attempts"])
            .constrained::<SchemaVersion>("schema_version");
    }
}
