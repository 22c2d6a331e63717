//! Compliance audit trail entries.

use chrono::{DateTime, Utc};
use platform_contracts_canonical::{utc_now, Contract, FieldCheck, Metadata};
use serde::{Deserialize, Serialize};

/// Immutable audit trail entry. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Entry identifier.
    #[serde(default)]
    pub audit_id: String,
    /// What happened.
    #[serde(default)]
    pub event_type: String,
    /// Who did it.
    #[serde(default)]
    pub actor_id: String,
    /// `user`, `service` and so on.
    #[serde(default)]
    pub actor_type: String,
    /// Tenant.
    #[serde(default)]
    pub tenant_id: String,
    /// Kind of resource touched.
    #[serde(default)]
    pub resource_type: String,
    /// Identifier of that resource.
    #[serde(default)]
    pub resource_id: String,
    /// Action performed.
    #[serde(default)]
    pub action: String,
    /// Resource state before the action.
    #[serde(default)]
    pub before_state: Metadata,
    /// Resource state after the action.
    #[serde(default)]
    pub after_state: Metadata,
    /// Free-form extra data.
    #[serde(default)]
    pub metadata: Metadata,
    /// When it happened, default now.
    #[serde(default = "utc_now")]
    pub timestamp: DateTime<Utc>,
    /// Client address.
    #[serde(default)]
    pub ip_address: String,
}

impl Default for AuditEvent {
    fn default() -> Self {
        Self {
            audit_id: String::new(),
            event_type: String::new(),
            actor_id: String::new(),
            actor_type: String::new(),
            tenant_id: String::new(),
            resource_type: String::new(),
            resource_id: String::new(),
            action: String::new(),
            before_state: Metadata::new(),
            after_state: Metadata::new(),
            metadata: Metadata::new(),
            timestamp: utc_now(),
            ip_address: String::new(),
        }
    }
}

impl Contract for AuditEvent {
    const NAME: &'static str = "AuditEvent";

    fn check(_fields: &mut FieldCheck<'_>) {}
}
