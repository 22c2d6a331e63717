//! Cross-service event envelope.

use chrono::{DateTime, Utc};
use platform_contracts_canonical::{
    utc_now, Contract, FieldCheck, Metadata, SchemaVersion, Versioned,
};
use serde::{Deserialize, Serialize};

/// Event types emitted by platform services.
pub const KNOWN_EVENT_TYPES: &[&str] = &[
    "transaction.classified",
    "transaction.posted",
    "clarification.requested",
    "clarification.completed",
    "clarification.timed_out",
    "suspense.created",
    "suspense.cleared",
    "digest.generated",
    "digest.approved",
    "message.sent",
    "message.delivered",
    "message.read",
    "message.failed",
    "conversation.started",
    "conversation.completed",
    "conversation.timed_out",
];

/// Whether `event_type` is in [`KNOWN_EVENT_TYPES`].
pub fn is_known_event_type(event_type: &str) -> bool {
    KNOWN_EVENT_TYPES.contains(&event_type)
}

/// Standard envelope for events passed between services.
///
/// `event_type` is a dotted name such as `transaction.classified`. Types
/// outside [`KNOWN_EVENT_TYPES`] are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEvent {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Event identifier.
    #[serde(default)]
    pub event_id: String,
    /// Dotted event type.
    pub event_type: String,
    /// Emitting service.
    #[serde(default)]
    pub source_system: String,
    /// Tenant the event concerns.
    #[serde(default)]
    pub tenant_id: String,
    /// Emission time, default now.
    #[serde(default = "utc_now")]
    pub timestamp: DateTime<Utc>,
    /// Event body.
    #[serde(default)]
    pub payload: Metadata,
    /// Identifier shared by related events.
    #[serde(default)]
    pub correlation_id: String,
}

impl PlatformEvent {
    /// An event of `event_type` stamped now, with an empty payload.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            event_id: String::new(),
            event_type: event_type.into(),
            source_system: String::new(),
            tenant_id: String::new(),
            timestamp: utc_now(),
            payload: Metadata::new(),
            correlation_id: String::new(),
        }
    }

    /// Whether the type is in the catalog.
    pub fn is_known_type(&self) -> bool {
        is_known_event_type(&self.event_type)
    }
}

impl Versioned for PlatformEvent {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for PlatformEvent {
    const NAME: &'static str = "PlatformEvent";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["event_type"])
            .typed::<String>(&["event_type", "tenant_id"])
            .typed::<DateTime<Utc>>(&["timestamp"])
            .constrained::<SchemaVersion>("schema_version");
    }
}
