//! Stateful conversation sessions.

use chrono::{DateTime, Utc};
use platform_contracts_canonical::{
    Contract, ConversationStatus, FieldCheck, Metadata, SchemaVersion, Versioned,
};
use serde::{Deserialize, Serialize};

fn active() -> String {
    "active".to_string()
}

fn initial() -> String {
    "initial".to_string()
}

fn one_day_minutes() -> i64 {
    1440
}

/// Single step in a conversation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationStep {
    /// Position in the flow.
    pub step_number: i64,
    /// `inbound` or `outbound`.
    #[serde(default)]
    pub direction: String,
    /// Message text.
    #[serde(default)]
    pub body: String,
    /// Buttons offered with the message.
    #[serde(default)]
    pub buttons: Vec<Metadata>,
    /// When the step happened.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Contact's answer.
    #[serde(default)]
    pub response: String,
}

impl ConversationStep {
    /// An empty step.
    pub fn new(step_number: i64) -> Self {
        Self {
            step_number,
            direction: String::new(),
            body: String::new(),
            buttons: Vec::new(),
            timestamp: None,
            response: String::new(),
        }
    }
}

impl Contract for ConversationStep {
    const NAME: &'static str = "ConversationStep";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["step_number"])
            .typed::<i64>(&["step_number"])
            .typed::<String>(&["direction", "body"]);
    }
}

/// Request to start a stateful conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartConversationRequest {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Tenant starting the conversation.
    pub tenant_id: String,
    /// Client the conversation is about.
    pub client_id: String,
    /// Contact phone in E.164 format.
    pub contact_phone: String,
    /// Contact name.
    #[serde(default)]
    pub contact_name: String,
    /// Channel, default `whatsapp`.
    #[serde(default = "crate::defaults::whatsapp")]
    pub channel: String,
    /// Flow to run.
    #[serde(default)]
    pub flow_type: String,
    /// Kind of record the conversation concerns.
    #[serde(default)]
    pub context_type: String,
    /// Identifier of that record.
    #[serde(default)]
    pub context_id: String,
    /// Extra context.
    #[serde(default)]
    pub context_data: Metadata,
    /// Minutes to wait for a reply, default one day.
    #[serde(default = "one_day_minutes")]
    pub timeout_minutes: i64,
}

impl StartConversationRequest {
    /// A WhatsApp conversation with a one-day timeout.
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        contact_phone: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            contact_phone: contact_phone.into(),
            contact_name: String::new(),
            channel: crate::defaults::whatsapp(),
            flow_type: String::new(),
            context_type: String::new(),
            context_id: String::new(),
            context_data: Metadata::new(),
            timeout_minutes: one_day_minutes(),
        }
    }
}

impl Versioned for StartConversationRequest {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for StartConversationRequest {
    const NAME: &'static str = "StartConversationRequest";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["tenant_id", "client_id", "contact_phone"])
            .typed::<String>(&["tenant_id", "client_id", "contact_phone", "flow_type"])
            .typed::<i64>(&["timeout_minutes"])
            .constrained::<SchemaVersion>("schema_version");
    }
}

/// Conversation session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSession {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Session identifier.
    pub conversation_id: String,
    /// Contact phone.
    pub contact_phone: String,
    /// Channel, default `whatsapp`.
    #[serde(default = "crate::defaults::whatsapp")]
    pub channel: String,
    /// Status token (see [`ConversationStatus`]), default `active`.
    #[serde(default = "active")]
    pub status: String,
    /// Flow state name, default `initial`.
    #[serde(default = "initial")]
    pub current_state: String,
    /// Flow being run.
    #[serde(default)]
    pub flow_type: String,
    /// Kind of record the conversation concerns.
    #[serde(default)]
    pub context_type: String,
    /// Identifier of that record.
    #[serde(default)]
    pub context_id: String,
    /// Steps so far.
    #[serde(default)]
    pub steps: Vec<ConversationStep>,
    /// Last inbound or outbound activity.
    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl ConversationSession {
    /// An active session in its initial state.
    pub fn new(conversation_id: impl Into<String>, contact_phone: impl Into<String>) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            conversation_id: conversation_id.into(),
            contact_phone: contact_phone.into(),
            channel: crate::defaults::whatsapp(),
            status: active(),
            current_state: initial(),
            flow_type: String::new(),
            context_type: String::new(),
            context_id: String::new(),
            steps: Vec::new(),
            last_activity_at: None,
        }
    }

    /// The status, when it is one of the known tokens.
    pub fn conversation_status(&self) -> Option<ConversationStatus> {
        self.status.parse().ok()
    }
}

impl Versioned for ConversationSession {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for ConversationSession {
    const NAME: &'static str = "ConversationSession";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["conversation_id", "contact_phone"])
            .typed::<String>(&["conversation_id", "contact_phone", "status"])
            .constrained::<SchemaVersion>("schema_version")
            .each("steps", ConversationStep::check);
    }
}

/// Webhook payload sent when a contact replies in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationReplyWebhook {
    /// Session the reply belongs to.
    pub conversation_id: String,
    /// Tenant.
    #[serde(default)]
    pub tenant_id: String,
    /// Client.
    #[serde(default)]
    pub client_id: String,
    /// Contact phone.
    #[serde(default)]
    pub contact_phone: String,
    /// Free-text reply.
    #[serde(default)]
    pub response_text: String,
    /// Button pressed, if any.
    #[serde(default)]
    pub button_id: String,
    /// Kind of record the conversation concerns.
    #[serde(default)]
    pub context_type: String,
    /// Identifier of that record.
    #[serde(default)]
    pub context_id: String,
    /// When the reply arrived.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConversationReplyWebhook {
    /// An empty reply for `conversation_id`.
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            tenant_id: String::new(),
            client_id: String::new(),
            contact_phone: String::new(),
            response_text: String::new(),
            button_id: String::new(),
            context_type: String::new(),
            context_id: String::new(),
            timestamp: None,
        }
    }
}

impl Contract for ConversationReplyWebhook {
    const NAME: &'static str = "ConversationReplyWebhook";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["conversation_id"])
            .typed::<String>(&["conversation_id", "response_text", "button_id"])
            .typed::<DateTime<Utc>>(&["timestamp"]);
    }
}
