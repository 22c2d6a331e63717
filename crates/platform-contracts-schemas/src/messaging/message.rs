//! Outbound message requests and delivery webhooks.

use chrono::{DateTime, Utc};
use platform_contracts_canonical::{
    Contract, FieldCheck, MessageStatus, Metadata, SchemaVersion, Versioned,
};
use serde::{Deserialize, Serialize};

/// Request to send a message through the messaging service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Tenant sending the message.
    pub tenant_id: String,
    /// Client the message is about.
    pub client_id: String,
    /// Recipient phone number in E.164 format.
    pub contact_phone: String,
    /// Recipient name.
    #[serde(default)]
    pub contact_name: String,
    /// Delivery channel, default `whatsapp`.
    #[serde(default = "crate::defaults::whatsapp")]
    pub channel: String,
    /// Template to render, if any.
    #[serde(default)]
    pub template_name: String,
    /// Template parameters.
    #[serde(default)]
    pub template_params: Metadata,
    /// Plain body, when no template is used.
    #[serde(default)]
    pub body: String,
    /// Kind of record the message concerns.
    #[serde(default)]
    pub context_type: String,
    /// Identifier of that record.
    #[serde(default)]
    pub context_id: String,
    /// Extra context.
    #[serde(default)]
    pub context_data: Metadata,
}

impl SendMessageRequest {
    /// A WhatsApp message with no body or template.
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
            template_name: String::new(),
            template_params: Metadata::new(),
            body: String::new(),
            context_type: String::new(),
            context_id: String::new(),
            context_data: Metadata::new(),
        }
    }
}

impl Versioned for SendMessageRequest {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for SendMessageRequest {
    const NAME: &'static str = "SendMessageRequest";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["tenant_id", "client_id", "contact_phone"])
            .typed::<String>(&["tenant_id", "client_id", "contact_phone", "body"])
            .constrained::<SchemaVersion>("schema_version");
    }
}

/// Delivery status update for a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDeliveryWebhook {
    /// Platform message identifier.
    pub message_id: String,
    /// Conversation the message belongs to.
    #[serde(default)]
    pub conversation_id: String,
    /// Identifier assigned by the channel provider.
    #[serde(default)]
    pub channel_message_id: String,
    /// Status token (see [`MessageStatus`]).
    #[serde(default)]
    pub status: String,
    /// Provider error, for failed deliveries.
    #[serde(default)]
    pub error_message: String,
    /// When the status changed.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl MessageDeliveryWebhook {
    /// A webhook with no status.
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            conversation_id: String::new(),
            channel_message_id: String::new(),
            status: String::new(),
            error_message: String::new(),
            timestamp: None,
        }
    }

    /// The status, when it is one of the known tokens.
    pub fn message_status(&self) -> Option<MessageStatus> {
        self.status.parse().ok()
    }
}

impl Contract for MessageDeliveryWebhook {
    const NAME: &'static str = "MessageDeliveryWebhook";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["message_id"])
            .typed::<String>(&["message_id", "status"])
            .typed::<DateTime<Utc>>(&["timestamp"]);
    }
}
