//! Messaging records: outbound messages, delivery webhooks, conversations
//! and WhatsApp templates.

pub mod conversation;
pub mod message;
pub mod templates;

pub use conversation::{
    ConversationReplyWebhook, ConversationSession, ConversationStep, StartConversationRequest,
};
pub use message::{MessageDeliveryWebhook, SendMessageRequest};
pub use templates::{InteractiveMessage, TemplateButton, TemplateParameter, WhatsAppTemplate};
