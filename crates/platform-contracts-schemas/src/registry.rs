//! Lookup of contract kinds by name.
//!
//! Tools that receive a payload together with the name of its contract (the
//! `contracts` CLI, message consumers) resolve the name to a [`ContractKind`]
//! and validate or encode through it without naming the record type.

use platform_contracts_canonical::{
    Contract, ExternalRef, Money, TenantRef, ValidationError, VersionedSchema, WireEncoder,
    WireError,
};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::accounting::{
    Account, BankTransaction, BatchClassificationResponse, JournalEntry, JournalEntryLine,
    RiskFlag, SuspenseItem, TransactionClassificationRequest, TransactionClassificationResult,
    Vendor,
};
use crate::events::{AuditEvent, PlatformEvent};
use crate::messaging::{
    ConversationReplyWebhook, ConversationSession, ConversationStep, InteractiveMessage,
    MessageDeliveryWebhook, SendMessageRequest, StartConversationRequest, TemplateButton,
    TemplateParameter, WhatsAppTemplate,
};
use crate::tax::{QuarterlyPayment, TaxComputeRequest, TaxComputeResponse};

/// Error from a registry operation.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The name does not match any contract kind.
    #[error("unknown contract kind '{0}'")]
    UnknownKind(String),
    /// The payload failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The validated record could not be encoded.
    #[error(transparent)]
    Wire(#[from] WireError),
}

fn validate_as<C: Contract>(value: Value) -> Result<C, ValidationError> {
    C::from_value(value)
}

fn encode_as<C: Contract>(value: Value, encoder: &WireEncoder) -> Result<Vec<u8>, RegistryError> {
    let record = C::from_value(value)?;
    Ok(encoder.encode(&record)?)
}

macro_rules! contract_kinds {
    ( $( $(#[$vmeta:meta])* $variant:ident => $kind:literal : $record:ty ),+ $(,)? ) => {
        /// Every record that can be addressed by name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ContractKind {
            $( $(#[$vmeta])* $variant, )+
        }

        impl ContractKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [ContractKind] = &[$(ContractKind::$variant),+];

            /// Kebab-case name used on the command line.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ContractKind::$variant => $kind,)+
                }
            }

            /// Record name used in validation errors.
            pub fn record_name(&self) -> &'static str {
                match self {
                    $(ContractKind::$variant => <$record as Contract>::NAME,)+
                }
            }

            /// Validates `value` as this kind, discarding the decoded record.
            pub fn validate(&self, value: Value) -> Result<(), ValidationError> {
                debug!(kind = self.as_str(), "validating payload");
                match self {
                    $(ContractKind::$variant => validate_as::<$record>(value).map(drop),)+
                }
            }

            /// Validates `value` as this kind and returns its wire encoding.
            pub fn encode(&self, value: Value, encoder: &WireEncoder) -> Result<Vec<u8>, RegistryError> {
                match self {
                    $(ContractKind::$variant => encode_as::<$record>(value, encoder),)+
                }
            }
        }
    };
}

contract_kinds!(
    /// [`Money`]
    Money => "money": Money,
    /// [`TenantRef`]
    TenantRef => "tenant-ref": TenantRef,
    /// [`ExternalRef`]
    ExternalRef => "external-ref": ExternalRef,
    /// [`VersionedSchema`]
    VersionedSchema => "versioned-schema": VersionedSchema,
    /// [`Account`]
    Account => "account": Account,
    /// [`Vendor`]
    Vendor => "vendor": Vendor,
    /// [`BankTransaction`]
    BankTransaction => "bank-transaction": BankTransaction,
    /// [`JournalEntry`]
    JournalEntry => "journal-entry": JournalEntry,
    /// [`JournalEntryLine`]
    JournalEntryLine => "journal-entry-line": JournalEntryLine,
    /// [`RiskFlag`]
    RiskFlag => "risk-flag": RiskFlag,
    /// [`SuspenseItem`]
    SuspenseItem => "suspense-item": SuspenseItem,
    /// [`TransactionClassificationRequest`]
    ClassificationRequest => "classification-request": TransactionClassificationRequest,
    /// [`TransactionClassificationResult`]
    ClassificationResult => "classification-result": TransactionClassificationResult,
    /// [`BatchClassificationResponse`]
    BatchClassificationResponse => "batch-classification-response": BatchClassificationResponse,
    /// [`SendMessageRequest`]
    SendMessageRequest => "send-message-request": SendMessageRequest,
    /// [`MessageDeliveryWebhook`]
    MessageDeliveryWebhook => "message-delivery-webhook": MessageDeliveryWebhook,
    /// [`StartConversationRequest`]
    StartConversationRequest => "start-conversation-request": StartConversationRequest,
    /// [`ConversationSession`]
    ConversationSession => "conversation-session": ConversationSession,
    /// [`ConversationStep`]
    ConversationStep => "conversation-step": ConversationStep,
    /// [`ConversationReplyWebhook`]
    ConversationReplyWebhook => "conversation-reply-webhook": ConversationReplyWebhook,
    /// [`TemplateButton`]
    TemplateButton => "template-button": TemplateButton,
    /// [`TemplateParameter`]
    TemplateParameter => "template-parameter": TemplateParameter,
    /// [`WhatsAppTemplate`]
    WhatsAppTemplate => "whatsapp-template": WhatsAppTemplate,
    /// [`InteractiveMessage`]
    InteractiveMessage => "interactive-message": InteractiveMessage,
    /// [`PlatformEvent`]
    PlatformEvent => "platform-event": PlatformEvent,
    /// [`AuditEvent`]
    AuditEvent => "audit-event": AuditEvent,
    /// [`TaxComputeRequest`]
    TaxComputeRequest => "tax-compute-request": TaxComputeRequest,
    /// [`TaxComputeResponse`]
    TaxComputeResponse => "tax-compute-response": TaxComputeResponse,
    /// [`QuarterlyPayment`]
    QuarterlyPayment => "quarterly-payment": QuarterlyPayment,
);

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownKind(s.to_string()))
    }
}
