//! Canonical primitives shared by every platform data contract.
//!
//! Records exchanged between services are built from the types in this
//! crate: version tags, exact-decimal money, bounded values that cannot be
//! constructed out of range, closed vocabularies, and the aggregated
//! validation that rejects a payload with every failure reported at once.
//!
#![deny(missing_docs)]

/// Newtypes for range- and length-limited values.
pub mod bounded;
/// Two-phase decoding of records from JSON.
pub mod contract;
/// Tenant and external-system references.
pub mod identifiers;
/// Monetary amounts.
pub mod money;
/// Creation/update timestamps.
pub mod timestamps;
/// Aggregated validation errors and the raw-JSON field checker.
pub mod validation;
/// Schema version tags and compatibility.
pub mod versioning;
/// Closed vocabularies shared across platform records.
///
/// Each vocabulary serializes as its lowercase token and rejects tokens
/// outside the set. Record fields on the wire are free-form strings; these
/// enums are what producers and consumers parse them into.
pub mod vocabulary;
/// Wire encoding of records.
pub mod wire;

pub use bounded::{ButtonTitle, Confidence, CurrencyCode, MonthOfYear};
pub use contract::Contract;
pub use identifiers::{ExternalRef, Metadata, TenantRef};
pub use money::{checked_sum, Money};
pub use timestamps::{utc_now, Timestamps};
pub use validation::{Constrained, FieldCheck, ValidationError, Violation};
pub use versioning::{SchemaVersion, Versioned, VersionedSchema};
pub use vocabulary::{
    AccountType, BankAccountType, ClassificationSource, ConfidenceBand, ConsentType,
    ConversationStatus, EntityType, MessageDirection, MessageStatus, ReviewStatus,
    RiskSeverity, SourceSystem, SuspenseReason, TaxFilingType, TransactionType,
};
pub use wire::{WireEncoder, WireError, WireOptions};

pub use rust_decimal::Decimal;
