//! Accounting records: chart of accounts, vendors, transactions, journal
//! entries, classification and suspense.

pub mod account;
pub mod classification;
pub mod journal_entry;
pub mod risk;
pub mod suspense;
pub mod transaction;
pub mod vendor;

pub use account::Account;
pub use classification::{
    AlternativeSuggestion, AvailableAccount, BatchClassificationResponse,
    ClassificationResponseMeta, ClientContext, ExistingRule, HistoricalPattern, SuggestedRule,
    TransactionClassificationRequest, TransactionClassificationResult,
    TransactionForClassification,
};
pub use journal_entry::{JournalEntry, JournalEntryLine};
pub use risk::{describe_risk_code, RiskFlag, KNOWN_RISK_CODES};
pub use suspense::SuspenseItem;
pub use transaction::BankTransaction;
pub use vendor::Vendor;
