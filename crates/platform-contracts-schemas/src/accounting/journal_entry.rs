//! Double-entry journal entries.

use chrono::NaiveDate;
use platform_contracts_canonical::{
    checked_sum, Contract, FieldCheck, SchemaVersion, Versioned,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Single line of a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryLine {
    /// Account the line posts to.
    pub account_id: String,
    /// Account display name.
    #[serde(default)]
    pub account_name: String,
    /// Debit amount, default zero.
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount, default zero.
    #[serde(default)]
    pub credit: Decimal,
    /// Line memo.
    #[serde(default)]
    pub description: String,
    /// Customer or vendor the line refers to.
    #[serde(default)]
    pub entity_id: String,
    /// Kind of `entity_id`.
    #[serde(default)]
    pub entity_type: String,
}

impl JournalEntryLine {
    /// A zero line against `account_id`.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            account_name: String::new(),
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            description: String::new(),
            entity_id: String::new(),
            entity_type: String::new(),
        }
    }

    /// A debit line.
    pub fn debit(account_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            debit: amount,
            ..Self::new(account_id)
        }
    }

    /// A credit line.
    pub fn credit(account_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            credit: amount,
            ..Self::new(account_id)
        }
    }
}

impl Contract for JournalEntryLine {
    const NAME: &'static str = "JournalEntryLine";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["account_id"])
            .typed::<String>(&["account_id"])
            .typed::<Decimal>(&["debit", "credit"]);
    }
}

/// Canonical journal entry.
///
/// Unbalanced entries are constructible; callers that post entries check
/// [`JournalEntry::is_balanced`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Entry identifier, empty until assigned.
    #[serde(default)]
    pub entry_id: String,
    /// Accounting date.
    pub entry_date: NaiveDate,
    /// Entry memo.
    #[serde(default)]
    pub memo: String,
    /// Lines, in posting order.
    #[serde(default)]
    pub lines: Vec<JournalEntryLine>,
    /// Producer of the entry.
    #[serde(default)]
    pub source: String,
    /// Source document reference.
    #[serde(default)]
    pub reference_id: String,
    /// Whether this is a period-end adjustment.
    #[serde(default)]
    pub is_adjusting: bool,
}

impl JournalEntry {
    /// An entry with no lines.
    pub fn new(entry_date: NaiveDate) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            entry_id: String::new(),
            entry_date,
            memo: String::new(),
            lines: Vec::new(),
            source: String::new(),
            reference_id: String::new(),
            is_adjusting: false,
        }
    }

    /// The same entry with `lines`.
    pub fn with_lines(self, lines: Vec<JournalEntryLine>) -> Self {
        Self { lines, ..self }
    }

    /// Sum of all debits, or `None` if the sum leaves the `Decimal` range.
    pub fn total_debits(&self) -> Option<Decimal> {
        checked_sum(self.lines.iter().map(|line| line.debit))
    }

    /// Sum of all credits, or `None` if the sum leaves the `Decimal` range.
    pub fn total_credits(&self) -> Option<Decimal> {
        checked_sum(self.lines.iter().map(|line| line.credit))
    }

    /// Debits minus credits; zero when balanced.
    pub fn imbalance(&self) -> Option<Decimal> {
        self.total_debits()?.checked_sub(self.total_credits()?)
    }

    /// True when total debits equal total credits. An entry with no lines is
    /// balanced; an entry whose totals overflow is not.
    pub fn is_balanced(&self) -> bool {
        match (self.total_debits(), self.total_credits()) {
            (Some(debits), Some(credits)) => debits == credits,
            _ => false,
        }
    }
}

impl Versioned for JournalEntry {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for JournalEntry {
    const NAME: &'static str = "JournalEntry";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["entry_date"])
            .typed::<NaiveDate>(&["entry_date"])
            .typed::<bool>(&["is_adjusting"])
            .constrained::<SchemaVersion>("schema_version")
            .each("lines", JournalEntryLine::check);
    }
}
