//! Bank transactions as fed to classification.

use chrono::NaiveDate;
use platform_contracts_canonical::{
    Contract, FieldCheck, Metadata, SchemaVersion, Versioned,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Canonical bank transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransaction {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Transaction identifier.
    pub transaction_id: String,
    /// Bank description line.
    pub description: String,
    /// Signed amount.
    pub amount: Decimal,
    /// Posting date.
    pub transaction_date: NaiveDate,
    /// `debit` or `credit`; free-form on the wire.
    #[serde(default)]
    pub transaction_type: String,
    /// Kind of account the transaction came from.
    #[serde(default)]
    pub bank_account_type: String,
    /// Payee name, when known.
    #[serde(default)]
    pub vendor_name: String,
    /// Free-text memo.
    #[serde(default)]
    pub memo: String,
    /// Check number, for check payments.
    #[serde(default)]
    pub check_number: String,
    /// Plaid category hierarchy.
    #[serde(default)]
    pub plaid_category: Vec<String>,
    /// Merchant name reported by Plaid.
    #[serde(default)]
    pub plaid_merchant_name: String,
    /// Plaid transaction identifier.
    #[serde(default)]
    pub plaid_transaction_id: String,
    /// Extra attributes.
    #[serde(default)]
    pub metadata: Metadata,
}

impl BankTransaction {
    /// A transaction with only its required fields set.
    pub fn new(
        transaction_id: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        transaction_date: NaiveDate,
    ) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            transaction_id: transaction_id.into(),
            description: description.into(),
            amount,
            transaction_date,
            transaction_type: String::new(),
            bank_account_type: String::new(),
            vendor_name: String::new(),
            memo: String::new(),
            check_number: String::new(),
            plaid_category: Vec::new(),
            plaid_merchant_name: String::new(),
            plaid_transaction_id: String::new(),
            metadata: Metadata::new(),
        }
    }
}

impl Versioned for BankTransaction {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for BankTransaction {
    const NAME: &'static str = "BankTransaction";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["transaction_id", "description", "amount", "transaction_date"])
            .typed::<String>(&["transaction_id", "description"])
            .typed::<Decimal>(&["amount"])
            .typed::<NaiveDate>(&["transaction_date"])
            .constrained::<SchemaVersion>("schema_version");
    }
}
