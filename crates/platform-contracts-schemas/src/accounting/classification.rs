//! Transaction classification requests and results.

use chrono::NaiveDate;
use platform_contracts_canonical::{
    ClassificationSource, Confidence, ConfidenceBand, Contract, FieldCheck, SchemaVersion,
    Versioned,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business context supplied with a classification request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientContext {
    /// Kind of business.
    pub business_type: String,
    /// Industry.
    pub industry: String,
    /// Federal return the client files.
    pub tax_filing_type: String,
    /// State of operation.
    pub state: String,
}

impl Contract for ClientContext {
    const NAME: &'static str = "ClientContext";

    fn check(_fields: &mut FieldCheck<'_>) {}
}

/// Account the classifier may choose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableAccount {
    /// Account ID.
    pub id: String,
    /// Account name.
    pub name: String,
    /// Account type token.
    #[serde(default, rename = "type")]
    pub account_type: String,
    /// Sub type.
    #[serde(default)]
    pub sub_type: String,
    /// Schedule C line.
    #[serde(default)]
    pub schedule_c_line: String,
}

impl AvailableAccount {
    /// An account option with no type information.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type: String::new(),
            sub_type: String::new(),
            schedule_c_line: String::new(),
        }
    }
}

impl Contract for AvailableAccount {
    const NAME: &'static str = "AvailableAccount";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["id", "name"])
            .typed::<String>(&["id", "name"]);
    }
}

/// Categorization rule already configured for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingRule {
    /// Description pattern the rule matches.
    pub pattern: String,
    /// Category the rule assigns.
    pub category_id: String,
    /// Category name.
    #[serde(default)]
    pub category_name: String,
}

impl ExistingRule {
    /// A rule with no category name.
    pub fn new(pattern: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            category_id: category_id.into(),
            category_name: String::new(),
        }
    }
}

impl Contract for ExistingRule {
    const NAME: &'static str = "ExistingRule";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["pattern", "category_id"])
            .typed::<String>(&["pattern", "category_id"]);
    }
}

/// How a description was classified in the past.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalPattern {
    /// Transaction description.
    pub description: String,
    /// Account it was posted to.
    pub account_id: String,
    /// Account name.
    #[serde(default)]
    pub account_name: String,
    /// Number of past occurrences.
    #[serde(default)]
    pub count: i64,
}

impl HistoricalPattern {
    /// A pattern with no occurrences recorded.
    pub fn new(description: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            account_id: account_id.into(),
            account_name: String::new(),
            count: 0,
        }
    }
}

impl Contract for HistoricalPattern {
    const NAME: &'static str = "HistoricalPattern";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["description", "account_id"])
            .typed::<String>(&["description", "account_id"])
            .typed::<i64>(&["count"]);
    }
}

/// Transaction inside a classification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionForClassification {
    /// Transaction identifier.
    pub transaction_id: String,
    /// Bank description line.
    pub description: String,
    /// Signed amount.
    pub amount: Decimal,
    /// Posting date.
    pub transaction_date: NaiveDate,
    /// `debit` or `credit`.
    #[serde(default)]
    pub transaction_type: String,
    /// Kind of bank account.
    #[serde(default)]
    pub bank_account_type: String,
    /// Payee name.
    #[serde(default)]
    pub vendor_name: String,
    /// Memo.
    #[serde(default)]
    pub memo: String,
    /// Plaid category hierarchy.
    #[serde(default)]
    pub plaid_category: Vec<String>,
    /// Merchant name reported by Plaid.
    #[serde(default)]
    pub plaid_merchant_name: String,
}

impl TransactionForClassification {
    /// A transaction with only its required fields set.
    pub fn new(
        transaction_id: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
        transaction_date: NaiveDate,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            description: description.into(),
            amount,
            transaction_date,
            transaction_type: String::new(),
            bank_account_type: String::new(),
            vendor_name: String::new(),
            memo: String::new(),
            plaid_category: Vec::new(),
            plaid_merchant_name: String::new(),
        }
    }
}

impl Contract for TransactionForClassification {
    const NAME: &'static str = "TransactionForClassification";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["transaction_id", "description", "amount", "transaction_date"])
            .typed::<String>(&["transaction_id", "description"])
            .typed::<Decimal>(&["amount"])
            .typed::<NaiveDate>(&["transaction_date"]);
    }
}

/// Request to classify a batch of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionClassificationRequest {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Tenant the client belongs to.
    pub tenant_id: String,
    /// Client whose transactions are classified.
    pub client_id: String,
    /// Transactions to classify.
    pub transactions: Vec<TransactionForClassification>,
    /// Accounts the classifier may choose from.
    #[serde(default)]
    pub available_accounts: Vec<AvailableAccount>,
    /// Rules already configured.
    #[serde(default)]
    pub existing_rules: Vec<ExistingRule>,
    /// Past classifications.
    #[serde(default)]
    pub historical_patterns: Vec<HistoricalPattern>,
    /// Business context.
    #[serde(default)]
    pub client_context: ClientContext,
}

impl TransactionClassificationRequest {
    /// A request with no accounts, rules, history, or context.
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        transactions: Vec<TransactionForClassification>,
    ) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            transactions,
            available_accounts: Vec::new(),
            existing_rules: Vec::new(),
            historical_patterns: Vec::new(),
            client_context: ClientContext::default(),
        }
    }
}

impl Versioned for TransactionClassificationRequest {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for TransactionClassificationRequest {
    const NAME: &'static str = "TransactionClassificationRequest";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["tenant_id", "client_id", "transactions"])
            .typed::<String>(&["tenant_id", "client_id"])
            .constrained::<SchemaVersion>("schema_version")
            .each("transactions", TransactionForClassification::check)
            .each("available_accounts", AvailableAccount::check)
            .each("existing_rules", ExistingRule::check)
            .each("historical_patterns", HistoricalPattern::check)
            .nested("client_context", ClientContext::check);
    }
}

/// Risk indicator attached to a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    /// Risk code, usually one of the known codes.
    pub code: String,
    /// Severity token, default `medium`.
    #[serde(default = "crate::defaults::medium")]
    pub severity: String,
    /// Explanation.
    #[serde(default)]
    pub message: String,
}

impl RiskFlag {
    /// A medium-severity flag with no message.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity: crate::defaults::medium(),
            message: String::new(),
        }
    }
}

impl Contract for RiskFlag {
    const NAME: &'static str = "RiskFlag";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["code"])
            .typed::<String>(&["code", "severity", "message"]);
    }
}

/// Runner-up account for a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeSuggestion {
    /// Suggested account.
    pub account_id: String,
    /// Account name.
    #[serde(default)]
    pub name: String,
    /// Score; not range-checked.
    #[serde(default)]
    pub confidence: f64,
}

impl AlternativeSuggestion {
    /// A suggestion with zero confidence.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            name: String::new(),
            confidence: 0.0,
        }
    }
}

impl Contract for AlternativeSuggestion {
    const NAME: &'static str = "AlternativeSuggestion";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["account_id"])
            .typed::<String>(&["account_id"]);
    }
}

/// Classification outcome for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionClassificationResult {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Transaction classified.
    pub transaction_id: String,
    /// Suggested account, if any.
    #[serde(default)]
    pub suggested_account_id: Option<String>,
    /// Suggested account name.
    #[serde(default)]
    pub suggested_account_name: String,
    /// Suggested vendor, if any.
    #[serde(default)]
    pub suggested_vendor_id: Option<String>,
    /// Suggested vendor name.
    #[serde(default)]
    pub suggested_vendor_name: String,
    /// Score in `[0.0, 1.0]`.
    pub confidence: Confidence,
    /// Band token (see [`ConfidenceBand`]).
    #[serde(default)]
    pub confidence_band: String,
    /// Source token (see [`ClassificationSource`]).
    #[serde(default)]
    pub source: String,
    /// Explanation from the classifier.
    #[serde(default)]
    pub reasoning: String,
    /// Whether an accountant should review it.
    #[serde(default)]
    pub needs_review: bool,
    /// Whether the client must be asked.
    #[serde(default)]
    pub needs_clarification: bool,
    /// Question to put to the client.
    #[serde(default)]
    pub clarification_question: String,
    /// Risk indicators.
    #[serde(default)]
    pub risk_flags: Vec<RiskFlag>,
    /// Runner-up accounts.
    #[serde(default)]
    pub alternative_suggestions: Vec<AlternativeSuggestion>,
}

impl TransactionClassificationResult {
    /// A result with no suggestion.
    pub fn new(transaction_id: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            transaction_id: transaction_id.into(),
            suggested_account_id: None,
            suggested_account_name: String::new(),
            suggested_vendor_id: None,
            suggested_vendor_name: String::new(),
            confidence,
            confidence_band: String::new(),
            source: String::new(),
            reasoning: String::new(),
            needs_review: false,
            needs_clarification: false,
            clarification_question: String::new(),
            risk_flags: Vec::new(),
            alternative_suggestions: Vec::new(),
        }
    }

    /// The band, when it is one of the known tokens.
    pub fn band(&self) -> Option<ConfidenceBand> {
        self.confidence_band.parse().ok()
    }

    /// The source, when it is one of the known tokens.
    pub fn classification_source(&self) -> Option<ClassificationSource> {
        self.source.parse().ok()
    }
}

impl Versioned for TransactionClassificationResult {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for TransactionClassificationResult {
    const NAME: &'static str = "TransactionClassificationResult";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["transaction_id", "confidence"])
            .constrained::<SchemaVersion>("schema_version")
            .constrained::<Confidence>("confidence")
            .each("risk_flags", RiskFlag::check)
            .each("alternative_suggestions", AlternativeSuggestion::check);
    }
}

/// Rule proposed from a batch of classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRule {
    /// Description pattern.
    pub pattern: String,
    /// Account the rule would assign.
    pub suggested_account_id: String,
    /// Account name.
    #[serde(default)]
    pub suggested_account_name: String,
    /// Score; not range-checked.
    #[serde(default)]
    pub confidence: f64,
}

impl SuggestedRule {
    /// A rule suggestion with zero confidence.
    pub fn new(pattern: impl Into<String>, suggested_account_id: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            suggested_account_id: suggested_account_id.into(),
            suggested_account_name: String::new(),
            confidence: 0.0,
        }
    }
}

impl Contract for SuggestedRule {
    const NAME: &'static str = "SuggestedRule";

    fn check(fields: &mut FieldCheck<'_>) {
        fields.required(&["pattern", "suggested_account_id"]);
    }
}

/// Processing statistics for a classification batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationResponseMeta {
    /// Request identifier.
    pub request_id: String,
    /// Wall time spent.
    pub duration_ms: i64,
    /// Model used for AI classifications.
    pub model: String,
    /// Transactions handled.
    pub transactions_processed: i64,
    /// Transactions settled by rules.
    pub rule_matches: i64,
    /// Transactions settled by history.
    pub historical_matches: i64,
    /// Transactions settled by the model.
    pub ai_classifications: i64,
}

impl Contract for ClassificationResponseMeta {
    const NAME: &'static str = "ClassificationResponseMeta";

    fn check(_fields: &mut FieldCheck<'_>) {}
}

/// Response to a batch classification request.
///
/// `meta` travels as `_meta` on the wire; `meta` is accepted on input too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchClassificationResponse {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// One result per transaction, in request order.
    pub classifications: Vec<TransactionClassificationResult>,
    /// Rules proposed from the batch.
    #[serde(default)]
    pub suggested_rules: Vec<SuggestedRule>,
    /// Processing statistics.
    #[serde(default, rename = "_meta", alias = "meta")]
    pub meta: ClassificationResponseMeta,
}

impl BatchClassificationResponse {
    /// A response with no rules and empty statistics.
    pub fn new(classifications: Vec<TransactionClassificationResult>) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            classifications,
            suggested_rules: Vec::new(),
            meta: ClassificationResponseMeta::default(),
        }
    }
}

impl Versioned for BatchClassificationResponse {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for BatchClassificationResponse {
    const NAME: &'static str = "BatchClassificationResponse";
    const ALIASES: &'static [(&'static str, &'static str)] = &[("meta", "_meta")];

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["classifications"])
            .constrained::<SchemaVersion>("schema_version")
            .each("classifications", TransactionClassificationResult::check)
            .each("suggested_rules", SuggestedRule::check)
            .nested("_meta", ClassificationResponseMeta::check)
            .nested("meta", ClassificationResponseMeta::check);
    }
}
