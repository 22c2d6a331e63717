//! Risk flags and the catalog of known risk codes.

use platform_contracts_canonical::{Contract, FieldCheck, RiskSeverity};
use serde::{Deserialize, Serialize};

/// Risk indicator for a transaction or classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFlag {
    /// Risk code; codes outside [`KNOWN_RISK_CODES`] are accepted.
    pub code: String,
    /// Severity token, default `medium`.
    #[serde(default = "crate::defaults::medium")]
    pub severity: String,
    /// Explanation.
    #[serde(default)]
    pub message: String,
    /// Grouping for reporting.
    #[serde(default)]
    pub category: String,
}

impl RiskFlag {
    /// A medium-severity flag with no message.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            severity: crate::defaults::medium(),
            message: String::new(),
            category: String::new(),
        }
    }

    /// Catalog description of the code.
    pub fn description(&self) -> Option<&'static str> {
        describe_risk_code(&self.code)
    }

    /// The severity, when it is one of the known tokens.
    pub fn risk_severity(&self) -> Option<RiskSeverity> {
        self.severity.parse().ok()
    }

    /// Whether the code is in the catalog.
    pub fn is_known(&self) -> bool {
        self.description().is_some()
    }
}

impl Contract for RiskFlag {
    const NAME: &'static str = "RiskFlag";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["code"])
            .typed::<String>(&["code", "severity", "message", "category"]);
    }
}

/// Risk codes the classifiers emit, with their descriptions.
pub const KNOWN_RISK_CODES: &[(&str, &str)] = &[
    (
        "OWNER_TXN_POSSIBLE",
        "Transfer may be owner-related (draw, loan, contribution)",
    ),
    (
        "LARGE_AMOUNT",
        "Transaction exceeds normal range for this category",
    ),
    ("DUPLICATE_POSSIBLE", "Possible duplicate transaction detected"),
    ("TAX_SENSITIVE", "Classification affects tax-sensitive category"),
    (
        "PERSONAL_EXPENSE",
        "Possible personal expense in business account",
    ),
    (
        "ROUND_AMOUNT",
        "Round dollar amount may indicate estimate or transfer",
    ),
    ("NEW_VENDOR", "First transaction with this vendor/payee"),
    (
        "PATTERN_BREAK",
        "Transaction does not match historical patterns for this vendor",
    ),
];

/// Description of a known risk code.
pub fn describe_risk_code(code: &str) -> Option<&'static str> {
    KNOWN_RISK_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, description)| *description)
}
