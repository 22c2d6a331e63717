//! Estimated-tax computation result.

use platform_contracts_canonical::{
    checked_sum, Contract, FieldCheck, SchemaVersion, Versioned,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One quarterly estimated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterlyPayment {
    /// Quarter number.
    pub quarter: i64,
    /// Due date as sent by the engine.
    #[serde(default)]
    pub due_date: String,
    /// Federal share.
    #[serde(default)]
    pub federal_amount: Decimal,
    /// State share.
    #[serde(default)]
    pub state_amount: Decimal,
    /// Federal plus state.
    #[serde(default)]
    pub total_amount: Decimal,
    /// Payment status token.
    #[serde(default)]
    pub status: String,
}

impl QuarterlyPayment {
    /// A zero payment for `quarter`.
    pub fn new(quarter: i64) -> Self {
        Self {
            quarter,
            due_date: String::new(),
            federal_amount: Decimal::ZERO,
            state_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            status: String::new(),
        }
    }
}

impl Contract for QuarterlyPayment {
    const NAME: &'static str = "QuarterlyPayment";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["quarter"])
            .typed::<i64>(&["quarter"])
            .typed::<Decimal>(&["federal_amount", "state_amount", "total_amount"]);
    }
}

/// Projection and payment schedule produced by the tax engine.
///
/// `as_of_month` is echoed back unchecked and defaults to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TaxComputeResponse {
    pub schema_version: SchemaVersion,
    pub tenant_id: String,
    pub client_id: String,
    pub tax_year: i32,
    pub as_of_month: i64,
    pub projected_annual_revenue: Decimal,
    pub projected_annual_expenses: Decimal,
    pub projected_net_income: Decimal,
    pub total_federal_tax: Decimal,
    pub total_state_tax: Decimal,
    pub total_self_employment_tax: Decimal,
    pub total_tax_liability: Decimal,
    pub recommended_set_aside_pct: Decimal,
    pub recommended_monthly_set_aside: Decimal,
    pub quarterly_payments: Vec<QuarterlyPayment>,
    pub effective_tax_rate: Decimal,
    pub marginal_tax_rate: Decimal,
    pub qbi_deduction: Decimal,
    pub engine_version: String,
}

impl Default for TaxComputeResponse {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            tenant_id: String::new(),
            client_id: String::new(),
            tax_year: crate::defaults::tax_year(),
            as_of_month: 0,
            projected_annual_revenue: Decimal::ZERO,
            projected_annual_expenses: Decimal::ZERO,
            projected_net_income: Decimal::ZERO,
            total_federal_tax: Decimal::ZERO,
            total_state_tax: Decimal::ZERO,
            total_self_employment_tax: Decimal::ZERO,
            total_tax_liability: Decimal::ZERO,
            recommended_set_aside_pct: Decimal::ZERO,
            recommended_monthly_set_aside: Decimal::ZERO,
            quarterly_payments: Vec::new(),
            effective_tax_rate: Decimal::ZERO,
            marginal_tax_rate: Decimal::ZERO,
            qbi_deduction: Decimal::ZERO,
            engine_version: String::new(),
        }
    }
}

impl TaxComputeResponse {
    /// Sum of the scheduled quarterly totals, or `None` on overflow.
    pub fn scheduled_total(&self) -> Option<Decimal> {
        checked_sum(
            self.quarterly_payments
                .iter()
                .map(|payment| payment.total_amount),
        )
    }
}

impl Versioned for TaxComputeResponse {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for TaxComputeResponse {
    const NAME: &'static str = "TaxComputeResponse";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .constrained::<SchemaVersion>("schema_version")
            .each("quarterly_payments", QuarterlyPayment::check);
    }
}
