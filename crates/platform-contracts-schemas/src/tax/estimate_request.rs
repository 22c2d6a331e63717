//! Estimated-tax computation request.

use platform_contracts_canonical::{
    Contract, EntityType, FieldCheck, MonthOfYear, SchemaVersion, Versioned,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Year-to-date figures for an estimated-tax computation.
///
/// All amounts default to zero. `as_of_month` is the last month the
/// year-to-date figures cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct TaxComputeRequest {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub client_id: String,
    /// Default 2025.
    #[serde(default = "crate::defaults::tax_year")]
    pub tax_year: i32,
    /// Month in [1, 12].
    pub as_of_month: MonthOfYear,
    /// Filing status token.
    #[serde(default)]
    pub filing_status: String,
    /// Entity type token (see [`EntityType`]).
    #[serde(default)]
    pub entity_type: String,
    /// Two-letter state code.
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub gross_receipts_ytd: Decimal,
    #[serde(default)]
    pub cost_of_goods_sold_ytd: Decimal,
    #[serde(default)]
    pub total_expenses_ytd: Decimal,
    #[serde(default)]
    pub officer_compensation_ytd: Decimal,
    #[serde(default)]
    pub other_income_ytd: Decimal,
    #[serde(default)]
    pub w2_income: Decimal,
    #[serde(default)]
    pub spouse_w2_income: Decimal,
    #[serde(default)]
    pub capital_gains: Decimal,
    #[serde(default)]
    pub other_taxable_income: Decimal,
    #[serde(default)]
    pub itemized_deductions: Decimal,
    #[serde(default)]
    pub prior_year_overpayment: Decimal,
    #[serde(default)]
    pub estimated_payments_ytd: Decimal,
    /// Whether the qualified business income deduction applies, default true.
    #[serde(default = "crate::defaults::yes")]
    pub qbi_eligible: bool,
    /// QBI loss carried forward.
    #[serde(default)]
    pub qbi_prior_year_loss: Decimal,
}

impl TaxComputeRequest {
    /// A request for `as_of_month` with every amount zero.
    pub fn new(as_of_month: MonthOfYear) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            tenant_id: String::new(),
            client_id: String::new(),
            tax_year: crate::defaults::tax_year(),
            as_of_month,
            filing_status: String::new(),
            entity_type: String::new(),
            state: String::new(),
            gross_receipts_ytd: Decimal::ZERO,
            cost_of_goods_sold_ytd: Decimal::ZERO,
            total_expenses_ytd: Decimal::ZERO,
            officer_compensation_ytd: Decimal::ZERO,
            other_income_ytd: Decimal::ZERO,
            w2_income: Decimal::ZERO,
            spouse_w2_income: Decimal::ZERO,
            capital_gains: Decimal::ZERO,
            other_taxable_income: Decimal::ZERO,
            itemized_deductions: Decimal::ZERO,
            prior_year_overpayment: Decimal::ZERO,
            estimated_payments_ytd: Decimal::ZERO,
            qbi_eligible: true,
            qbi_prior_year_loss: Decimal::ZERO,
        }
    }

    /// The entity type, when it is one of the known tokens.
    pub fn entity(&self) -> Option<EntityType> {
        self.entity_type.parse().ok()
    }
}

impl Versioned for TaxComputeRequest {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for TaxComputeRequest {
    const NAME: &'static str = "TaxComputeRequest";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["as_of_month"])
            .typed::<Decimal>(&[
                "gross_receipts_ytd",
                "cost_of_goods_sold_ytd",
                "total_expenses_ytd",
                "officer_compensation_ytd",
                "other_income_ytd",
                "estimated_payments_ytd",
            ])
            .typed::<bool>(&["qbi_eligible"])
            .constrained::<SchemaVersion>("schema_version")
            .constrained::<MonthOfYear>("as_of_month");
    }
}
