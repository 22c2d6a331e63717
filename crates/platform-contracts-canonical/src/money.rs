use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bounded::CurrencyCode;
use crate::contract::Contract;
use crate::validation::FieldCheck;

/// Amount with currency. Amounts are never binary floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Exact decimal amount, serialized as a string with its scale preserved.
    pub amount: Decimal,
    /// Currency code, default `USD`.
    #[serde(default)]
    pub currency: CurrencyCode,
}

impl Money {
    /// An amount in the default currency.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CurrencyCode::default(),
        }
    }

    /// An amount in `currency`.
    pub fn with_currency(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// `amount > 0`.
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// `amount < 0`.
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// `amount == 0`, at any scale.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

/// Exact sum of `amounts`, or `None` if it leaves the `Decimal` range.
pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}

impl Contract for Money {
    const NAME: &'static str = "Money";

    fn check(fields: &mut FieldCheck<'_>) {
        fields
            .required(&["amount"])
            .typed::<Decimal>(&["amount"])
            .constrained::<CurrencyCode>("currency");
    }
}
