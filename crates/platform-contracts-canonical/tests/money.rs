use platform_contracts_canonical::{checked_sum, Contract, CurrencyCode, Money, Violation};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn money_defaults_to_usd() {
    let money = Money::new(dec!(100.50));
    assert_eq!(money.amount, dec!(100.50));
    assert_eq!(money.currency, "USD");
}

#[test]
fn sign_predicates() {
    assert!(Money::new(dec!(10.00)).is_positive());
    assert!(Money::new(dec!(0.01)).is_positive());
    assert!(!Money::new(dec!(0)).is_positive());
    assert!(!Money::new(dec!(-10.00)).is_positive());

    assert!(Money::new(dec!(-10.00)).is_negative());
    assert!(Money::new(dec!(-0.01)).is_negative());
    assert!(!Money::new(dec!(0)).is_negative());
    assert!(!Money::new(dec!(10.00)).is_negative());

    assert!(Money::new(dec!(0)).is_zero());
    assert!(Money::new(dec!(0.00)).is_zero());
    assert!(!Money::new(dec!(0.01)).is_zero());
    assert!(!Money::new(dec!(-0.01)).is_zero());
}

#[test]
fn decimal_sums_have_no_float_residue() {
    let total = Money::new(dec!(0.1) + dec!(0.2) - dec!(0.3));
    assert!(total.is_zero());
}

#[test]
fn amount_round_trips_as_string_with_scale() {
    let money = Money::new(dec!(100.50));
    assert_eq!(
        serde_json::to_value(&money).unwrap(),
        json!({"amount": "100.50", "currency": "USD"})
    );
}

#[test]
fn amount_accepts_string_or_number() {
    let from_str = Money::from_value(json!({"amount": "12.34"})).unwrap();
    let from_num = Money::from_value(json!({"amount": 12})).unwrap();
    assert_eq!(from_str.amount, dec!(12.34));
    assert_eq!(from_num.amount, dec!(12));
    assert_eq!(from_num.currency, "USD");
}

#[test]
fn number_amounts_keep_their_source_digits() {
    let money = Money::from_json(r#"{"amount": 1234567890.123456789}"#).unwrap();
    assert_eq!(money.amount, dec!(1234567890.123456789));
    assert_eq!(money.amount.to_string(), "1234567890.123456789");

    let err = Money::from_value(json!({"amount": "ten"})).unwrap_err();
    assert!(matches!(err.violations()[0], Violation::Malformed { .. }));
    assert!(err.mentions("amount"));
}

#[test]
fn checked_sum_stops_at_the_decimal_range() {
    assert_eq!(checked_sum([dec!(1.10), dec!(2.20)]), Some(dec!(3.30)));
    assert_eq!(checked_sum(Vec::new()), Some(Decimal::ZERO));
    assert_eq!(checked_sum([Decimal::MAX, dec!(1)]), None);
    assert_eq!(checked_sum([Decimal::MIN, dec!(-1)]), None);
}

#[test]
fn currency_is_limited_to_three_characters() {
    assert!(CurrencyCode::parse("EUR").is_ok());
    let err = CurrencyCode::parse("EURO").unwrap_err();
    assert!(matches!(err, Violation::TooLong { length: 4, max: 3, .. }));

    let err = Money::from_value(json!({"currency": "DOLLARS"})).unwrap_err();
    assert!(err.mentions("amount"));
    assert!(err.mentions("currency"));
    assert_eq!(err.violations().len(), 2);
}

proptest! {
    #[test]
    fn exactly_one_sign_predicate_holds(mantissa in any::<i64>(), scale in 0u32..10) {
        let money = Money::new(Decimal::new(mantissa, scale));
        let held = [money.is_positive(), money.is_negative(), money.is_zero()]
            .iter()
            .filter(|held| **held)
            .count();
        prop_assert_eq!(held, 1);
    }
}
