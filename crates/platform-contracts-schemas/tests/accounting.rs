use chrono::NaiveDate;
use platform_contracts_canonical::{
    AccountType, Confidence, ConfidenceBand, Contract, Violation, WireEncoder, WireOptions,
};
use platform_contracts_schemas::accounting::{
    describe_risk_code, Account, AvailableAccount, BatchClassificationResponse, JournalEntry,
    JournalEntryLine, RiskFlag, SuspenseItem, TransactionClassificationRequest,
    TransactionClassificationResult, KNOWN_RISK_CODES,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[test]
fn matching_debit_and_credit_balance() {
    let entry = JournalEntry::new(day()).with_lines(vec![
        JournalEntryLine::debit("1000", dec!(100.00)),
        JournalEntryLine::credit("4000", dec!(100.00)),
    ]);
    assert!(entry.is_balanced());
    assert_eq!(entry.total_debits(), Some(dec!(100.00)));
    assert_eq!(entry.total_credits(), Some(dec!(100.00)));
}

#[test]
fn short_credit_is_unbalanced() {
    let entry = JournalEntry::new(day()).with_lines(vec![
        JournalEntryLine::debit("1000", dec!(100.00)),
        JournalEntryLine::credit("4000", dec!(50.00)),
    ]);
    assert!(!entry.is_balanced());
    assert_eq!(entry.imbalance(), Some(dec!(50.00)));
}

#[test]
fn entry_without_lines_is_balanced() {
    assert!(JournalEntry::new(day()).is_balanced());
}

#[test]
fn split_lines_balance_on_totals() {
    let entry = JournalEntry::new(day()).with_lines(vec![
        JournalEntryLine::debit("6000", dec!(100)),
        JournalEntryLine::debit("6100", dec!(50)),
        JournalEntryLine::credit("1000", dec!(75)),
        JournalEntryLine::credit("2000", dec!(75)),
    ]);
    assert!(entry.is_balanced());
}

#[test]
fn journal_entry_from_json() {
    let entry = JournalEntry::from_value(json!({
        "entry_date": "2024-01-15",
        "memo": "Office supplies",
        "lines": [
            {"account_id": "6000", "debit": "19.99"},
            {"account_id": "1000", "credit": "19.99"}
        ]
    }))
    .unwrap();
    assert_eq!(entry.schema_version, "1.0");
    assert_eq!(entry.entry_date, day());
    assert!(entry.is_balanced());
    assert_eq!(entry.lines[1].debit, Decimal::ZERO);
}

#[test]
fn json_number_amounts_keep_every_digit() {
    let entry = JournalEntry::from_json(
        r#"{
            "entry_date": "2024-01-15",
            "lines": [
                {"account_id": "6000", "debit": 1234567890.123456789},
                {"account_id": "1000", "credit": 1234567890.123456788}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(entry.total_debits(), Some(dec!(1234567890.123456789)));
    assert_eq!(entry.total_credits(), Some(dec!(1234567890.123456788)));
    assert_eq!(entry.imbalance(), Some(dec!(0.000000001)));
    assert!(!entry.is_balanced());
}

#[test]
fn overflowing_totals_are_not_balanced() {
    let entry = JournalEntry::new(day()).with_lines(vec![
        JournalEntryLine::debit("6000", Decimal::MAX),
        JournalEntryLine::debit("6100", Decimal::MAX),
        JournalEntryLine::credit("1000", Decimal::MAX),
        JournalEntryLine::credit("2000", Decimal::MAX),
    ]);
    assert_eq!(entry.total_debits(), None);
    assert_eq!(entry.total_credits(), None);
    assert_eq!(entry.imbalance(), None);
    assert!(!entry.is_balanced());

    let single = JournalEntry::new(day()).with_lines(vec![
        JournalEntryLine::debit("6000", Decimal::MAX),
        JournalEntryLine::credit("1000", Decimal::MAX),
    ]);
    assert!(single.is_balanced());
}

#[test]
fn journal_entry_reports_null_and_mistyped_line_fields() {
    let err = JournalEntry::from_value(json!({
        "entry_date": "15/01/2024",
        "lines": [
            {"account_id": null, "debit": "100.00"},
            {"account_id": "1000", "credit": "one hundred"}
        ]
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(
        paths,
        vec!["entry_date", "lines[0].account_id", "lines[1].credit"]
    );
}

#[test]
fn journal_entry_reports_line_paths() {
    let err = JournalEntry::from_value(json!({
        "schema_version": "one",
        "lines": [{"account_id": "6000"}, {"debit": "1"}]
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(paths, vec!["entry_date", "schema_version", "lines[1].account_id"]);
}

#[test]
fn journal_entry_serializes_amounts_as_strings() {
    let entry = JournalEntry::new(day()).with_lines(vec![JournalEntryLine::debit("1000", dec!(100.50))]);
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["entry_date"], "2024-01-15");
    assert_eq!(value["lines"][0]["debit"], "100.50");
    assert_eq!(value["lines"][0]["credit"], "0");
}

#[test]
fn account_defaults() {
    let account = Account::from_value(json!({
        "id": "acc_1",
        "name": "Checking",
        "account_type": "asset"
    }))
    .unwrap();
    assert!(account.is_active);
    assert_eq!(account.parent_id, None);
    assert_eq!(account.kind(), Some(AccountType::Asset));

    let err = Account::from_value(json!({})).unwrap_err();
    assert!(err.mentions("id"));
    assert!(err.mentions("name"));
}

#[test]
fn account_keeps_unknown_type_tokens() {
    let account = Account::from_value(json!({"id": "a", "name": "b", "account_type": "bank"})).unwrap();
    assert_eq!(account.account_type, "bank");
    assert_eq!(account.kind(), None);
}

#[test]
fn available_account_uses_type_key() {
    let mut option = AvailableAccount::new("6000", "Supplies");
    option.account_type = "expense".into();
    let value = serde_json::to_value(&option).unwrap();
    assert_eq!(value["type"], "expense");
    assert!(value.get("account_type").is_none());
}

#[test]
fn classification_request_reports_nested_transactions() {
    let err = TransactionClassificationRequest::from_value(json!({
        "tenant_id": "t1",
        "client_id": "c1",
        "transactions": [
            {"transaction_id": "x1", "description": "AMZN", "amount": "-12.00", "transaction_date": "2024-01-15"},
            {"transaction_id": "x2", "description": "Uber"}
        ],
        "available_accounts": [{"id": "6000"}]
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(
        paths,
        vec![
            "transactions[1].amount",
            "transactions[1].transaction_date",
            "available_accounts[0].name"
        ]
    );
}

#[test]
fn classification_confidence_is_bounded() {
    let ok = TransactionClassificationResult::from_value(json!({
        "transaction_id": "x1",
        "confidence": 0.92,
        "confidence_band": "high"
    }))
    .unwrap();
    assert_eq!(ok.confidence, 0.92);
    assert_eq!(ok.band(), Some(ConfidenceBand::High));

    for bad in [-0.01, 1.01] {
        let err = TransactionClassificationResult::from_value(json!({
            "transaction_id": "x1",
            "confidence": bad
        }))
        .unwrap_err();
        assert!(matches!(err.violations()[0], Violation::OutOfBounds { .. }));
        assert!(err.mentions("confidence"));
    }
}

#[test]
fn batch_reports_result_paths() {
    let err = BatchClassificationResponse::from_value(json!({
        "classifications": [
            {"transaction_id": "x1", "confidence": 0.5},
            {"transaction_id": "x2", "confidence": 1.5},
            {"confidence": 0.1}
        ]
    }))
    .unwrap_err();
    let paths: Vec<&str> = err.paths().collect();
    assert_eq!(
        paths,
        vec!["classifications[1].confidence", "classifications[2].transaction_id"]
    );
}

#[test]
fn batch_meta_accepts_alias_and_name() {
    for key in ["_meta", "meta"] {
        let batch = BatchClassificationResponse::from_value(json!({
            "classifications": [],
            key: {"request_id": "req_1", "transactions_processed": 3}
        }))
        .unwrap();
        assert_eq!(batch.meta.request_id, "req_1");
        assert_eq!(batch.meta.transactions_processed, 3);
    }
}

#[test]
fn batch_meta_emitted_by_alias_unless_disabled() {
    let mut batch = BatchClassificationResponse::new(vec![TransactionClassificationResult::new(
        "x1",
        Confidence::new(0.8).unwrap(),
    )]);
    batch.meta.model = "classifier-v2".into();

    let aliased = WireEncoder::default().to_value(&batch).unwrap();
    assert_eq!(aliased["_meta"]["model"], "classifier-v2");
    assert!(aliased.get("meta").is_none());

    let by_name = WireEncoder::new(WireOptions {
        by_alias: false,
        ..WireOptions::default()
    })
    .to_value(&batch)
    .unwrap();
    assert_eq!(by_name["meta"]["model"], "classifier-v2");
    assert!(by_name.get("_meta").is_none());
}

#[test]
fn risk_catalog_is_lookup_only() {
    assert_eq!(KNOWN_RISK_CODES.len(), 8);
    assert_eq!(
        describe_risk_code("NEW_VENDOR"),
        Some("First transaction with this vendor/payee")
    );

    let flag = RiskFlag::from_value(json!({"code": "SOMETHING_ELSE"})).unwrap();
    assert_eq!(flag.severity, "medium");
    assert!(!flag.is_known());
    assert!(RiskFlag::new("LARGE_AMOUNT").is_known());
}

#[test]
fn suspense_item_requires_identifiers() {
    let err = SuspenseItem::from_value(json!({"reason": "low_confidence"})).unwrap_err();
    assert_eq!(err.violations().len(), 4);
    for field in ["suspense_id", "transaction_id", "client_id", "tenant_id"] {
        assert!(err.mentions(field), "missing {field}");
    }

    let item = SuspenseItem::new("s1", "x1", "c1", "t1");
    assert!(!item.resolved);
    assert_eq!(item.clarification_attempts, 0);
}

proptest! {
    #[test]
    fn mirrored_lines_always_balance(cents in proptest::collection::vec(0i64..10_000_000, 0..12)) {
        let mut lines = Vec::new();
        for (i, amount) in cents.iter().enumerate() {
            lines.push(JournalEntryLine::debit(format!("d{i}"), Decimal::new(*amount, 2)));
        }
        let total: Decimal = cents.iter().map(|c| Decimal::new(*c, 2)).sum();
        lines.push(JournalEntryLine::credit("1000", total));
        let entry = JournalEntry::new(day()).with_lines(lines);
        prop_assert!(entry.is_balanced());
        prop_assert_eq!(entry.imbalance(), Some(Decimal::ZERO));
    }
}
