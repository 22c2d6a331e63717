use chrono::Utc;
use platform_contracts_canonical::{Contract, EntityType, MonthOfYear, Versioned, Violation};
use platform_contracts_schemas::events::{
    is_known_event_type, AuditEvent, PlatformEvent, KNOWN_EVENT_TYPES,
};
use platform_contracts_schemas::tax::{QuarterlyPayment, TaxComputeRequest, TaxComputeResponse};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn platform_event_requires_event_type() {
    let err = PlatformEvent::from_value(json!({})).unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert!(err.mentions("event_type"));
}

#[test]
fn platform_event_defaults() {
    let before = Utc::now();
    let event = PlatformEvent::from_value(json!({"event_type": "transaction.classified"})).unwrap();
    assert!(event.timestamp >= before);
    assert!(event.payload.is_empty());
    assert!(event.is_known_type());
    assert!(event.is_compatible("1.7"));
    assert!(!event.is_compatible("2.0"));
}

#[test]
fn platform_event_rejects_malformed_version() {
    let err = PlatformEvent::from_value(json!({
        "event_type": "digest.generated",
        "schema_version": "v1"
    }))
    .unwrap_err();
    match &err.violations()[0] {
        Violation::PatternMismatch { path, value, message } => {
            assert_eq!(path, "schema_version");
            assert_eq!(value, "v1");
            assert!(message.contains("Invalid schema version format"));
        }
        other => panic!("unexpected violation {other:?}"),
    }
}

#[test]
fn event_catalog_is_lookup_only() {
    assert_eq!(KNOWN_EVENT_TYPES.len(), 16);
    assert!(is_known_event_type("conversation.timed_out"));
    assert!(!is_known_event_type("invoice.paid"));
    let event = PlatformEvent::from_value(json!({"event_type": "invoice.paid"})).unwrap();
    assert!(!event.is_known_type());
}

#[test]
fn audit_event_accepts_empty_payload() {
    let audit = AuditEvent::from_value(json!({})).unwrap();
    assert!(audit.before_state.is_empty());
    assert_eq!(audit.actor_id, "");

    let value = serde_json::to_value(AuditEvent::default()).unwrap();
    assert!(value["timestamp"].is_string());
}

#[test]
fn tax_request_month_bounds() {
    for month in 1..=12 {
        let request = TaxComputeRequest::from_value(json!({"as_of_month": month})).unwrap();
        assert_eq!(request.as_of_month, month as u8);
    }
    for month in [0, 13] {
        let err = TaxComputeRequest::from_value(json!({"as_of_month": month})).unwrap_err();
        assert!(matches!(err.violations()[0], Violation::OutOfBounds { .. }));
        assert!(err.mentions("as_of_month"));
    }
    assert!(matches!(
        TaxComputeRequest::from_value(json!({})).unwrap_err().violations()[0],
        Violation::Missing { .. }
    ));
}

#[test]
fn tax_request_defaults() {
    let request = TaxComputeRequest::from_value(json!({
        "as_of_month": 6,
        "entity_type": "s_corp",
        "gross_receipts_ytd": "125000.00"
    }))
    .unwrap();
    assert_eq!(request.tax_year, 2025);
    assert!(request.qbi_eligible);
    assert_eq!(request.gross_receipts_ytd, dec!(125000.00));
    assert_eq!(request.w2_income, Decimal::ZERO);
    assert_eq!(request.entity(), Some(EntityType::SCorp));
    assert_eq!(request, {
        let mut expected = TaxComputeRequest::new(MonthOfYear::new(6).unwrap());
        expected.entity_type = "s_corp".into();
        expected.gross_receipts_ytd = dec!(125000.00);
        expected
    });
}

#[test]
fn tax_response_month_is_unchecked() {
    let response = TaxComputeResponse::from_value(json!({})).unwrap();
    assert_eq!(response.as_of_month, 0);
    assert_eq!(response.tax_year, 2025);
    assert!(TaxComputeResponse::from_value(json!({"as_of_month": 99})).is_ok());
}

#[test]
fn tax_response_schedule() {
    let err = TaxComputeResponse::from_value(json!({
        "quarterly_payments": [{"quarter": 1}, {"total_amount": "10"}]
    }))
    .unwrap_err();
    assert!(err.mentions("quarterly_payments[1].quarter"));

    let mut response = TaxComputeResponse::default();
    for (quarter, amount) in [(1, dec!(1250.00)), (2, dec!(1250.00)), (3, dec!(1300.50))] {
        let mut payment = QuarterlyPayment::new(quarter);
        payment.total_amount = amount;
        response.quarterly_payments.push(payment);
    }
    assert_eq!(response.scheduled_total(), Some(dec!(3800.50)));
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["quarterly_payments"][2]["total_amount"], "1300.50");

    let mut overflowing = QuarterlyPayment::new(4);
    overflowing.total_amount = Decimal::MAX;
    response.quarterly_payments.push(overflowing);
    assert_eq!(response.scheduled_total(), None);
}
