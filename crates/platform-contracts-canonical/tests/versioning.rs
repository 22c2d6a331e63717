use platform_contracts_canonical::{
    Contract, SchemaVersion, Versioned, VersionedSchema, Violation,
};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn default_version_is_one_zero() {
    let schema = VersionedSchema::default();
    assert_eq!(schema.schema_version, "1.0");
    assert_eq!(SchemaVersion::default().as_str(), "1.0");
}

#[test]
fn valid_versions_are_kept_verbatim() {
    for version in ["1.0", "2.0", "1.5", "10.99", "01.007"] {
        let schema = VersionedSchema::new(version).unwrap();
        assert_eq!(schema.schema_version.as_str(), version);
    }
}

#[test]
fn invalid_versions_are_rejected() {
    for version in ["abc", "1", "1.2.3", "v1.0", "1.x", "", ".1", "1.", "-1.0", " 1.0", "1.0 "] {
        let err = VersionedSchema::new(version).unwrap_err();
        assert!(
            err.to_string().contains("Invalid schema version format"),
            "{version}: {err}"
        );
        assert!(matches!(err, Violation::PatternMismatch { ref value, .. } if value == version));
    }
}

#[test]
fn non_ascii_digits_are_rejected() {
    assert!(SchemaVersion::parse("١.٠").is_err());
}

#[test]
fn compatibility_follows_major_segment() {
    let v1 = VersionedSchema::default();
    assert!(v1.is_compatible("1.0"));
    assert!(v1.is_compatible("1.5"));
    assert!(v1.is_compatible("1.99"));
    assert!(!v1.is_compatible("2.0"));
    assert!(!v1.is_compatible("0.9"));
}

#[test]
fn compatibility_compares_text_not_numbers() {
    let v1 = SchemaVersion::parse("1.0").unwrap();
    assert!(!v1.is_compatible("01.0"));
}

#[test]
fn compatibility_does_not_validate_other() {
    let v1 = SchemaVersion::parse("1.0").unwrap();
    assert!(v1.is_compatible("1"));
    assert!(v1.is_compatible("1.x.y"));
    assert!(!v1.is_compatible("v1.0"));
    assert!(!v1.is_compatible(""));
}

#[test]
fn major_and_minor_segments() {
    let version = SchemaVersion::parse("3.14").unwrap();
    assert_eq!(version.major(), "3");
    assert_eq!(version.minor(), "14");
}

#[test]
fn deserialization_rejects_bad_versions() {
    let ok: VersionedSchema = serde_json::from_value(json!({"schema_version": "2.1"})).unwrap();
    assert_eq!(ok.schema_version, "2.1");

    let defaulted: VersionedSchema = serde_json::from_value(json!({})).unwrap();
    assert_eq!(defaulted.schema_version, "1.0");

    assert!(serde_json::from_value::<VersionedSchema>(json!({"schema_version": "2"})).is_err());
}

#[test]
fn contract_decode_reports_version_path() {
    let err = VersionedSchema::from_value(json!({"schema_version": "v1"})).unwrap_err();
    assert_eq!(err.record(), "VersionedSchema");
    assert!(err.mentions("schema_version"));
    assert!(err.to_string().contains("Expected 'major.minor'"));
}

#[test]
fn contract_decode_rejects_wrong_type() {
    let err = VersionedSchema::from_value(json!({"schema_version": 1.0})).unwrap_err();
    assert!(matches!(err.violations()[0], Violation::Malformed { .. }));
}

proptest! {
    #[test]
    fn any_digit_pair_is_accepted_unchanged(major in "[0-9]{1,6}", minor in "[0-9]{1,6}") {
        let text = format!("{major}.{minor}");
        let version = SchemaVersion::parse(text.clone()).unwrap();
        prop_assert_eq!(version.as_str(), text.as_str());
        prop_assert_eq!(version.major(), major.as_str());
    }

    #[test]
    fn same_major_is_always_compatible(major in "[0-9]{1,4}", a in "[0-9]{1,4}", b in "[0-9]{1,4}") {
        let version = SchemaVersion::parse(format!("{major}.{a}")).unwrap();
        let other = format!("{major}.{b}");
        prop_assert!(version.is_compatible(&other));
    }

    #[test]
    fn strings_with_letters_are_rejected(s in "[0-9]*[a-zA-Z][0-9a-zA-Z.]*") {
        prop_assert!(SchemaVersion::parse(s).is_err());
    }
}
