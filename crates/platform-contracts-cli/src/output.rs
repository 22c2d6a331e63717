//! Output formatting utilities.

use platform_contracts_canonical::{ValidationError, Violation};
use serde_json::{json, Value};

/// Formats a report as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Describes a validation failure as JSON.
pub fn violations_json(err: &ValidationError) -> Value {
    let violations: Vec<Value> = err
        .violations()
        .iter()
        .map(|violation| {
            json!({
                "path": violation.path(),
                "kind": violation_kind(violation),
                "message": violation.to_string(),
            })
        })
        .collect();
    json!({
        "valid": false,
        "record": err.record(),
        "violations": violations,
    })
}

fn violation_kind(violation: &Violation) -> &'static str {
    match violation {
        Violation::Missing { .. } => "missing",
        Violation::PatternMismatch { .. } => "pattern_mismatch",
        Violation::OutOfBounds { .. } => "out_of_bounds",
        Violation::TooLong { .. } => "too_long",
        Violation::UnknownVariant { .. } => "unknown_variant",
        Violation::Malformed { .. } => "malformed",
    }
}

/// Prints a two-column table.
pub fn print_table(headers: (&str, &str), width: usize, rows: &[(String, String)]) {
    println!("{:<width$} {}", headers.0, headers.1, width = width);
    println!("{}", "-".repeat(width + 50));
    for (left, right) in rows {
        println!("{:<width$} {}", truncate(left, width), right, width = width);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
