//! Balance command implementation.

use platform_contracts_canonical::{Contract, Decimal};
use platform_contracts_schemas::accounting::JournalEntry;
use serde_json::json;
use tracing::info;

use crate::error::CliError;
use crate::input::read_json;
use crate::output::format_json;

pub fn run(input: Option<String>, json_output: bool, strict: bool) -> Result<(), CliError> {
    let entry = JournalEntry::from_value(read_json(input)?)?;
    let balanced = entry.is_balanced();
    info!(
        entry_id = %entry.entry_id,
        lines = entry.lines.len(),
        balanced,
        "checked journal entry"
    );

    if json_output {
        let report = json!({
            "entry_id": entry.entry_id,
            "lines": entry.lines.len(),
            "total_debits": entry.total_debits().map(|total| total.to_string()),
            "total_credits": entry.total_credits().map(|total| total.to_string()),
            "imbalance": entry.imbalance().map(|total| total.to_string()),
            "balanced": balanced,
        });
        println!("{}", format_json(&report));
    } else {
        println!("{:<12} {}", "DEBITS", amount_or_overflow(entry.total_debits()));
        println!("{:<12} {}", "CREDITS", amount_or_overflow(entry.total_credits()));
        println!("{:<12} {}", "IMBALANCE", amount_or_overflow(entry.imbalance()));
        println!(
            "{:<12} {}",
            "VERDICT",
            if balanced { "BALANCED" } else { "UNBALANCED" }
        );
    }

    if strict && !balanced {
        std::process::exit(1);
    }

    Ok(())
}

fn amount_or_overflow(total: Option<Decimal>) -> String {
    total.map_or_else(|| "OVERFLOW".to_string(), |total| total.to_string())
}
