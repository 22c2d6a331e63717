//! Catalog command implementation.

use clap::ValueEnum;
use platform_contracts_schemas::accounting::KNOWN_RISK_CODES;
use platform_contracts_schemas::events::KNOWN_EVENT_TYPES;
use platform_contracts_schemas::ContractKind;
use serde_json::{json, Value};

use crate::error::CliError;
use crate::output::{format_json, print_table};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Catalog {
    /// Risk codes attached to classifications
    RiskCodes,
    /// Platform event types
    EventTypes,
    /// Contract kinds accepted by `validate` and `canonicalize`
    Kinds,
}

pub fn run(catalog: Catalog, json_output: bool) -> Result<(), CliError> {
    match catalog {
        Catalog::RiskCodes => {
            if json_output {
                let codes: Value = KNOWN_RISK_CODES
                    .iter()
                    .map(|(code, description)| json!({"code": code, "description": description}))
                    .collect();
                println!("{}", format_json(&codes));
            } else {
                let rows: Vec<(String, String)> = KNOWN_RISK_CODES
                    .iter()
                    .map(|(code, description)| (code.to_string(), description.to_string()))
                    .collect();
                print_table(("CODE", "DESCRIPTION"), 20, &rows);
            }
        }
        Catalog::EventTypes => {
            if json_output {
                println!("{}", format_json(&json!(KNOWN_EVENT_TYPES)));
            } else {
                for event_type in KNOWN_EVENT_TYPES {
                    println!("{}", event_type);
                }
            }
        }
        Catalog::Kinds => {
            if json_output {
                let kinds: Value = ContractKind::ALL
                    .iter()
                    .map(|kind| json!({"kind": kind.as_str(), "record": kind.record_name()}))
                    .collect();
                println!("{}", format_json(&kinds));
            } else {
                let rows: Vec<(String, String)> = ContractKind::ALL
                    .iter()
                    .map(|kind| (kind.as_str().to_string(), kind.record_name().to_string()))
                    .collect();
                print_table(("KIND", "RECORD"), 32, &rows);
            }
        }
    }
    Ok(())
}
