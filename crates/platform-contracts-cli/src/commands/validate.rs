//! Validate command implementation.

use platform_contracts_schemas::ContractKind;
use serde_json::json;

use crate::error::CliError;
use crate::input::read_json;
use crate::output::{format_json, violations_json};

pub fn run(kind: String, input: Option<String>, json_output: bool) -> Result<(), CliError> {
    let kind: ContractKind = kind.parse()?;
    let value = read_json(input)?;

    match kind.validate(value) {
        Ok(()) => {
            if json_output {
                let report = json!({"valid": true, "record": kind.record_name()});
                println!("{}", format_json(&report));
            } else {
                println!("OK {}", kind.record_name());
            }
            Ok(())
        }
        Err(err) => {
            if json_output {
                println!("{}", format_json(&violations_json(&err)));
            } else {
                println!("{}", err);
            }
            std::process::exit(1);
        }
    }
}
