//! Canonicalize command implementation.

use platform_contracts_canonical::{WireEncoder, WireOptions};
use platform_contracts_schemas::ContractKind;

use crate::error::CliError;
use crate::input::read_json;

pub fn run(
    kind: String,
    input: Option<String>,
    by_name: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let kind: ContractKind = kind.parse()?;
    let value = read_json(input)?;

    let encoder = WireEncoder::new(WireOptions {
        by_alias: !by_name,
        canonical: !pretty,
        pretty,
    });
    let bytes = kind.encode(value, &encoder)?;

    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
