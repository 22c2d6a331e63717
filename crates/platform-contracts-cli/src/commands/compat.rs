//! Compat command implementation.

use platform_contracts_canonical::SchemaVersion;

use crate::error::CliError;

pub fn run(version: String, other: String) -> Result<(), CliError> {
    let version = SchemaVersion::parse(version).map_err(CliError::Version)?;
    if version.is_compatible(&other) {
        println!("{} is compatible with {}", other, version);
    } else {
        println!(
            "{} is not compatible with {} (major {} expected)",
            other,
            version,
            version.major()
        );
    }
    Ok(())
}
