//! CLI error type.

use platform_contracts_canonical::{ValidationError, Violation, WireError};
use platform_contracts_schemas::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid version: {0}")]
    Version(Violation),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Wire(#[from] WireError),
}
