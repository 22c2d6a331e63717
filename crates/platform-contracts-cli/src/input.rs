//! Payload input from a file or stdin.

use serde_json::Value;
use std::io::{self, Read};
use tracing::debug;

use crate::error::CliError;

/// Reads JSON from `path`, or from stdin when no path is given.
pub fn read_json(path: Option<String>) -> Result<Value, CliError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Stdin)?;
            buffer
        }
    };
    debug!(bytes = text.len(), "read input");
    Ok(serde_json::from_str(&text)?)
}
