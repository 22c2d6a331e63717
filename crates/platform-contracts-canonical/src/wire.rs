use canonical_json::to_string;
use serde_json::Value;
use tracing::debug;

use crate::contract::Contract;

/// Error returned when a record cannot be encoded.
#[derive(thiserror::Error, Debug)]
pub enum WireError {
    /// The record could not be converted to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The JSON could not be brought into canonical form.
    #[error("canonicalization failed: {0}")]
    Canonicalization(String),
}

/// How records are written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireOptions {
    /// Emit aliased fields under their alias (`_meta`) rather than their name (`meta`).
    pub by_alias: bool,
    /// Emit RFC 8785 canonical JSON (sorted keys, no insignificant whitespace).
    pub canonical: bool,
    /// Indent output. Ignored when `canonical` is set.
    pub pretty: bool,
}

impl Default for WireOptions {
    fn default() -> Self {
        Self {
            by_alias: true,
            canonical: true,
            pretty: false,
        }
    }
}

/// Encoder that turns validated records into wire bytes.
#[derive(Debug, Clone, Default)]
pub struct WireEncoder {
    options: WireOptions,
}

impl WireEncoder {
    /// Creates an encoder with the given options.
    pub fn new(options: WireOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> WireOptions {
        self.options
    }

    /// Converts a record to a JSON value using the configured key names.
    pub fn to_value<C: Contract>(&self, record: &C) -> Result<Value, WireError> {
        let mut value = serde_json::to_value(record)?;
        if !self.options.by_alias {
            rename_aliases(&mut value, C::ALIASES);
        }
        Ok(value)
    }

    /// Encodes a record to bytes.
    pub fn encode<C: Contract>(&self, record: &C) -> Result<Vec<u8>, WireError> {
        let value = self.to_value(record)?;
        let bytes = self.encode_value(&value)?;
        debug!(
            record = C::NAME,
            bytes = bytes.len(),
            canonical = self.options.canonical,
            "encoded contract"
        );
        Ok(bytes)
    }

    /// Encodes an already-converted JSON value to bytes.
    pub fn encode_value(&self, value: &Value) -> Result<Vec<u8>, WireError> {
        let text = if self.options.canonical {
            to_string(value).map_err(|err| WireError::Canonicalization(err.to_string()))?
        } else if self.options.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text.into_bytes())
    }
}

/// Moves each aliased key back to its field name.
fn rename_aliases(value: &mut Value, aliases: &[(&str, &str)]) {
    if let Value::Object(map) = value {
        for (field, alias) in aliases {
            if let Some(inner) = map.remove(*alias) {
                map.insert((*field).to_string(), inner);
            }
        }
    }
}
