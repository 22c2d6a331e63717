use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::validation::{FieldCheck, ValidationError, Violation};

/// A record exchanged between services.
///
/// Decoding goes through two phases: [`Contract::check`] walks the raw JSON
/// and reports every missing field and constraint failure at once, then the
/// typed decode builds the record. A record that fails either phase is never
/// constructed.
pub trait Contract: Serialize + DeserializeOwned {
    /// Record name used in error reports.
    const NAME: &'static str;

    /// `(field, wire alias)` pairs. The alias is the emitted key; both are
    /// accepted on input.
    const ALIASES: &'static [(&'static str, &'static str)] = &[];

    /// Declares the record's required fields and constrained values.
    fn check(fields: &mut FieldCheck<'_>);

    /// Validates and decodes a parsed JSON value.
    fn from_value(value: Value) -> Result<Self, ValidationError> {
        let mut fields = FieldCheck::root(&value);
        Self::check(&mut fields);
        if let Err(err) = fields.finish(Self::NAME) {
            for violation in err.violations() {
                trace!(record = Self::NAME, %violation, "constraint failed");
            }
            debug!(
                record = Self::NAME,
                violations = err.violations().len(),
                "contract rejected"
            );
            return Err(err);
        }
        serde_json::from_value(value).map_err(|err| {
            debug!(record = Self::NAME, error = %err, "contract decode failed");
            ValidationError::single(Self::NAME, Violation::malformed("root", err.to_string()))
        })
    }

    /// Validates and decodes JSON text.
    fn from_json(input: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(input).map_err(|err| {
            ValidationError::single(Self::NAME, Violation::malformed("root", err.to_string()))
        })?;
        Self::from_value(value)
    }
}
