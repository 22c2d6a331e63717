use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::contract::Contract;
use crate::validation::{Constrained, FieldCheck, Violation};

const DEFAULT_VERSION: &str = "1.0";

/// A `major.minor` version string, stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemaVersion(String);

impl SchemaVersion {
    /// Parses a version made of two dot-separated runs of ASCII digits.
    pub fn parse(value: impl Into<String>) -> Result<Self, Violation> {
        let value = value.into();
        let re = Regex::new(r"^[0-9]+\.[0-9]+$").expect("invalid regex");
        if !re.is_match(&value) {
            return Err(Violation::PatternMismatch {
                path: "schema_version".to_string(),
                message: format!(
                    "Invalid schema version format: {}. Expected 'major.minor'.",
                    value
                ),
                value,
            });
        }
        Ok(Self(value))
    }

    /// The text before the first `.`.
    pub fn major(&self) -> &str {
        major_segment(&self.0)
    }

    /// The text after the first `.`.
    pub fn minor(&self) -> &str {
        self.0.split_once('.').map(|(_, minor)| minor).unwrap_or("")
    }

    /// True when `other` carries the same major segment.
    ///
    /// Segments are compared as text, so `"01.0"` is not compatible with
    /// `"1.0"`. `other` is not validated.
    pub fn is_compatible(&self, other: &str) -> bool {
        self.major() == major_segment(other)
    }

    /// Borrows the version text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn major_segment(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self(DEFAULT_VERSION.to_string())
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = Violation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SchemaVersion> for String {
    fn from(value: SchemaVersion) -> Self {
        value.0
    }
}

impl AsRef<str> for SchemaVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SchemaVersion {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SchemaVersion {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Constrained for SchemaVersion {
    fn from_json(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::String(s) => Self::parse(s.as_str()),
            _ => Err(Violation::Malformed {
                path: "schema_version".to_string(),
                message: "expected a string".to_string(),
            }),
        }
    }
}

/// Records tagged with a schema version.
pub trait Versioned {
    /// The record's version tag.
    fn schema_version(&self) -> &SchemaVersion;

    /// True when `other_version` shares this record's major version.
    fn is_compatible(&self, other_version: &str) -> bool {
        self.schema_version().is_compatible(other_version)
    }
}

/// A record carrying nothing but its version tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedSchema {
    /// Version tag, default `"1.0"`.
    #[serde(default)]
    pub schema_version: SchemaVersion,
}

impl VersionedSchema {
    /// Creates a record with a validated version.
    pub fn new(schema_version: impl Into<String>) -> Result<Self, Violation> {
        Ok(Self {
            schema_version: SchemaVersion::parse(schema_version)?,
        })
    }
}

impl Versioned for VersionedSchema {
    fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }
}

impl Contract for VersionedSchema {
    const NAME: &'static str = "VersionedSchema";

    fn check(fields: &mut FieldCheck<'_>) {
        fields.constrained::<SchemaVersion>("schema_version");
    }
}
