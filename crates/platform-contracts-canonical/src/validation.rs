use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// A single constraint failure, located by the JSON path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A required field was absent.
    #[error("{path}: field required")]
    Missing {
        /// Location of the missing field.
        path: String,
    },
    /// A string did not have the required shape.
    #[error("{path}: {message}")]
    PatternMismatch {
        /// Location of the field.
        path: String,
        /// Offending value.
        value: String,
        /// Human-readable description of the expected shape.
        message: String,
    },
    /// A numeric value fell outside its closed range.
    #[error("{path}: {value} is outside [{min}, {max}]")]
    OutOfBounds {
        /// Location of the field.
        path: String,
        /// Offending value.
        value: String,
        /// Inclusive lower bound.
        min: String,
        /// Inclusive upper bound.
        max: String,
    },
    /// A string exceeded its maximum length in characters.
    #[error("{path}: {length} characters exceeds the limit of {max}")]
    TooLong {
        /// Location of the field.
        path: String,
        /// Observed length in characters.
        length: usize,
        /// Maximum allowed length in characters.
        max: usize,
    },
    /// A token is not part of a closed vocabulary.
    #[error("{path}: '{value}' is not one of {expected}")]
    UnknownVariant {
        /// Vocabulary or field the token was parsed for.
        path: String,
        /// Offending token.
        value: String,
        /// Comma-separated list of accepted tokens.
        expected: String,
    },
    /// The value had the wrong JSON type or could not be decoded.
    #[error("{path}: {message}")]
    Malformed {
        /// Location of the field.
        path: String,
        /// Decoder message.
        message: String,
    },
}

impl Violation {
    /// Location of the field this violation refers to.
    pub fn path(&self) -> &str {
        match self {
            Violation::Missing { path }
            | Violation::PatternMismatch { path, .. }
            | Violation::OutOfBounds { path, .. }
            | Violation::TooLong { path, .. }
            | Violation::UnknownVariant { path, .. }
            | Violation::Malformed { path, .. } => path,
        }
    }

    /// Returns the same violation located at `path`.
    pub fn relocated(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        match &mut self {
            Violation::Missing { path }
            | Violation::PatternMismatch { path, .. }
            | Violation::OutOfBounds { path, .. }
            | Violation::TooLong { path, .. }
            | Violation::UnknownVariant { path, .. }
            | Violation::Malformed { path, .. } => *path = location,
        }
        self
    }

    pub(crate) fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Violation::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Every violation found while constructing one record.
///
/// A record either passes all of its checks or is never constructed; this
/// error reports the complete set of failures from a single attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    record: &'static str,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Creates an error for `record` from a non-empty set of violations.
    pub fn new(record: &'static str, violations: Vec<Violation>) -> Self {
        Self { record, violations }
    }

    /// Creates an error carrying a single violation.
    pub fn single(record: &'static str, violation: Violation) -> Self {
        Self::new(record, vec![violation])
    }

    /// Name of the record that failed validation.
    pub fn record(&self) -> &'static str {
        self.record
    }

    /// All violations, in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Paths of all offending fields.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(Violation::path)
    }

    /// True when any violation refers to `path`.
    pub fn mentions(&self, path: &str) -> bool {
        self.paths().any(|p| p == path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(
            f,
            "{} validation error{} for {}",
            count,
            if count == 1 { "" } else { "s" },
            self.record
        )?;
        for violation in &self.violations {
            write!(f, "\n  {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// JSON path of a field being checked.
#[derive(Debug, Clone, Default)]
pub(crate) struct Path {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Field(String),
    Index(usize),
}

impl Path {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    pub(crate) fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Field(field.to_string()));
        Self { segments }
    }

    pub(crate) fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "root");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{}", name)?,
                Segment::Field(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// A value whose only constructors enforce a field-level constraint.
pub trait Constrained: Sized {
    /// Parses the raw JSON value, reporting a violation located at the field name.
    fn from_json(value: &Value) -> Result<Self, Violation>;
}

// Plain field types are checked with the same decoder the typed phase uses,
// so a value that passes here cannot fail there.
macro_rules! decoded_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Constrained for $ty {
                fn from_json(value: &Value) -> Result<Self, Violation> {
                    <$ty as Deserialize>::deserialize(value)
                        .map_err(|err| Violation::malformed("", err.to_string()))
                }
            }
        )+
    };
}

decoded_field!(String, bool, i64, Decimal, NaiveDate, DateTime<Utc>);

/// Walks the raw JSON of a record and collects every constraint failure.
///
/// Records describe their required fields and constrained values against a
/// `FieldCheck`; nested records are checked under their own path so that a
/// single report covers the whole payload.
#[derive(Debug)]
pub struct FieldCheck<'v> {
    path: Path,
    object: Option<&'v Map<String, Value>>,
    violations: Vec<Violation>,
}

impl<'v> FieldCheck<'v> {
    /// Starts a check at the root of `value`, which must be a JSON object.
    pub fn root(value: &'v Value) -> Self {
        Self::at(Path::root(), value)
    }

    fn at(path: Path, value: &'v Value) -> Self {
        let mut check = Self {
            path,
            object: None,
            violations: Vec::new(),
        };
        match value {
            Value::Object(map) => check.object = Some(map),
            _ => check.violations.push(Violation::malformed(
                check.path.to_string(),
                "expected a JSON object",
            )),
        }
        check
    }

    fn get(&self, key: &str) -> Option<&'v Value> {
        self.object.and_then(|map| map.get(key))
    }

    fn location(&self, key: &str) -> String {
        self.path.push_field(key).to_string()
    }

    /// Reports every key in `keys` that is absent or explicitly `null`.
    pub fn required(&mut self, keys: &[&str]) -> &mut Self {
        if self.object.is_none() {
            return self;
        }
        for key in keys {
            match self.get(key) {
                None => {
                    let path = self.location(key);
                    self.violations.push(Violation::Missing { path });
                }
                Some(Value::Null) => {
                    let path = self.location(key);
                    self.violations
                        .push(Violation::malformed(path, "field required, got null"));
                }
                Some(_) => {}
            }
        }
        self
    }

    /// Parses each of `keys` as `T` when present and non-null.
    pub fn typed<T: Constrained>(&mut self, keys: &[&str]) -> &mut Self {
        for key in keys {
            self.constrained::<T>(key);
        }
        self
    }

    /// Parses `key` as `T` when present and non-null.
    pub fn constrained<T: Constrained>(&mut self, key: &str) -> &mut Self {
        if let Some(value) = self.get(key).filter(|v| !v.is_null()) {
            if let Err(violation) = T::from_json(value) {
                let path = self.location(key);
                self.violations.push(violation.relocated(path));
            }
        }
        self
    }

    /// Checks the object under `key` as a nested record.
    pub fn nested<F>(&mut self, key: &str, check: F) -> &mut Self
    where
        F: Fn(&mut FieldCheck<'v>),
    {
        if let Some(value) = self.get(key).filter(|v| !v.is_null()) {
            let mut child = FieldCheck::at(self.path.push_field(key), value);
            check(&mut child);
            self.violations.append(&mut child.violations);
        }
        self
    }

    /// Checks every element of the array under `key` as a nested record.
    pub fn each<F>(&mut self, key: &str, check: F) -> &mut Self
    where
        F: Fn(&mut FieldCheck<'v>),
    {
        match self.get(key) {
            Some(Value::Array(items)) => {
                let base = self.path.push_field(key);
                for (index, item) in items.iter().enumerate() {
                    let mut child = FieldCheck::at(base.push_index(index), item);
                    check(&mut child);
                    self.violations.append(&mut child.violations);
                }
            }
            Some(Value::Null) | None => {}
            Some(_) => {
                let path = self.location(key);
                self.violations
                    .push(Violation::malformed(path, "expected a JSON array"));
            }
        }
        self
    }

    /// Violations collected so far.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Fails with every collected violation, if any.
    pub fn finish(self, record: &'static str) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(record, self.violations))
        }
    }
}
