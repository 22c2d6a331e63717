use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::validation::{Constrained, Violation};

macro_rules! bounded_string {
    ($name:ident, $doc:expr, $field:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Maximum length in characters.
            pub const MAX_CHARS: usize = $max;

            /// Parses a string no longer than [`Self::MAX_CHARS`] characters.
            pub fn parse(value: impl Into<String>) -> Result<Self, Violation> {
                let value = value.into();
                let length = value.chars().count();
                if length > $max {
                    return Err(Violation::TooLong {
                        path: $field.to_string(),
                        length,
                        max: $max,
                    });
                }
                Ok(Self(value))
            }

            /// Borrows the underlying text.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = Violation;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Constrained for $name {
            fn from_json(value: &Value) -> Result<Self, Violation> {
                match value {
                    Value::String(s) => Self::parse(s.as_str()),
                    _ => Err(Violation::Malformed {
                        path: $field.to_string(),
                        message: "expected a string".to_string(),
                    }),
                }
            }
        }
    };
}

bounded_string!(
    CurrencyCode,
    "ISO 4217 currency code, at most 3 characters (default `USD`).",
    "currency",
    3
);
bounded_string!(
    ButtonTitle,
    "Title of an interactive message button, at most 20 characters.",
    "title",
    20
);

impl Default for CurrencyCode {
    fn default() -> Self {
        Self("USD".to_string())
    }
}

/// Classifier confidence in the closed interval `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Lowest accepted score.
    pub const MIN: f64 = 0.0;
    /// Highest accepted score.
    pub const MAX: f64 = 1.0;

    /// Accepts scores in `[0.0, 1.0]`; NaN is rejected.
    pub fn new(value: f64) -> Result<Self, Violation> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Violation::OutOfBounds {
                path: "confidence".to_string(),
                value: value.to_string(),
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// The score.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = Violation;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(value: Confidence) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Confidence {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl Constrained for Confidence {
    fn from_json(value: &Value) -> Result<Self, Violation> {
        match value.as_f64() {
            Some(score) => Self::new(score),
            None => Err(Violation::Malformed {
                path: "confidence".to_string(),
                message: "expected a number".to_string(),
            }),
        }
    }
}

/// Calendar month, `1` (January) through `12` (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MonthOfYear(u8);

impl MonthOfYear {
    /// First month.
    pub const MIN: i64 = 1;
    /// Last month.
    pub const MAX: i64 = 12;

    /// Accepts `1..=12`.
    pub fn new(value: i64) -> Result<Self, Violation> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Violation::OutOfBounds {
                path: "as_of_month".to_string(),
                value: value.to_string(),
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
            });
        }
        Ok(Self(value as u8))
    }

    /// The month number.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for MonthOfYear {
    type Error = Violation;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MonthOfYear> for u8 {
    fn from(value: MonthOfYear) -> Self {
        value.0
    }
}

impl PartialEq<u8> for MonthOfYear {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

impl Constrained for MonthOfYear {
    fn from_json(value: &Value) -> Result<Self, Violation> {
        match value.as_i64() {
            Some(month) => Self::new(month),
            None => Err(Violation::Malformed {
                path: "as_of_month".to_string(),
                message: "expected an integer".to_string(),
            }),
        }
    }
}
