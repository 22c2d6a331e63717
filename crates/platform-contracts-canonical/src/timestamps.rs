use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current time in UTC.
pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Creation and update times, both defaulting to now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// When the record was created.
    #[serde(default = "utc_now")]
    pub created_at: DateTime<Utc>,
    /// When the record was last replaced.
    #[serde(default = "utc_now")]
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Both times set to the same instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            created_at: instant,
            updated_at: instant,
        }
    }

    /// A copy whose `updated_at` is `instant`.
    pub fn updated(&self, instant: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            updated_at: instant,
        }
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self::at(utc_now())
    }
}
