//! Domain models for the Wise Mind tracker

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Storage format for entry days
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The state of mind an entry was logged under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Emotion,
    Rational,
    Wise,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emotion => "emotion",
            Self::Rational => "rational",
            Self::Wise => "wise",
        }
    }

    /// Display label ("Wise Mind", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Emotion => "Emotion Mind",
            Self::Rational => "Rational Mind",
            Self::Wise => "Wise Mind",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Self::Emotion, Self::Rational, Self::Wise]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emotion" => Ok(Self::Emotion),
            "rational" => Ok(Self::Rational),
            "wise" => Ok(Self::Wise),
            _ => Err(format!(
                "Unknown mind state: {} (valid: emotion, rational, wise)",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted reflection entry
///
/// `date` and `category` are kept exactly as they were stored. Records
/// written by other tools (or edited by hand) may hold values that don't
/// parse; use [`Entry::day`] and [`Entry::category`] to read them. A
/// missing, `null` or non-string value is read as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(
        rename = "mind_state",
        alias = "mindState",
        alias = "category",
        default,
        deserialize_with = "lenient_string"
    )]
    pub category: String,
    pub situation: String,
    pub reflection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Build a stored entry from validated input
    pub fn from_new(id: i64, new: NewEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            date: new.date.format(DATE_FORMAT).to_string(),
            category: new.category.as_str().to_string(),
            situation: new.situation.trim().to_string(),
            reflection: new.reflection.trim().to_string(),
            goal: new
                .goal
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty()),
            created_at,
        }
    }

    /// Calendar day the entry belongs to, if the stored date is well-formed
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    /// Mind state of the entry, if the stored value is recognized
    pub fn category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}

/// Read any JSON value, keeping it only if it is a string
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Parse a stored entry day.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp (its UTC day).
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

/// Input for creating a new entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub category: Category,
    pub situation: String,
    pub reflection: String,
    pub goal: Option<String>,
}

impl NewEntry {
    /// Check required fields before the entry is persisted
    pub fn validate(&self) -> Result<()> {
        if self.situation.trim().is_empty() {
            return Err(Error::Validation("situation must not be empty".into()));
        }
        if self.reflection.trim().is_empty() {
            return Err(Error::Validation("reflection must not be empty".into()));
        }
        Ok(())
    }
}
