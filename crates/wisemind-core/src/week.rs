//! Calendar week windows
//!
//! A week window is a fixed 7-day span of calendar days, aligned to a
//! configurable first weekday. Window 0 is the week containing the reference
//! day; window `n` is `n` whole weeks before it.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// First day of a calendar week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            _ => Err(format!("Unknown week start: {} (valid: sunday, monday)", s)),
        }
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An inclusive 7-day span: `end == start + 6 days`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Whether `day` falls inside the window (both ends inclusive)
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Short axis label for the week, e.g. "1/7"
    pub fn label(&self) -> String {
        format!("{}/{}", self.start.month(), self.start.day())
    }
}

impl std::fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Reduce a reference instant to the calendar day it falls on in its own
/// timezone. Time-of-day is discarded.
pub fn reference_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

/// Compute the week window `weeks_back` weeks before the week containing
/// `reference`.
pub fn window_for(
    reference: NaiveDate,
    weeks_back: u32,
    week_start: WeekStart,
) -> Result<WeekWindow> {
    let into_week = (reference.weekday().num_days_from_sunday() + 7
        - week_start.weekday().num_days_from_sunday())
        % 7;

    let start = reference
        .checked_sub_days(Days::new(u64::from(into_week)))
        .and_then(|current| current.checked_sub_days(Days::new(u64::from(weeks_back) * 7)))
        .ok_or_else(|| {
            Error::OutOfRange(format!("{} weeks before {}", weeks_back, reference))
        })?;
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| Error::OutOfRange(format!("week starting {}", start)))?;

    Ok(WeekWindow { start, end })
}
