//! Wise Mind Core Library
//!
//! Temporal aggregation and trend insights for the Wise Mind practice tracker:
//! - Calendar week windows with a configurable first weekday
//! - Weekly mind-state counts and percentages
//! - Multi-week trend series
//! - Progress insights from the tail of a trend
//! - Entry storage (in-memory and JSON file)
//! - Tracker configuration

pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod report;
pub mod stats;
pub mod store;
pub mod trend;
pub mod week;

pub use config::TrackerConfig;
pub use error::{Error, Result};
pub use insights::{
    insights, Direction, InsightStatement, ProgressAnalyzer, ProgressInsight, DEFAULT_LOOKBACK,
    MILESTONE_WISE_COUNT,
};
pub use models::{Category, Entry, NewEntry};
pub use report::ProgressReport;
pub use stats::{aggregate, CategoryCounts, Percentages, WeeklySnapshot};
pub use store::{EntryStore, JsonFileStore, MemoryStore};
pub use trend::{build_trend, TrendSeries, DEFAULT_TREND_WEEKS};
pub use week::{reference_day, window_for, WeekStart, WeekWindow};
