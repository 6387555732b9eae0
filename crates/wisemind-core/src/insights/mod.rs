//! Progress insights
//!
//! Derives short, structured statements about Wise Mind practice from the
//! tail of a trend series. Insights are facts, not display text: wording is
//! left to the presentation layer.
//!
//! ## Statements
//!
//! - **Direction** - whether wise-mind entries are trending upward or stable
//! - **Average** - mean wise-mind entries per week over the lookback window
//! - **Milestone** - whether the latest week reached the consistency target
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wisemind_core::insights::ProgressAnalyzer;
//!
//! let series = build_trend(&entries, today, 8, true, WeekStart::Sunday)?;
//! if let Some(insight) = ProgressAnalyzer::new().analyze(&series) {
//!     for statement in insight.statements() { /* render */ }
//! }
//! ```

pub mod progress;
pub mod types;

pub use progress::{insights, ProgressAnalyzer, DEFAULT_LOOKBACK, MILESTONE_WISE_COUNT};
pub use types::{Direction, InsightStatement, ProgressInsight};
