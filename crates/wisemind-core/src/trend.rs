//! Multi-week trend series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Entry;
use crate::stats::{aggregate, WeeklySnapshot};
use crate::week::{window_for, WeekStart};

/// Default number of weeks in a trend series
pub const DEFAULT_TREND_WEEKS: usize = 8;

/// Weekly snapshots, oldest first
///
/// With `visible_only` set, weeks without entries were dropped, so the week
/// axis may have gaps. Build with `visible_only = false` when every week of
/// the span is needed (e.g. for averages comparable across series).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub span_weeks: usize,
    pub visible_only: bool,
    pub snapshots: Vec<WeeklySnapshot>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The last `n` snapshots (all of them if there are fewer)
    pub fn tail(&self, n: usize) -> &[WeeklySnapshot] {
        &self.snapshots[self.snapshots.len().saturating_sub(n)..]
    }
}

/// Build the trend series for the `span_weeks` most recent weeks up to and
/// including the week containing `reference`.
pub fn build_trend(
    entries: &[Entry],
    reference: NaiveDate,
    span_weeks: usize,
    visible_only: bool,
    week_start: WeekStart,
) -> Result<TrendSeries> {
    if span_weeks == 0 {
        return Err(Error::InvalidParameter(
            "trend span must be at least one week".into(),
        ));
    }
    let span = u32::try_from(span_weeks)
        .map_err(|_| Error::InvalidParameter(format!("trend span too large: {}", span_weeks)))?;

    // Fail on an unrepresentable oldest week before doing any work
    window_for(reference, span - 1, week_start)?;

    let mut snapshots = Vec::new();
    for weeks_back in (0..span).rev() {
        let window = window_for(reference, weeks_back, week_start)?;
        let snapshot = aggregate(entries, &window);
        if visible_only && snapshot.is_empty() {
            continue;
        }
        snapshots.push(snapshot);
    }

    tracing::debug!(
        span_weeks,
        visible_only,
        weeks = snapshots.len(),
        "Built trend series"
    );

    Ok(TrendSeries {
        span_weeks,
        visible_only,
        snapshots,
    })
}
