//! Progress report: everything one weekly view needs, computed in one pass
//! over a snapshot of entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::insights::{ProgressAnalyzer, ProgressInsight};
use crate::models::Entry;
use crate::stats::{aggregate, Percentages, WeeklySnapshot};
use crate::trend::{build_trend, TrendSeries};
use crate::week::window_for;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Day the report was computed for
    pub reference: NaiveDate,
    /// Weeks back from the current week for the selected week
    pub weeks_back: u32,
    pub week: WeeklySnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentages: Option<Percentages>,
    pub trend: TrendSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<ProgressInsight>,
    /// Entries in the store, readable or not
    pub total_entries: usize,
}

impl ProgressReport {
    pub fn build(
        entries: &[Entry],
        reference: NaiveDate,
        weeks_back: u32,
        config: &TrackerConfig,
    ) -> Result<Self> {
        let window = window_for(reference, weeks_back, config.week_start)?;
        let week = aggregate(entries, &window);
        let trend = build_trend(
            entries,
            reference,
            config.trend_weeks,
            config.visible_only,
            config.week_start,
        )?;
        let insight = ProgressAnalyzer::with_lookback(config.insight_lookback)?.analyze(&trend);

        Ok(Self {
            reference,
            weeks_back,
            percentages: week.percentages(),
            week,
            trend,
            insight,
            total_entries: entries.len(),
        })
    }
}
