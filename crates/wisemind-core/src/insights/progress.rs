//! Wise Mind progress analyzer
//!
//! Looks at the last few weeks of a trend series and reports whether
//! wise-mind usage is going up, how many wise-mind entries a week there are
//! on average, and whether the latest week hit the milestone.

use crate::error::{Error, Result};
use crate::trend::TrendSeries;

use super::types::{Direction, ProgressInsight};

/// Default number of trailing weeks considered
pub const DEFAULT_LOOKBACK: usize = 3;

/// Wise-mind entries in a week that count as consistent practice
pub const MILESTONE_WISE_COUNT: u32 = 4;

/// Derives progress insights from a trend series
#[derive(Debug, Clone, Copy)]
pub struct ProgressAnalyzer {
    lookback: usize,
}

impl ProgressAnalyzer {
    pub fn new() -> Self {
        Self {
            lookback: DEFAULT_LOOKBACK,
        }
    }

    /// Analyzer over the last `lookback` weeks (must be at least 1)
    pub fn with_lookback(lookback: usize) -> Result<Self> {
        if lookback == 0 {
            return Err(Error::InvalidParameter(
                "insight lookback must be at least one week".into(),
            ));
        }
        Ok(Self { lookback })
    }

    /// Analyze the tail of `series`. An empty series yields no insight.
    pub fn analyze(&self, series: &TrendSeries) -> Option<ProgressInsight> {
        let recent = series.tail(self.lookback);
        let (oldest, newest) = (recent.first()?, recent.last()?);

        let direction = if newest.counts.wise > oldest.counts.wise {
            Direction::Upward
        } else {
            Direction::Stable
        };

        let weeks = recent.len() as u64;
        let wise_sum: u64 = recent.iter().map(|s| u64::from(s.counts.wise)).sum();
        let average = ((2 * wise_sum + weeks) / (2 * weeks)) as u32;

        let insight = ProgressInsight {
            direction,
            average,
            milestone_reached: newest.counts.wise >= MILESTONE_WISE_COUNT,
            weeks_considered: recent.len(),
        };

        tracing::debug!(
            direction = insight.direction.as_str(),
            average = insight.average,
            milestone = insight.milestone_reached,
            weeks = insight.weeks_considered,
            "Progress insight computed"
        );

        Some(insight)
    }
}

impl Default for ProgressAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress insight over the last `lookback` weeks of `series`
pub fn insights(series: &TrendSeries, lookback: usize) -> Result<Option<ProgressInsight>> {
    Ok(ProgressAnalyzer::with_lookback(lookback)?.analyze(series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::InsightStatement;
    use crate::models::Entry;
    use crate::stats::{CategoryCounts, WeeklySnapshot};
    use crate::trend::build_trend;
    use crate::week::{window_for, WeekStart};
    use chrono::{Days, NaiveDate, TimeZone, Utc};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 13).unwrap()
    }

    /// Series built directly from wise counts, oldest first
    fn series_from_wise(wise: &[u32]) -> TrendSeries {
        let snapshots = wise
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let weeks_back = (wise.len() - 1 - i) as u32;
                let window = window_for(reference(), weeks_back, WeekStart::Sunday).unwrap();
                let counts = CategoryCounts {
                    emotion: 1,
                    rational: 0,
                    wise: w,
                };
                WeeklySnapshot {
                    window,
                    counts,
                    total: counts.sum(),
                }
            })
            .collect();
        TrendSeries {
            span_weeks: wise.len(),
            visible_only: false,
            snapshots,
        }
    }

    fn wise_entries_in_week(weeks_back: u32, count: u32, next_id: &mut i64) -> Vec<Entry> {
        let window = window_for(reference(), weeks_back, WeekStart::Sunday).unwrap();
        (0..count)
            .map(|i| {
                *next_id += 1;
                Entry {
                    id: *next_id,
                    date: (window.start + Days::new(u64::from(i % 7))).to_string(),
                    category: "wise".to_string(),
                    situation: "s".to_string(),
                    reflection: "r".to_string(),
                    goal: None,
                    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                }
            })
            .collect()
    }

    #[test]
    fn test_upward_trend_with_milestone() {
        // Weeks 5, 6, 7 (oldest-indexed) of an 8-week series: 3, 2, 5
        let mut id = 0;
        let mut entries = Vec::new();
        entries.extend(wise_entries_in_week(2, 3, &mut id));
        entries.extend(wise_entries_in_week(1, 2, &mut id));
        entries.extend(wise_entries_in_week(0, 5, &mut id));
        entries.extend(wise_entries_in_week(6, 1, &mut id));

        let series = build_trend(&entries, reference(), 8, false, WeekStart::Sunday).unwrap();
        assert_eq!(series.len(), 8);
        assert_eq!(series.snapshots[5].counts.wise, 3);
        assert_eq!(series.snapshots[6].counts.wise, 2);
        assert_eq!(series.snapshots[7].counts.wise, 5);

        let insight = insights(&series, 3).unwrap().unwrap();
        assert_eq!(insight.direction, Direction::Upward);
        assert_eq!(insight.average, 3);
        assert!(insight.milestone_reached);
        assert_eq!(insight.weeks_considered, 3);
    }

    #[test]
    fn test_all_zero_series_is_stable() {
        let series = build_trend(&[], reference(), 8, false, WeekStart::Sunday).unwrap();
        let insight = insights(&series, 3).unwrap().unwrap();
        assert_eq!(insight.direction, Direction::Stable);
        assert_eq!(insight.average, 0);
        assert!(!insight.milestone_reached);
    }

    #[test]
    fn test_empty_series_has_no_insight() {
        let series = build_trend(&[], reference(), 8, true, WeekStart::Sunday).unwrap();
        assert!(series.is_empty());
        assert_eq!(insights(&series, 3).unwrap(), None);
    }

    #[test]
    fn test_decrease_reported_as_stable() {
        let insight = ProgressAnalyzer::new()
            .analyze(&series_from_wise(&[6, 4, 1]))
            .unwrap();
        assert_eq!(insight.direction, Direction::Stable);
        assert!(!insight.milestone_reached);
    }

    #[test]
    fn test_equal_ends_are_stable() {
        let insight = ProgressAnalyzer::new()
            .analyze(&series_from_wise(&[2, 9, 2]))
            .unwrap();
        assert_eq!(insight.direction, Direction::Stable);
        assert_eq!(insight.average, 4);
    }

    #[test]
    fn test_lookback_only_uses_tail() {
        // The early 10 must not affect the result
        let insight = ProgressAnalyzer::new()
            .analyze(&series_from_wise(&[10, 0, 1, 4]))
            .unwrap();
        assert_eq!(insight.direction, Direction::Upward);
        assert_eq!(insight.average, 2); // (0 + 1 + 4) / 3 = 1.67
        assert!(insight.milestone_reached);
    }

    #[test]
    fn test_short_series_uses_all_weeks() {
        let insight = insights(&series_from_wise(&[1, 2]), 3).unwrap().unwrap();
        assert_eq!(insight.weeks_considered, 2);
        assert_eq!(insight.direction, Direction::Upward);
        assert_eq!(insight.average, 2); // 1.5 rounds up
    }

    #[test]
    fn test_single_week_is_stable() {
        let insight = insights(&series_from_wise(&[4]), 3).unwrap().unwrap();
        assert_eq!(insight.direction, Direction::Stable);
        assert_eq!(insight.average, 4);
        assert!(insight.milestone_reached);
    }

    #[test]
    fn test_milestone_threshold() {
        let below = insights(&series_from_wise(&[3]), 1).unwrap().unwrap();
        let at = insights(&series_from_wise(&[4]), 1).unwrap().unwrap();
        assert!(!below.milestone_reached);
        assert!(at.milestone_reached);
    }

    #[test]
    fn test_zero_lookback_rejected() {
        let series = series_from_wise(&[1, 2, 3]);
        assert!(matches!(
            insights(&series, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(ProgressAnalyzer::with_lookback(0).is_err());
    }

    #[test]
    fn test_statements_order() {
        let insight = insights(&series_from_wise(&[1, 5]), 3).unwrap().unwrap();
        assert_eq!(
            insight.statements(),
            vec![
                InsightStatement::Trend(Direction::Upward),
                InsightStatement::AverageWise(3),
                InsightStatement::Milestone { reached: true },
            ]
        );
    }

    #[test]
    fn test_insight_serializes_direction_lowercase() {
        let insight = insights(&series_from_wise(&[1, 5]), 3).unwrap().unwrap();
        let json = serde_json::to_value(insight).unwrap();
        assert_eq!(json["direction"], "upward");
        assert_eq!(json["average"], 3);
        assert_eq!(json["milestone_reached"], true);
    }
}
