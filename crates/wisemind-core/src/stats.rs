//! Weekly statistics
//!
//! Counts entries per mind state inside one week window. Entries whose stored
//! date or mind state can't be read are skipped, so a single bad record never
//! aborts a pass.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Entry};
use crate::week::WeekWindow;

/// Per-category entry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub emotion: u32,
    pub rational: u32,
    pub wise: u32,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Emotion => self.emotion,
            Category::Rational => self.rational,
            Category::Wise => self.wise,
        }
    }

    fn increment(&mut self, category: Category) {
        match category {
            Category::Emotion => self.emotion += 1,
            Category::Rational => self.rational += 1,
            Category::Wise => self.wise += 1,
        }
    }

    pub fn sum(&self) -> u32 {
        self.emotion + self.rational + self.wise
    }
}

/// Whole-number share of each category, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentages {
    pub emotion: u32,
    pub rational: u32,
    pub wise: u32,
}

/// Counts for one week window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySnapshot {
    pub window: WeekWindow,
    pub counts: CategoryCounts,
    /// Always `counts.emotion + counts.rational + counts.wise`
    pub total: u32,
}

impl WeeklySnapshot {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Per-category percentages, `None` for an empty week
    pub fn percentages(&self) -> Option<Percentages> {
        if self.total == 0 {
            return None;
        }
        Some(Percentages {
            emotion: percent_of(self.counts.emotion, self.total),
            rational: percent_of(self.counts.rational, self.total),
            wise: percent_of(self.counts.wise, self.total),
        })
    }

    /// Categories with at least one entry, wise first
    pub fn distribution(&self) -> Vec<(Category, u32)> {
        [Category::Wise, Category::Emotion, Category::Rational]
            .into_iter()
            .map(|c| (c, self.counts.get(c)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

/// `round(100 * count / total)`, halves rounded up
fn percent_of(count: u32, total: u32) -> u32 {
    let (count, total) = (u64::from(count), u64::from(total));
    ((200 * count + total) / (2 * total)) as u32
}

/// Count the entries that fall inside `window`
pub fn aggregate(entries: &[Entry], window: &WeekWindow) -> WeeklySnapshot {
    let mut counts = CategoryCounts::default();
    let mut skipped = 0usize;

    for entry in entries {
        let (Some(day), Some(category)) = (entry.day(), entry.category()) else {
            tracing::trace!(id = entry.id, date = %entry.date, mind_state = %entry.category, "Skipping unreadable entry");
            skipped += 1;
            continue;
        };
        if window.contains(day) {
            counts.increment(category);
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, window = %window, "Excluded unreadable entries from week");
    }

    WeeklySnapshot {
        window: *window,
        counts,
        total: counts.sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::week::{window_for, WeekStart};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(id: i64, date: &str, category: &str) -> Entry {
        Entry {
            id,
            date: date.to_string(),
            category: category.to_string(),
            situation: "situation".to_string(),
            reflection: "reflection".to_string(),
            goal: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn current_window() -> WeekWindow {
        window_for(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            0,
            WeekStart::Sunday,
        )
        .unwrap()
    }

    #[test]
    fn test_aggregate_counts_window_bounds_inclusive() {
        let entries = vec![
            entry(1, "2024-01-08", "wise"),
            entry(2, "2024-01-07", "emotion"),
        ];
        let window = current_window();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());

        let snapshot = aggregate(&entries, &window);
        assert_eq!(snapshot.counts.wise, 1);
        assert_eq!(snapshot.counts.emotion, 1);
        assert_eq!(snapshot.counts.rational, 0);
        assert_eq!(snapshot.total, 2);
    }

    #[test]
    fn test_aggregate_excludes_outside_window() {
        let entries = vec![
            entry(1, "2024-01-06", "wise"),
            entry(2, "2024-01-13", "rational"),
            entry(3, "2024-01-14", "wise"),
        ];
        let snapshot = aggregate(&entries, &current_window());
        assert_eq!(snapshot.counts.rational, 1);
        assert_eq!(snapshot.total, 1);
    }

    #[test]
    fn test_aggregate_skips_unreadable_entries() {
        let entries = vec![
            entry(1, "2024-01-08", "wise"),
            entry(2, "not a date", "wise"),
            entry(3, "2024-01-09", "sleepy"),
            entry(4, "", ""),
            entry(5, "2024-01-09T12:00:00Z", "emotion"),
        ];
        let snapshot = aggregate(&entries, &current_window());
        assert_eq!(snapshot.counts.wise, 1);
        assert_eq!(snapshot.counts.emotion, 1);
        assert_eq!(snapshot.total, 2);
        assert_eq!(snapshot.total, snapshot.counts.sum());
    }

    #[test]
    fn test_aggregate_empty_entries() {
        let snapshot = aggregate(&[], &current_window());
        assert_eq!(snapshot.counts, CategoryCounts::default());
        assert_eq!(snapshot.total, 0);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.percentages(), None);
        assert!(snapshot.distribution().is_empty());
    }

    #[test]
    fn test_total_matches_sum_of_counts() {
        let states = ["wise", "emotion", "rational", "bogus"];
        let entries: Vec<Entry> = (0..40)
            .map(|i| {
                let day = 1 + (i % 20) as u32;
                entry(
                    i,
                    &format!("2024-01-{:02}", day),
                    states[(i as usize) % states.len()],
                )
            })
            .collect();
        for weeks_back in 0..4 {
            let window = window_for(
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
                weeks_back,
                WeekStart::Sunday,
            )
            .unwrap();
            let snapshot = aggregate(&entries, &window);
            assert_eq!(
                snapshot.total,
                snapshot.counts.emotion + snapshot.counts.rational + snapshot.counts.wise
            );
        }
    }

    #[test]
    fn test_percentages_round_half_up() {
        let entries = vec![
            entry(1, "2024-01-08", "wise"),
            entry(2, "2024-01-08", "wise"),
            entry(3, "2024-01-09", "emotion"),
        ];
        let percentages = aggregate(&entries, &current_window()).percentages().unwrap();
        assert_eq!(percentages.wise, 67);
        assert_eq!(percentages.emotion, 33);
        assert_eq!(percentages.rational, 0);

        let entries = vec![
            entry(1, "2024-01-08", "wise"),
            entry(2, "2024-01-08", "emotion"),
            entry(3, "2024-01-08", "emotion"),
            entry(4, "2024-01-08", "emotion"),
            entry(5, "2024-01-08", "emotion"),
            entry(6, "2024-01-08", "emotion"),
            entry(7, "2024-01-08", "rational"),
            entry(8, "2024-01-08", "rational"),
        ];
        // 1/8 = 12.5% -> 13, 5/8 = 62.5% -> 63, 2/8 = 25%
        let percentages = aggregate(&entries, &current_window()).percentages().unwrap();
        assert_eq!(percentages.wise, 13);
        assert_eq!(percentages.emotion, 63);
        assert_eq!(percentages.rational, 25);
    }

    #[test]
    fn test_distribution_skips_zero_categories() {
        let entries = vec![
            entry(1, "2024-01-08", "rational"),
            entry(2, "2024-01-09", "wise"),
            entry(3, "2024-01-10", "wise"),
        ];
        let snapshot = aggregate(&entries, &current_window());
        assert_eq!(
            snapshot.distribution(),
            vec![(Category::Wise, 2), (Category::Rational, 1)]
        );
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let entries = vec![
            entry(1, "2024-01-08", "wise"),
            entry(2, "2024-01-09", "emotion"),
        ];
        let window = current_window();
        assert_eq!(aggregate(&entries, &window), aggregate(&entries, &window));
    }
}
