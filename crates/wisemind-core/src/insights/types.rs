//! Core types for progress insights

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of wise-mind usage over the lookback window
///
/// There is deliberately no "downward": a decrease is reported as `Stable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Latest week has more wise-mind entries than the oldest week considered
    Upward,
    /// Anything else
    Stable,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Upward => "upward",
            Direction::Stable => "stable",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Progress facts derived from the tail of a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressInsight {
    pub direction: Direction,
    /// Mean wise-mind entries per week, rounded to the nearest integer
    pub average: u32,
    /// Latest week reached the milestone count
    pub milestone_reached: bool,
    /// Number of weeks the insight was computed over
    pub weeks_considered: usize,
}

impl ProgressInsight {
    /// The insight as an ordered sequence of statements
    pub fn statements(&self) -> Vec<InsightStatement> {
        vec![
            InsightStatement::Trend(self.direction),
            InsightStatement::AverageWise(self.average),
            InsightStatement::Milestone {
                reached: self.milestone_reached,
            },
        ]
    }
}

/// A single insight statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InsightStatement {
    /// Wise-mind usage is trending upward or stable
    Trend(Direction),
    /// Average wise-mind entries per week
    AverageWise(u32),
    /// "Consistently using wise mind" vs "keep practicing"
    Milestone { reached: bool },
}
