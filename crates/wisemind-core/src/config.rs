//! Tracker configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/wisemind/config/tracker.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::insights::DEFAULT_LOOKBACK;
use crate::trend::DEFAULT_TREND_WEEKS;
use crate::week::WeekStart;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tracker.toml");

/// Settings for the weekly views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// First day of a calendar week
    pub week_start: WeekStart,
    /// Weeks in the trend series
    pub trend_weeks: usize,
    /// Drop empty weeks from the trend series
    pub visible_only: bool,
    /// Trailing weeks used for insights
    pub insight_lookback: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            trend_weeks: DEFAULT_TREND_WEEKS,
            visible_only: true,
            insight_lookback: DEFAULT_LOOKBACK,
        }
    }
}

impl TrackerConfig {
    /// Load from the default override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from a specific file (embedded defaults if it doesn't exist)
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Base data directory (~/.local/share/wisemind on Linux)
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("wisemind"))
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config").join("tracker.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<TrackerConfig> {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(default_config_path);

    let content = match path {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading tracker config");
            fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?
        }
        _ => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    week: Option<RawWeek>,
    trend: Option<RawTrend>,
    insights: Option<RawInsights>,
}

#[derive(Debug, Deserialize)]
struct RawWeek {
    start: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTrend {
    weeks: Option<usize>,
    visible_only: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    lookback: Option<usize>,
}

fn parse_config(content: &str) -> Result<TrackerConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = TrackerConfig::default();

    if let Some(start) = raw.week.and_then(|w| w.start) {
        config.week_start = start.parse().map_err(Error::Config)?;
    }

    if let Some(trend) = raw.trend {
        if let Some(weeks) = trend.weeks {
            if weeks == 0 {
                return Err(Error::Config("trend.weeks must be at least 1".into()));
            }
            config.trend_weeks = weeks;
        }
        if let Some(visible_only) = trend.visible_only {
            config.visible_only = visible_only;
        }
    }

    if let Some(lookback) = raw.insights.and_then(|i| i.lookback) {
        if lookback == 0 {
            return Err(Error::Config("insights.lookback must be at least 1".into()));
        }
        config.insight_lookback = lookback;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = TrackerConfig::from_toml(
            r#"
            [week]
            start = "monday"
            "#,
        )
        .unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.trend_weeks, 8);
        assert!(config.visible_only);
        assert_eq!(config.insight_lookback, 3);
    }

    #[test]
    fn test_full_override() {
        let config = TrackerConfig::from_toml(
            r#"
            [trend]
            weeks = 12
            visible_only = false

            [insights]
            lookback = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.trend_weeks, 12);
        assert!(!config.visible_only);
        assert_eq!(config.insight_lookback, 4);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(TrackerConfig::from_toml("").unwrap(), TrackerConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            TrackerConfig::from_toml("[trend]\nweeks = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TrackerConfig::from_toml("[insights]\nlookback = 0"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TrackerConfig::from_toml("[week]\nstart = \"friday\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            TrackerConfig::from_toml("[trend\nweeks = 8"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");

        // Missing file falls back to embedded defaults
        assert_eq!(TrackerConfig::load_from(&path).unwrap(), TrackerConfig::default());

        fs::write(&path, "[trend]\nweeks = 4\n").unwrap();
        let config = TrackerConfig::load_from(&path).unwrap();
        assert_eq!(config.trend_weeks, 4);
    }
}
