//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wise Mind - Track which mind you act from, week by week
#[derive(Parser)]
#[command(name = "wisemind")]
#[command(about = "Wise Mind practice tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Entry store file (defaults to ~/.local/share/wisemind/entries.json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Tracker config file (defaults to ~/.local/share/wisemind/config/tracker.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a daily reflection
    Log {
        /// Mind state: emotion, rational, wise
        #[arg(short, long)]
        state: String,

        /// What happened
        #[arg(long)]
        situation: String,

        /// What you noticed about your response
        #[arg(short, long)]
        reflection: String,

        /// What you'd like to try next time
        #[arg(short, long)]
        goal: Option<String>,

        /// Day the reflection belongs to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show mind-state counts for one week
    Week {
        /// Weeks back from the current week (0 = this week)
        #[arg(short, long, default_value = "0")]
        back: u32,
    },

    /// Show the weekly trend
    Trend {
        /// Number of weeks (defaults to config, usually 8)
        #[arg(short, long)]
        weeks: Option<usize>,

        /// Include weeks without entries
        #[arg(long)]
        all: bool,
    },

    /// Show progress insights
    Insights {
        /// Trailing weeks to consider (defaults to config, usually 3)
        #[arg(short, long)]
        lookback: Option<usize>,

        /// Weeks in the underlying trend (defaults to config, usually 8)
        #[arg(short, long)]
        weeks: Option<usize>,

        /// Count weeks without entries, so averages cover the whole lookback
        #[arg(long)]
        all: bool,
    },

    /// List recent reflections
    Recent {
        /// Maximum number of entries
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Print the full progress report as JSON
    Report {
        /// Weeks back from the current week for the weekly section
        #[arg(short, long, default_value = "0")]
        back: u32,
    },
}
