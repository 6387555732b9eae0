//! Wise Mind CLI - Weekly practice tracker
//!
//! Usage:
//!   wisemind log --state wise --situation ... --reflection ...
//!   wisemind week --back 1     Counts for last week
//!   wisemind trend             8-week trend
//!   wisemind insights          Progress insights

mod cli;
mod commands;


use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wisemind_core::reference_day;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let mut store = commands::open_store(cli.store.as_deref());
    let today = reference_day(&Local::now());

    match cli.command {
        Commands::Log {
            state,
            situation,
            reflection,
            goal,
            date,
        } => {
            let new = commands::parse_new_entry(
                &state,
                &situation,
                &reflection,
                goal.as_deref(),
                date.as_deref(),
                today,
            )?;
            commands::cmd_log(&mut store, new).map(|_| ())
        }
        Commands::Week { back } => commands::cmd_week(&store, &config, today, back),
        Commands::Trend { weeks, all } => commands::cmd_trend(&store, &config, today, weeks, all),
        Commands::Insights {
            lookback,
            weeks,
            all,
        } => commands::cmd_insights(&store, &config, today, lookback, weeks, all).map(|_| ()),
        Commands::Recent { limit } => commands::cmd_recent(&store, limit),
        Commands::Report { back } => commands::cmd_report(&store, &config, today, back),
    }
}
