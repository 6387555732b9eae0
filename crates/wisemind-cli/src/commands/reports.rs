//! Weekly view command implementations (week, trend, insights, report)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use wisemind_core::models::Category;
use wisemind_core::{
    aggregate, build_trend, window_for, Direction, EntryStore, InsightStatement, ProgressAnalyzer,
    ProgressInsight, ProgressReport, TrackerConfig, TrendSeries,
};

/// Display text for an insight statement
pub fn describe_statement(statement: &InsightStatement) -> String {
    match statement {
        InsightStatement::Trend(Direction::Upward) => {
            "Your Wise Mind usage is trending upward over recent weeks".to_string()
        }
        InsightStatement::Trend(Direction::Stable) => {
            "Your Wise Mind usage is stable over recent weeks".to_string()
        }
        InsightStatement::AverageWise(avg) => {
            format!("Average Wise Mind entries per week: {}", avg)
        }
        InsightStatement::Milestone { reached: true } => {
            "Great progress! You're consistently using Wise Mind".to_string()
        }
        InsightStatement::Milestone { reached: false } => {
            "Keep practicing - aim for more Wise Mind moments".to_string()
        }
    }
}

pub fn cmd_week(
    store: &impl EntryStore,
    config: &TrackerConfig,
    today: NaiveDate,
    weeks_back: u32,
) -> Result<()> {
    let entries = store.entries().context("Failed to read entries")?;
    let window = window_for(today, weeks_back, config.week_start)?;
    let snapshot = aggregate(&entries, &window);

    println!();
    match weeks_back {
        0 => println!("🧘 This Week"),
        1 => println!("🧘 Last Week"),
        n => println!("🧘 {} Weeks Ago", n),
    }
    println!("   Week: {}", window);
    println!("   ─────────────────────────────────────────────────────────────");

    for category in Category::all() {
        println!(
            "   {:14} │ {:>3}",
            category.label(),
            snapshot.counts.get(*category)
        );
    }
    println!("   ───────────────┼─────");
    println!("   {:14} │ {:>3}", "Total", snapshot.total);

    match snapshot.percentages() {
        Some(pct) => {
            println!();
            println!(
                "   Wise Mind: {}% | Emotion Mind: {}% | Rational Mind: {}%",
                pct.wise, pct.emotion, pct.rational
            );
        }
        None => {
            println!();
            println!("   No reflections logged this week.");
        }
    }

    Ok(())
}

pub fn cmd_trend(
    store: &impl EntryStore,
    config: &TrackerConfig,
    today: NaiveDate,
    weeks: Option<usize>,
    all: bool,
) -> Result<()> {
    let entries = store.entries().context("Failed to read entries")?;
    let visible_only = config.visible_only && !all;
    let series = build_trend(
        &entries,
        today,
        weeks.unwrap_or(config.trend_weeks),
        visible_only,
        config.week_start,
    )?;

    println!();
    println!("📈 Weekly Trend (last {} weeks)", series.span_weeks);
    if series.visible_only {
        println!("   Weeks without entries are hidden (use --all to show them)");
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if series.is_empty() {
        println!("   No reflections in this period.");
        return Ok(());
    }

    print_trend_table(&series);
    Ok(())
}

fn print_trend_table(series: &TrendSeries) {
    println!(
        "   {:6} │ {:>4} │ {:>7} │ {:>8} │ {:>5}",
        "Week", "Wise", "Emotion", "Rational", "Total"
    );
    println!("   ───────┼──────┼─────────┼──────────┼───────");
    for snapshot in &series.snapshots {
        println!(
            "   {:6} │ {:>4} │ {:>7} │ {:>8} │ {:>5}",
            snapshot.window.label(),
            snapshot.counts.wise,
            snapshot.counts.emotion,
            snapshot.counts.rational,
            snapshot.total
        );
    }
}

pub fn cmd_insights(
    store: &impl EntryStore,
    config: &TrackerConfig,
    today: NaiveDate,
    lookback: Option<usize>,
    weeks: Option<usize>,
    all: bool,
) -> Result<Option<ProgressInsight>> {
    let entries = store.entries().context("Failed to read entries")?;
    let series = build_trend(
        &entries,
        today,
        weeks.unwrap_or(config.trend_weeks),
        config.visible_only && !all,
        config.week_start,
    )?;
    let analyzer = ProgressAnalyzer::with_lookback(lookback.unwrap_or(config.insight_lookback))?;

    println!();
    println!("💡 Progress Insights");
    println!("   ─────────────────────────────────────────────────────────────");

    let insight = analyzer.analyze(&series);
    match &insight {
        Some(insight) => {
            for statement in insight.statements() {
                println!("   • {}", describe_statement(&statement));
            }
        }
        None => println!("   Not enough data yet. Log a few reflections first."),
    }

    Ok(insight)
}

pub fn cmd_report(
    store: &impl EntryStore,
    config: &TrackerConfig,
    today: NaiveDate,
    weeks_back: u32,
) -> Result<()> {
    let entries = store.entries().context("Failed to read entries")?;
    let report = ProgressReport::build(&entries, today, weeks_back, config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
