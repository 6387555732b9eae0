//! Entry command implementations (log, recent)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use wisemind_core::models::{Category, DATE_FORMAT};
use wisemind_core::{Entry, EntryStore, NewEntry};

use super::truncate;

/// Parse user input into a validated new entry
pub fn parse_new_entry(
    state: &str,
    situation: &str,
    reflection: &str,
    goal: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<NewEntry> {
    let category: Category = state.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let date = date
        .map(|d| NaiveDate::parse_from_str(d.trim(), DATE_FORMAT))
        .transpose()
        .context("Invalid --date format (use YYYY-MM-DD)")?
        .unwrap_or(today);

    let new = NewEntry {
        date,
        category,
        situation: situation.to_string(),
        reflection: reflection.to_string(),
        goal: goal.map(str::to_string),
    };
    new.validate()?;
    Ok(new)
}

pub fn cmd_log(store: &mut impl EntryStore, new: NewEntry) -> Result<Entry> {
    let entry = store.append(new).context("Failed to save entry")?;

    println!("✅ Logged {} for {}", label_for(&entry), entry.date);
    Ok(entry)
}

pub fn cmd_recent(store: &impl EntryStore, limit: usize) -> Result<()> {
    let entries = store.recent(limit).context("Failed to read entries")?;

    println!();
    println!("📓 Recent Reflections");
    println!("   ─────────────────────────────────────────────────────────────");

    if entries.is_empty() {
        println!("   No reflections yet. Start with: wisemind log --state wise ...");
        return Ok(());
    }

    for entry in &entries {
        println!("   {} │ {}", entry.date, label_for(entry));
        println!("      Situation:  {}", truncate(&entry.situation, 60));
        println!("      Reflection: {}", truncate(&entry.reflection, 60));
        if let Some(ref goal) = entry.goal {
            println!("      Goal:       {}", truncate(goal, 60));
        }
    }

    Ok(())
}

/// Mind-state label, or the raw stored value if it isn't recognized
fn label_for(entry: &Entry) -> String {
    entry
        .category()
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| entry.category.clone())
}
