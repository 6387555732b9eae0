//! Entry storage
//!
//! The engine only ever reads a snapshot of entries; storage lives behind
//! [`EntryStore`] so the backend can change without touching aggregation.
//! Two backends ship here:
//! - [`MemoryStore`] - a plain vector, for tests and embedding
//! - [`JsonFileStore`] - a JSON array on disk, rewritten atomically

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::models::{Entry, NewEntry};

/// Read/append access to the canonical entry list
pub trait EntryStore {
    /// All entries in creation order (oldest first)
    fn entries(&self) -> Result<Vec<Entry>>;

    /// Validate and persist a new entry
    fn append(&mut self, new: NewEntry) -> Result<Entry>;

    /// Up to `limit` entries, newest first
    fn recent(&self, limit: usize) -> Result<Vec<Entry>> {
        let mut entries = self.entries()?;
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        entries.truncate(limit);
        Ok(entries)
    }
}

/// Pick an id for an entry created at `now`: its millisecond timestamp,
/// bumped past the newest existing id when clocks collide.
fn next_id(entries: &[Entry], now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    match entries.iter().map(|e| e.id).max() {
        Some(max) if max >= candidate => max + 1,
        _ => candidate,
    }
}

/// In-memory entry store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing entries
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl EntryStore for MemoryStore {
    fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, new: NewEntry) -> Result<Entry> {
        new.validate()?;
        let now = Utc::now();
        let entry = Entry::from_new(next_id(&self.entries, now), new, now);
        self.entries.push(entry.clone());
        Ok(entry)
    }
}

/// Entry store backed by a JSON file
///
/// The file holds a single JSON array of entries. A missing file is an empty
/// store; the file (and its parent directory) is created on first append.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (~/.local/share/wisemind/entries.json)
    pub fn default_path() -> Option<PathBuf> {
        crate::config::data_dir().map(|d| d.join("entries.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw records as stored. Only a file that isn't a JSON array is an
    /// error; individual records are checked by [`JsonFileStore::load`].
    fn load_records(&self) -> Result<Vec<serde_json::Value>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn load(&self) -> Result<Vec<Entry>> {
        Ok(readable_entries(&self.load_records()?))
    }

    /// Write the full list to a temp file next to the store, then rename it
    /// into place.
    fn save(&self, records: &[serde_json::Value]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let tmp = tempfile::NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Convert stored records to entries, skipping any that aren't entries at
/// all (wrong shape, missing id or timestamp).
fn readable_entries(records: &[serde_json::Value]) -> Vec<Entry> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match Entry::deserialize(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::trace!(index, error = %e, "Skipping unreadable record");
                None
            }
        })
        .collect()
}

impl EntryStore for JsonFileStore {
    fn entries(&self) -> Result<Vec<Entry>> {
        self.load()
    }

    fn append(&mut self, new: NewEntry) -> Result<Entry> {
        new.validate()?;
        // Unreadable records are written back untouched
        let mut records = self.load_records()?;
        let now = Utc::now();
        let entry = Entry::from_new(next_id(&readable_entries(&records), now), new, now);
        records.push(serde_json::to_value(&entry)?);
        self.save(&records)?;

        tracing::info!(
            id = entry.id,
            date = %entry.date,
            mind_state = %entry.category,
            path = %self.path.display(),
            "Entry saved"
        );
        Ok(entry)
    }
}
