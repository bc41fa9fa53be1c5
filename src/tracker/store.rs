//! JSON-backed tracker state
//!
//! All state lives in one document:
//!
//! ```json
//! {
//!   "beers": [{ "name": "Hazy IPA", "date": "2024-05-01", "timestamp": "2024-05-01T18:30:00.123456" }],
//!   "available_beers": ["Dark Stout", "Hazy IPA"]
//! }
//! ```
//!
//! Every mutation is a whole-document read-modify-write. There is no locking,
//! so two concurrent writers race and the last write wins.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A logged instance of having had a beer on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// Beer name, free text
    pub name: String,
    /// Day the beer was had
    pub date: NaiveDate,
    /// When the record was created
    pub timestamp: NaiveDateTime,
}

/// The whole persisted document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerData {
    /// Consumption records in insertion order, append-only
    #[serde(default)]
    pub beers: Vec<ConsumptionRecord>,

    /// Every name ever seen on the menu, sorted
    #[serde(default)]
    pub available_beers: Vec<String>,
}

/// Handle on the state document
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, or an empty one if the file does not exist yet
    pub fn load(&self) -> Result<TrackerData> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(TrackerData::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", self.path.display()))
    }

    /// Overwrite the document wholesale
    pub fn save(&self, data: &TrackerData) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write: {}", self.path.display()))?;
        tracing::debug!(
            path = %self.path.display(),
            records = data.beers.len(),
            available = data.available_beers.len(),
            "saved tracker data"
        );
        Ok(())
    }

    /// Append a consumption record and persist
    ///
    /// `date` defaults to today. The name is not validated here.
    pub fn add_record(&self, name: &str, date: Option<NaiveDate>) -> Result<ConsumptionRecord> {
        let mut data = self.load()?;
        let now = Local::now().naive_local();

        let record = ConsumptionRecord {
            name: name.to_string(),
            date: date.unwrap_or_else(|| now.date()),
            timestamp: now,
        };
        data.beers.push(record.clone());
        self.save(&data)?;

        tracing::info!(name = %record.name, date = %record.date, "added record");
        Ok(record)
    }

    /// Union newly scraped names into the available set, persist, and
    /// return the new total
    pub fn merge_available(&self, new_beers: &[String]) -> Result<usize> {
        let mut data = self.load()?;
        let before = data.available_beers.len();

        data.available_beers = merge_names(&data.available_beers, new_beers);
        self.save(&data)?;

        let total = data.available_beers.len();
        tracing::info!(before, total, "merged available beers");
        Ok(total)
    }
}

/// Union of two name lists, deduplicated and sorted
pub fn merge_names(existing: &[String], new_beers: &[String]) -> Vec<String> {
    existing
        .iter()
        .chain(new_beers)
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
