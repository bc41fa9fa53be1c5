//! Dashboard aggregates over the tracker document

use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use super::store::{ConsumptionRecord, TrackerData};
use crate::config;

/// One inventory row: a beer and how many times it was had
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub name: String,
    pub count: usize,
}

/// Aggregate view of the tracker state
#[derive(Debug, Default)]
pub struct Summary {
    /// Number of consumption records
    pub total_tracked: usize,

    /// Size of the available-beer set
    pub available: usize,

    /// Latest consumption date
    pub most_recent: Option<NaiveDate>,

    /// Distinct names among consumption records
    pub tracked_types: usize,

    /// Every menu beer plus every recorded name, most-had first
    pub inventory: Vec<InventoryRow>,

    /// Latest records, newest first
    pub recent: Vec<ConsumptionRecord>,
}

impl Summary {
    pub fn from_data(data: &TrackerData) -> Self {
        Self {
            total_tracked: data.beers.len(),
            available: data.available_beers.len(),
            most_recent: data.beers.iter().map(|b| b.date).max(),
            tracked_types: data
                .beers
                .iter()
                .map(|b| b.name.as_str())
                .collect::<HashSet<_>>()
                .len(),
            inventory: inventory(data),
            recent: recent_activity(&data.beers, config::RECENT_ACTIVITY_LIMIT),
        }
    }
}

/// Per-beer counts
///
/// Menu beers never had appear with a count of zero; recorded beers that are
/// not on the menu are included too. Sorted by count descending, then name.
pub fn inventory(data: &TrackerData) -> Vec<InventoryRow> {
    let mut counts: BTreeMap<&str, usize> = data
        .available_beers
        .iter()
        .map(|name| (name.as_str(), 0))
        .collect();

    for record in &data.beers {
        *counts.entry(record.name.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<InventoryRow> = counts
        .into_iter()
        .map(|(name, count)| InventoryRow {
            name: name.to_string(),
            count,
        })
        .collect();

    // BTreeMap order already sorts by name, so a stable sort on count is enough
    rows.sort_by_key(|row| Reverse(row.count));
    rows
}

/// Up to `limit` records by consumption date, newest first
///
/// Records on the same day are ordered by creation timestamp, newest first.
pub fn recent_activity(records: &[ConsumptionRecord], limit: usize) -> Vec<ConsumptionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.timestamp.cmp(&a.timestamp)));
    sorted.truncate(limit);
    sorted
}
