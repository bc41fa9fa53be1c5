//! Shared utilities for commands

use anyhow::{Context, Result};
use brewery_tracker::tracker::ConsumptionRecord;
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

/// Empty table with the common preset
pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Display form of an optional date
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Table of records with date and name columns
pub fn records_table(records: &[ConsumptionRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec![Cell::new("Date"), Cell::new("Name")]);
    for record in records {
        table.add_row(vec![
            Cell::new(format_date(Some(record.date))),
            Cell::new(&record.name),
        ]);
    }
    table
}
