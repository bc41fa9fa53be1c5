//! Add command - Record a beer you had

use anyhow::{bail, Result};
use brewery_tracker::tracker::{ConsumptionRecord, Store};
use chrono::NaiveDate;

/// Validate the name and append a record
///
/// The name is stored exactly as given; only blank names are rejected.
pub fn execute(store: &Store, name: &str, date: Option<NaiveDate>) -> Result<ConsumptionRecord> {
    if name.trim().is_empty() {
        bail!("Please select or enter a beer name");
    }
    store.add_record(name, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_blank_name() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("data.json"));

        assert!(execute(&store, "", None).is_err());
        assert!(execute(&store, "   ", None).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_stores_name_as_entered() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("data.json"));

        let date = NaiveDate::from_ymd_opt(2024, 3, 17);
        let record = execute(&store, "  Irish Stout ", date).unwrap();

        assert_eq!(record.name, "  Irish Stout ");
        assert_eq!(store.load().unwrap().beers[0].name, "  Irish Stout ");
        assert_eq!(Some(record.date), date);
        assert_eq!(store.load().unwrap().beers.len(), 1);
    }
}
