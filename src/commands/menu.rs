//! Menu command - Show the current available-beer set

use anyhow::Result;
use brewery_tracker::tracker::Store;
use comfy_table::Cell;

use super::utils;

const COLUMNS: usize = 3;

/// Load the store and render the menu
pub fn execute(store: &Store) -> Result<String> {
    let data = store.load()?;
    Ok(format_menu(&data.available_beers))
}

/// Format the available set as a three-column grid
pub fn format_menu(available: &[String]) -> String {
    if available.is_empty() {
        return "No beers loaded yet. Run `refresh` to get started.".to_string();
    }

    let mut sorted = available.to_vec();
    sorted.sort();

    let mut table = utils::new_table();
    for chunk in sorted.chunks(COLUMNS) {
        let mut row: Vec<Cell> = chunk.iter().map(|b| Cell::new(format!("• {}", b))).collect();
        row.resize_with(COLUMNS, || Cell::new(""));
        table.add_row(row);
    }

    format!("{} beers available\n\n{}", sorted.len(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_menu() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("data.json"));
        assert!(execute(&store).unwrap().contains("No beers loaded yet"));
    }

    #[test]
    fn test_menu_lists_all_sorted() {
        let beers: Vec<String> = ["Wheat", "Amber Ale", "Porter", "Cider"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let output = format_menu(&beers);

        assert!(output.starts_with("4 beers available"));
        let amber = output.find("Amber Ale").unwrap();
        let cider = output.find("Cider").unwrap();
        let wheat = output.find("Wheat").unwrap();
        assert!(amber < cider);
        assert!(cider < wheat);
    }
}
