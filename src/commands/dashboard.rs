//! Dashboard command - Summary metrics, inventory and recent activity

use anyhow::Result;
use brewery_tracker::tracker::{Store, Summary};
use comfy_table::{Cell, CellAlignment};

use super::utils;

/// Hint shown while no menu has been loaded
pub const NO_MENU_HINT: &str =
    "No available beers yet. Run `refresh` to load beers from the brewery menu!";

/// Load the store and render the dashboard
pub fn execute(store: &Store) -> Result<String> {
    let data = store.load()?;
    if data.available_beers.is_empty() {
        return Ok(NO_MENU_HINT.to_string());
    }
    Ok(format_summary(&Summary::from_data(&data)))
}

/// Format a summary for display
pub fn format_summary(summary: &Summary) -> String {
    let mut lines = vec![];

    lines.push("Summary Statistics".to_string());
    lines.push(format!("Total Beers Tracked: {}", summary.total_tracked));
    lines.push(format!("Available Beers: {}", summary.available));
    lines.push(format!(
        "Most Recent: {}",
        utils::format_date(summary.most_recent)
    ));
    lines.push(format!("Tracked Types: {}", summary.tracked_types));

    lines.push(String::new());
    lines.push("Beer Inventory".to_string());

    let mut table = utils::new_table();
    table.set_header(vec![Cell::new("Beer Name"), Cell::new("Count")]);
    for row in &summary.inventory {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(row.count).set_alignment(CellAlignment::Right),
        ]);
    }
    lines.push(table.to_string());

    if !summary.recent.is_empty() {
        lines.push(String::new());
        lines.push("Recent Activity".to_string());
        lines.push(utils::records_table(&summary.recent).to_string());
    }

    lines.join("\n")
}
