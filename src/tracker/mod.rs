//! Core tracker operations

pub mod scraper;
pub mod stats;
pub mod store;

pub use self::scraper::{fetch_menu, scrape_menu, ScrapeError, ScrapeOptions};
pub use self::stats::Summary;
pub use self::store::{ConsumptionRecord, Store, TrackerData};
