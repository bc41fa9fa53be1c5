//! Fixed defaults and path resolution

use std::path::{Path, PathBuf};
use std::time::Duration;

/// State document, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "starkweather_data.json";

/// Environment variable that overrides the state document location
pub const DATA_FILE_ENV: &str = "BREWERY_TRACKER_DATA";

/// Menu page fetched by `refresh` when no URL is given
pub const DEFAULT_MENU_URL: &str = "https://starkweatherbrewing.com/beer";

/// Browser-like identification sent with every menu request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound on names returned by a single scrape
pub const MAX_CANDIDATES: usize = 20;

/// Rows shown in the dashboard's recent activity table
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Resolve the state document path
///
/// An explicit path wins; otherwise the fixed relative default is used.
pub fn data_file(override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    }
}

/// Default network timeout for menu requests
pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_file_default() {
        assert_eq!(data_file(None), PathBuf::from("starkweather_data.json"));
        assert!(data_file(None).is_relative());
    }

    #[test]
    fn test_data_file_override() {
        let custom = Path::new("/tmp/beers.json");
        assert_eq!(data_file(Some(custom)), PathBuf::from("/tmp/beers.json"));
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(default_timeout(), Duration::from_secs(10));
    }
}
