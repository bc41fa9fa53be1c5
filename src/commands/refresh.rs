//! Refresh command - Scrape the brewery menu into the available set

use anyhow::Result;
use brewery_tracker::tracker::{scrape_menu, ScrapeOptions, Store};
use owo_colors::OwoColorize;

/// Result of a menu refresh
#[derive(Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Names were found and merged
    Updated {
        /// Names returned by this scrape
        fetched: Vec<String>,
        /// Size of the available set after merging
        total: usize,
    },
    /// Nothing usable came back; the store was not touched
    NothingFound,
}

/// Scrape `url` and merge whatever was found
///
/// Network failures are not errors here: they are reported by the scraper
/// and end up as [`RefreshOutcome::NothingFound`]. Persistence failures are.
pub fn execute(store: &Store, url: &str, options: &ScrapeOptions) -> Result<RefreshOutcome> {
    let fetched = scrape_menu(url, options);
    if fetched.is_empty() {
        return Ok(RefreshOutcome::NothingFound);
    }

    let total = store.merge_available(&fetched)?;
    Ok(RefreshOutcome::Updated { fetched, total })
}

/// Format the outcome for display
pub fn format_outcome(outcome: &RefreshOutcome) -> String {
    match outcome {
        RefreshOutcome::Updated { fetched, total } => {
            let mut lines = vec![format!(
                "{} Found {} beers! Total available beers: {}",
                "Done:".green(),
                fetched.len(),
                total
            )];
            lines.push(String::new());
            lines.push("Fetched:".to_string());
            lines.extend(fetched.iter().map(|b| format!("  • {}", b)));
            lines.join("\n")
        }
        RefreshOutcome::NothingFound => format!(
            "{} Could not find beers at that URL. The website structure may have changed.",
            "Warning:".yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MENU_HTML: &str = r#"<html><body>
        <h3>Hazy IPA</h3>
        <h3>Dark Stout</h3>
    </body></html>"#;

    fn options(timeout: Duration) -> ScrapeOptions {
        ScrapeOptions {
            timeout,
            ..ScrapeOptions::default()
        }
    }

    async fn run_blocking(store: &Store, url: String, options: ScrapeOptions) -> RefreshOutcome {
        let store = store.clone();
        tokio::task::spawn_blocking(move || execute(&store, &url, &options))
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_refresh_into_empty_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/beer"))
            .respond_with(ResponseTemplate::new(200).set_body_string(MENU_HTML))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("data.json"));
        let url = format!("{}/beer", server.uri());

        let outcome = run_blocking(&store, url, options(Duration::from_secs(5))).await;

        assert_eq!(
            outcome,
            RefreshOutcome::Updated {
                fetched: vec!["Hazy IPA".to_string(), "Dark Stout".to_string()],
                total: 2,
            }
        );
        assert_eq!(
            store.load().unwrap().available_beers,
            vec!["Dark Stout".to_string(), "Hazy IPA".to_string()]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_refresh_timeout_leaves_store_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(MENU_HTML)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("data.json"));
        store.merge_available(&["Pilsner".to_string()]).unwrap();
        let before = store.load().unwrap();

        let outcome = run_blocking(&store, server.uri(), options(Duration::from_millis(200))).await;

        assert_eq!(outcome, RefreshOutcome::NothingFound);
        assert_eq!(store.load().unwrap(), before);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_refresh_http_error_does_not_create_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("data.json"));

        let outcome = run_blocking(&store, server.uri(), options(Duration::from_secs(5))).await;

        assert_eq!(outcome, RefreshOutcome::NothingFound);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_format_outcome() {
        let updated = format_outcome(&RefreshOutcome::Updated {
            fetched: vec!["Hazy IPA".to_string()],
            total: 4,
        });
        assert!(updated.contains("Found 1 beers! Total available beers: 4"));
        assert!(updated.contains("• Hazy IPA"));

        let nothing = format_outcome(&RefreshOutcome::NothingFound);
        assert!(nothing.contains("Could not find beers at that URL"));
    }
}
