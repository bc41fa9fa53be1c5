//! Menu scraper
//!
//! Best-effort discovery of beer names on a brewery's menu page. There is no
//! contract with the site's markup: generic heading, paragraph and container
//! elements are scanned and their text kept when it passes a keyword/length
//! heuristic. Layout changes on the site produce noise or misses, not errors.

use owo_colors::OwoColorize;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config;

/// Style keywords that mark a text as a likely beer name, lowercase
pub const BEER_KEYWORDS: &[&str] = &[
    "ipa", "stout", "lager", "pale", "ale", "pilsner", "sour", "porter", "wheat", "cider",
];

/// Elements whose text content is never rendered as page text
const NON_TEXT_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

static CANDIDATE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3, h4, div, p").expect("static selector is valid"));

/// Failure to obtain a menu page
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Request and extraction settings
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Maximum number of names returned
    pub max_candidates: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            user_agent: config::USER_AGENT.to_string(),
            timeout: config::default_timeout(),
            max_candidates: config::MAX_CANDIDATES,
        }
    }
}

/// Fetch a menu page and extract candidate beer names
pub fn fetch_menu(url: &str, options: &ScrapeOptions) -> Result<Vec<String>, ScrapeError> {
    let parsed = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .build()?;

    tracing::debug!(url = %parsed, timeout = ?options.timeout, "fetching menu");
    let body = client.get(parsed).send()?.error_for_status()?.text()?;
    tracing::debug!(bytes = body.len(), "menu page received");

    Ok(extract_candidates(&body, options.max_candidates))
}

/// Non-fatal scrape: any failure is reported on stderr and yields no names
pub fn scrape_menu(url: &str, options: &ScrapeOptions) -> Vec<String> {
    match fetch_menu(url, options) {
        Ok(beers) => beers,
        Err(e) => {
            tracing::warn!(url, error = %e, "menu fetch failed");
            eprintln!("{}", failure_message(&e));
            Vec::new()
        }
    }
}

fn failure_message(e: &ScrapeError) -> String {
    format!("{} {}", "Error fetching beers:".red(), e)
}

/// Extract candidate names from an HTML document
///
/// Elements are visited in document order. Results are deduplicated keeping
/// the first occurrence and truncated to `max`.
pub fn extract_candidates(html: &str, max: usize) -> Vec<String> {
    let document = Html::parse_document(html);

    let candidates = document
        .select(&CANDIDATE_SELECTOR)
        .map(element_text)
        .filter(|text| is_candidate(text));

    let mut unique = dedup_preserving_order(candidates);
    unique.truncate(max);
    unique
}

/// Text of an element: every visible descendant text node trimmed, then
/// joined without separator
fn element_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .is_some_and(|parent| NON_TEXT_ELEMENTS.contains(&parent.name()));
            (!hidden).then(|| text.trim())
        })
        .collect()
}

/// Whether a text fragment looks like a beer name
///
/// Length is counted in characters and must be within 4..=99. Inside that
/// range a style keyword qualifies any text; without one the length must be
/// within 6..=59.
pub fn is_candidate(text: &str) -> bool {
    let len = text.chars().count();
    if len <= 3 || len >= 100 {
        return false;
    }

    let lower = text.to_lowercase();
    BEER_KEYWORDS.iter().any(|k| lower.contains(k)) || (len > 5 && len < 60)
}

/// Remove duplicates, keeping the first occurrence of each item in place
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
