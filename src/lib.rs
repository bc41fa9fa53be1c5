//! brewery-tracker library
//!
//! Record the beers you have had at a brewery, discover its current menu by
//! scraping the brewery's website, and summarize both.
//!
//! State is a single JSON document handled through [`tracker::Store`].

pub mod config;
pub mod tracker;
