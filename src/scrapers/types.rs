use crate::models::ListingRecord;
use crate::scrapers::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

pub const DEFAULT_ORIGIN: &str = "https://www.olx.pt";
pub const DEFAULT_SEARCH_PATH: &str = "/carros/q-vw-golf-vii/?page={page}";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Placeholder replaced by the page index in `search_path`
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Search and fetch parameters for listing scraping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Site origin, used to resolve relative ad links
    pub origin: String,
    /// Search results path, must contain `{page}`
    pub search_path: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Client identifier sent with every request
    pub user_agent: String,
    /// Smallest page count a refresh may ask for
    pub min_pages: u32,
    /// Largest page count a refresh may ask for
    pub max_pages: u32,
    /// Page count used when none is given
    pub default_pages: u32,
    /// Listings priced below `mean * opportunity_ratio` are opportunities
    pub opportunity_ratio: f64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_pages: 1,
            max_pages: 10,
            default_pages: 3,
            opportunity_ratio: 0.9,
        }
    }
}

impl ScrapeConfig {
    pub fn page_bounds(&self) -> RangeInclusive<u32> {
        self.min_pages..=self.max_pages
    }

    /// Check a requested page count against the configured bounds
    pub fn validate_pages(&self, pages: u32) -> anyhow::Result<u32> {
        anyhow::ensure!(
            self.page_bounds().contains(&pages),
            "page count must be between {} and {}, got {}",
            self.min_pages,
            self.max_pages,
            pages
        );
        Ok(pages)
    }
}

/// Outcome of one extraction run. `listings` is empty whenever `error` is set.
#[derive(Debug)]
pub struct Extraction {
    pub listings: Vec<ListingRecord>,
    pub error: Option<ScrapeError>,
}
