use crate::models::ListingRecord;
use crate::scrapers::error::ScrapeError;
use crate::scrapers::types::Extraction;
use async_trait::async_trait;
use tracing::warn;

/// Common trait for listing sources
/// Site-specific selector logic stays behind this seam so analysis and display never see it
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch and parse `pages` result pages, in page order
    async fn scrape(&self, pages: u32) -> Result<Vec<ListingRecord>, ScrapeError>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;

    /// Run `scrape`, turning any failure into an empty collection.
    ///
    /// No partial results survive a failed page.
    async fn extract(&self, pages: u32) -> Extraction {
        match self.scrape(pages).await {
            Ok(listings) => Extraction {
                listings,
                error: None,
            },
            Err(e) => {
                warn!("{} extraction failed: {}", self.source_name(), e);
                Extraction {
                    listings: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }
}
