pub mod report;

pub use report::{refresh, Report};

use crate::models::{DataOrigin, ListingRecord};
use crate::scrapers::fallback_listings;
use crate::scrapers::Extraction;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Price summary over the listings that carry a price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceStatistics {
    pub mean: f64,
    pub min: u64,
    pub max: u64,
    /// Number of listings the figures were computed from
    pub priced: usize,
}

impl PriceStatistics {
    /// Compute mean/min/max over present prices.
    ///
    /// Returns `None` when no listing has a price, including an empty slice.
    pub fn compute(listings: &[ListingRecord]) -> Option<Self> {
        let prices: Vec<u64> = listings.iter().filter_map(|l| l.price).collect();

        let min = *prices.iter().min()?;
        let max = *prices.iter().max()?;
        let total: u128 = prices.iter().map(|&p| u128::from(p)).sum();

        Some(Self {
            mean: total as f64 / prices.len() as f64,
            min,
            max,
            priced: prices.len(),
        })
    }

    /// Price below which a listing counts as an opportunity
    pub fn threshold(&self, ratio: f64) -> f64 {
        self.mean * ratio
    }
}

/// Listings with a price strictly below `threshold`, in their original order
pub fn opportunities(listings: &[ListingRecord], threshold: f64) -> Vec<ListingRecord> {
    listings
        .iter()
        .filter(|l| matches!(l.price, Some(p) if (p as f64) < threshold))
        .cloned()
        .collect()
}

/// Statistics plus the derived opportunity subset for one collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    /// `None` when no listing has a price; show "no data" instead of figures
    pub stats: Option<PriceStatistics>,
    pub threshold: Option<f64>,
    pub opportunities: Vec<ListingRecord>,
}

pub fn aggregate(listings: &[ListingRecord], ratio: f64) -> Analysis {
    let Some(stats) = PriceStatistics::compute(listings) else {
        warn!("No priced listings among {} - statistics unavailable", listings.len());
        return Analysis {
            stats: None,
            threshold: None,
            opportunities: Vec::new(),
        };
    };

    let threshold = stats.threshold(ratio);
    let opportunities = opportunities(listings, threshold);

    info!(
        "📊 mean {:.2} €, min {} €, max {} €, {} below {:.2} €",
        stats.mean,
        stats.min,
        stats.max,
        opportunities.len(),
        threshold
    );

    Analysis {
        stats: Some(stats),
        threshold: Some(threshold),
        opportunities,
    }
}

/// Listings chosen for display after an extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub listings: Vec<ListingRecord>,
    pub origin: DataOrigin,
    /// Warning for the user when simulated data replaced the live result
    pub notice: Option<String>,
}

/// Substitute the fallback dataset when an extraction produced nothing
pub fn resolve_with_fallback(extraction: Extraction) -> Resolved {
    if !extraction.listings.is_empty() {
        return Resolved {
            listings: extraction.listings,
            origin: DataOrigin::Live,
            notice: None,
        };
    }

    let notice = match extraction.error {
        Some(e) => format!("Could not fetch listings ({e}). Showing simulated data."),
        None => "No listings found on the results pages. Showing simulated data.".to_string(),
    };

    warn!("{}", notice);
    info!("📋 Using fallback listings");

    Resolved {
        listings: fallback_listings(),
        origin: DataOrigin::Fallback,
        notice: Some(notice),
    }
}
