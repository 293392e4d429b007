use crate::analysis::{aggregate, resolve_with_fallback, Analysis};
use crate::models::{DataOrigin, ListingRecord};
use crate::scrapers::ListingSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything one refresh produces for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub pages: u32,
    pub origin: DataOrigin,
    pub notice: Option<String>,
    pub listings: Vec<ListingRecord>,
    pub analysis: Analysis,
}

/// Run one extract → fallback → aggregate cycle
pub async fn refresh(source: &dyn ListingSource, pages: u32, ratio: f64) -> Report {
    info!("🔄 Refreshing {} listings ({} page(s))", source.source_name(), pages);

    let extraction = source.extract(pages).await;
    let resolved = resolve_with_fallback(extraction);
    let analysis = aggregate(&resolved.listings, ratio);

    Report {
        generated_at: Utc::now(),
        source: source.source_name().to_string(),
        pages,
        origin: resolved.origin,
        notice: resolved.notice,
        listings: resolved.listings,
        analysis,
    }
}
