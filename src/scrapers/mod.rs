pub mod error;
pub mod fallback;
pub mod olx;
pub mod price;
pub mod traits;
pub mod types;

pub use error::ScrapeError;
pub use fallback::fallback_listings;
pub use olx::OlxScraper;
pub use traits::ListingSource;
pub use types::{Extraction, ScrapeConfig};
