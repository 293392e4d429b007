use serde::{Deserialize, Serialize};

/// Where the listings shown in a refresh came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Live,
    Fallback,
}

/// One classified ad observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingRecord {
    pub title: String,
    /// Price in euros, `None` when the price text had no digits
    pub price: Option<u64>,
    /// Absolute URL of the ad detail page
    pub link: String,
}

impl ListingRecord {
    pub fn new(title: impl Into<String>, price: Option<u64>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price,
            link: link.into(),
        }
    }
}
