use crate::models::ListingRecord;

/// Simulated listings shown when a live extraction comes back empty
pub fn fallback_listings() -> Vec<ListingRecord> {
    vec![
        ListingRecord::new(
            "VW Golf VII 1.6 TDI Confortline",
            Some(11_200),
            "https://www.olx.pt/exemplo/golf-vii-1",
        ),
        ListingRecord::new(
            "VW Golf VII 2.0 TDI GTD",
            Some(12_990),
            "https://www.olx.pt/exemplo/golf-vii-2",
        ),
        ListingRecord::new(
            "VW Golf VII 1.2 TSI Trendline",
            Some(9_990),
            "https://www.olx.pt/exemplo/golf-vii-3",
        ),
        ListingRecord::new(
            "VW Golf VII Variant 1.6 TDI",
            Some(8_750),
            "https://www.olx.pt/exemplo/golf-vii-4",
        ),
    ]
}
