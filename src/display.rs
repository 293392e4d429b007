use crate::analysis::Report;
use crate::models::{DataOrigin, ListingRecord};
use std::io::{self, Write};

const TITLE_WIDTH: usize = 48;
const PRICE_WIDTH: usize = 12;
const NO_OPPORTUNITIES: &str = "No opportunities below average.";

/// Format a euro amount rounded to whole euros, e.g. `10,733 €`
pub fn format_euros(value: f64) -> String {
    let rounded = value.round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{grouped} €")
}

fn format_price(price: Option<u64>) -> String {
    price.map_or_else(|| "-".to_string(), |p| format_euros(p as f64))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

fn write_table(out: &mut impl Write, listings: &[ListingRecord]) -> io::Result<()> {
    writeln!(out, "   {:<TITLE_WIDTH$}  {:>PRICE_WIDTH$}  Link", "Title", "Price")?;
    for (i, listing) in listings.iter().enumerate() {
        writeln!(
            out,
            "{:>2} {:<TITLE_WIDTH$}  {:>PRICE_WIDTH$}  {}",
            i + 1,
            truncate(&listing.title, TITLE_WIDTH),
            format_price(listing.price),
            listing.link
        )?;
    }
    Ok(())
}

/// Render one refresh as metrics plus the listing and opportunity tables
pub fn render(out: &mut impl Write, report: &Report) -> io::Result<()> {
    if let Some(notice) = &report.notice {
        writeln!(out, "⚠️  {notice}")?;
        writeln!(out)?;
    }

    let origin = match report.origin {
        DataOrigin::Live => "live",
        DataOrigin::Fallback => "simulated",
    };
    writeln!(
        out,
        "Updated {} · {} · {} page(s) · {} data",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.source,
        report.pages,
        origin
    )?;
    writeln!(out)?;

    writeln!(out, "📊 Price statistics")?;
    match &report.analysis.stats {
        Some(stats) => {
            writeln!(out, "   Average price   {}", format_euros(stats.mean))?;
            writeln!(out, "   Cheapest        {}", format_euros(stats.min as f64))?;
            writeln!(out, "   Most expensive  {}", format_euros(stats.max as f64))?;
            writeln!(out, "   ({} of {} listings priced)", stats.priced, report.listings.len())?;
        }
        None => writeln!(out, "   No price data available.")?,
    }
    writeln!(out)?;

    writeln!(out, "📋 Listings")?;
    write_table(out, &report.listings)?;
    writeln!(out)?;

    match report.analysis.threshold {
        Some(threshold) => writeln!(out, "💡 Opportunities below {}", format_euros(threshold))?,
        None => writeln!(out, "💡 Opportunities below average")?,
    }
    if report.analysis.opportunities.is_empty() {
        writeln!(out, "   {NO_OPPORTUNITIES}")?;
    } else {
        write_table(out, &report.analysis.opportunities)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{aggregate, Analysis};
    use crate::scrapers::fallback_listings;
    use chrono::Utc;

    fn report(listings: Vec<ListingRecord>, analysis: Analysis, notice: Option<String>) -> Report {
        Report {
            generated_at: Utc::now(),
            source: "OLX".to_string(),
            pages: 3,
            origin: if notice.is_some() { DataOrigin::Fallback } else { DataOrigin::Live },
            notice,
            listings,
            analysis,
        }
    }

    fn rendered(report: &Report) -> String {
        let mut out = Vec::new();
        render(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_euros() {
        assert_eq!(format_euros(0.0), "0 €");
        assert_eq!(format_euros(999.0), "999 €");
        assert_eq!(format_euros(8750.0), "8,750 €");
        assert_eq!(format_euros(10732.5), "10,733 €");
        assert_eq!(format_euros(1_250_000.0), "1,250,000 €");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Golf", 10), "Golf");
        assert_eq!(truncate("Volkswagen Golf", 6), "Volks…");
    }

    #[test]
    fn test_render_fallback() {
        let listings = fallback_listings();
        let analysis = aggregate(&listings, 0.9);
        let text = rendered(&report(listings, analysis, Some("Could not fetch listings.".to_string())));

        assert!(text.contains("⚠️  Could not fetch listings."));
        assert!(text.contains("simulated data"));
        assert!(text.contains("Average price   10,733 €"));
        assert!(text.contains("Cheapest        8,750 €"));
        assert!(text.contains("Most expensive  12,990 €"));
        assert!(text.contains("Opportunities below 9,659 €"));
        assert!(!text.contains(NO_OPPORTUNITIES));
    }

    #[test]
    fn test_render_placeholders() {
        let listings = vec![ListingRecord::new("Golf", None, "https://www.olx.pt/d/golf.html")];
        let analysis = aggregate(&listings, 0.9);
        let text = rendered(&report(listings, analysis, None));

        assert!(text.contains("live data"));
        assert!(text.contains("No price data available."));
        assert!(text.contains(NO_OPPORTUNITIES));
        assert!(!text.contains("⚠️"));
    }
}
