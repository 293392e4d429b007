use crate::models::ListingRecord;
use crate::scrapers::error::ScrapeError;
use crate::scrapers::price::parse_price;
use crate::scrapers::traits::ListingSource;
use crate::scrapers::types::{ScrapeConfig, PAGE_PLACEHOLDER};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

// Tied to OLX's current card markup. Match on data attributes, not `css-*` classes.
const ANCHOR_SELECTOR: &str = r#"[data-cy="ad-card-title"] a[href]"#;
const PRICE_SELECTOR: &str = "p";

/// Compiled selectors for one listing card
struct CardSelectors {
    anchor: Selector,
    price: Selector,
}

impl CardSelectors {
    fn new() -> Result<Self> {
        let parse = |css: &str| {
            Selector::parse(css).map_err(|e| anyhow!("invalid selector {css:?}: {e}"))
        };

        Ok(Self {
            anchor: parse(ANCHOR_SELECTOR)?,
            price: parse(PRICE_SELECTOR)?,
        })
    }
}

/// OLX search results scraper
pub struct OlxScraper {
    client: Client,
    config: ScrapeConfig,
    origin: Url,
    selectors: CardSelectors,
}

impl OlxScraper {
    /// Create a new OLX scraper; `ScrapeConfig::default()` targets the VW Golf VII search
    pub fn with_config(config: ScrapeConfig) -> Result<Self> {
        if config.user_agent.trim().is_empty() {
            anyhow::bail!("User agent must not be empty");
        }
        if !config.search_path.contains(PAGE_PLACEHOLDER) {
            anyhow::bail!("Search path {:?} has no {} placeholder", config.search_path, PAGE_PLACEHOLDER);
        }

        let origin = Url::parse(&config.origin)
            .with_context(|| format!("Invalid origin {:?}", config.origin))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        debug!("HTTP client ready for {} (timeout {:?})", origin, config.timeout);

        Ok(Self {
            client,
            config,
            origin,
            selectors: CardSelectors::new()?,
        })
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Absolute URL of the given results page
    pub fn page_url(&self, page: u32) -> Result<Url, ScrapeError> {
        let path = self
            .config
            .search_path
            .replace(PAGE_PLACEHOLDER, &page.to_string());
        Ok(self.origin.join(&path)?)
    }

    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError> {
        let url = self.page_url(page)?;

        debug!("Fetching URL: {}", url);

        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            warn!("OLX returned status {} for page {}", response.status(), page);
            return Err(ScrapeError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;

        debug!("Downloaded {} bytes of HTML", html.len());

        Ok(html)
    }

    /// Parse listing cards out of one results page.
    ///
    /// Cards without a title or a usable link are skipped. Cards whose price
    /// text is missing or has no digits are kept with `price: None`.
    pub fn parse_listings(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);
        let anchors: Vec<_> = document.select(&self.selectors.anchor).collect();

        debug!("Found {} listing anchors in HTML", anchors.len());

        let mut listings = Vec::new();

        for (idx, anchor) in anchors.into_iter().enumerate() {
            let title = collapse_whitespace(&anchor.text().collect::<Vec<_>>().join(" "));
            let href = anchor.value().attr("href").unwrap_or("");
            let link = self.resolve_link(href);

            let (title, link) = match (title.is_empty(), link) {
                (false, Some(link)) => (title, link),
                (_, link) => {
                    info!("Skipped listing {}: title='{}', href='{}', resolved={}", idx, title, href, link.is_some());
                    continue;
                }
            };

            let price = self.price_text(anchor).and_then(|text| parse_price(&text));
            if price.is_none() {
                debug!("No price for '{}'", title);
            }

            listings.push(ListingRecord::new(title, price, link));
        }

        listings
    }

    fn resolve_link(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        let url = self.origin.join(href).ok()?;
        matches!(url.scheme(), "http" | "https").then(|| url.to_string())
    }

    /// Text of the first price element after the anchor, looking first among
    /// the anchor's own siblings and then among its container's siblings.
    fn price_text(&self, anchor: ElementRef<'_>) -> Option<String> {
        let container = anchor.parent().and_then(ElementRef::wrap);

        for start in std::iter::once(anchor).chain(container) {
            for sibling in start.next_siblings().filter_map(ElementRef::wrap) {
                let found = if self.selectors.price.matches(&sibling) {
                    Some(sibling)
                } else {
                    sibling.select(&self.selectors.price).next()
                };

                if let Some(el) = found {
                    return Some(collapse_whitespace(&el.text().collect::<String>()));
                }
            }
        }

        None
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl ListingSource for OlxScraper {
    async fn scrape(&self, pages: u32) -> Result<Vec<ListingRecord>, ScrapeError> {
        info!("Starting {} scrape of {} page(s)", self.source_name(), pages);

        let mut listings = Vec::new();

        // The first failed page aborts the whole run.
        for page in 1..=pages {
            let html = self.fetch_page(page).await?;
            let found = self.parse_listings(&html);
            info!("Page {}: {} listings", page, found.len());
            listings.extend(found);
        }

        if listings.is_empty() {
            warn!("No listings found - OLX page structure may have changed");
        } else {
            info!("✅ Scraped {} listings from {}", listings.len(), self.source_name());
        }

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "OLX"
    }
}
