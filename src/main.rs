mod analysis;
mod display;
mod models;
mod scrapers;

use analysis::{refresh, Report};
use anyhow::Context;
use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use scrapers::{OlxScraper, ScrapeConfig};
use std::io::Write;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scout OLX car listings for prices below the market average
#[derive(Parser, Debug)]
#[command(name = "car-scout", version)]
struct Args {
    /// Result pages to fetch per refresh
    #[arg(short, long)]
    pages: Option<u32>,

    /// Run a single refresh and exit instead of prompting
    #[arg(long)]
    once: bool,

    /// Print the report as JSON (implies --once)
    #[arg(long)]
    json: bool,

    /// Site origin used for requests and to resolve ad links
    #[arg(long)]
    base_url: Option<String>,

    /// Search results path; `{page}` is replaced by the page index
    #[arg(long)]
    search_path: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Listings below `average * ratio` are reported as opportunities
    #[arg(long, default_value_t = 0.9)]
    ratio: f64,
}

impl Args {
    fn config(&self) -> anyhow::Result<ScrapeConfig> {
        if !(self.ratio.is_finite() && self.ratio > 0.0) {
            anyhow::bail!("--ratio must be a positive number, got {}", self.ratio);
        }

        let mut config = ScrapeConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            opportunity_ratio: self.ratio,
            ..ScrapeConfig::default()
        };
        if let Some(origin) = &self.base_url {
            config.origin = origin.clone();
        }
        if let Some(path) = &self.search_path {
            config.search_path = path.clone();
        }
        if let Some(pages) = self.pages {
            config.default_pages = config.validate_pages(pages).context("--pages")?;
        }

        Ok(config)
    }
}

fn print_report(report: &Report, json: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, report)?;
        writeln!(out)?;
    } else {
        display::render(&mut out, report)?;
    }

    out.flush()?;
    Ok(())
}

/// What the user asked for at the page-count prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageChoice {
    Refresh(u32),
    Quit,
}

/// Interpret one prompt answer: Enter = default pages, `q`/`quit` = stop
fn parse_page_input(input: &str, config: &ScrapeConfig) -> anyhow::Result<PageChoice> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(PageChoice::Quit);
    }
    if input.is_empty() {
        return Ok(PageChoice::Refresh(config.default_pages));
    }

    let pages: u32 = input
        .parse()
        .with_context(|| format!("not a page count: {input:?}"))?;
    Ok(PageChoice::Refresh(config.validate_pages(pages)?))
}

async fn run_interactive(scraper: &OlxScraper) -> anyhow::Result<()> {
    let config = scraper.config();
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let answer: String = Input::with_theme(&theme)
            .with_prompt(format!(
                "Pages to analyse [{}-{}, Enter = {}, q = quit]",
                config.min_pages, config.max_pages, config.default_pages
            ))
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                parse_page_input(input, config)
                    .map(|_| ())
                    .map_err(|e| format!("{e:#}"))
            })
            .interact_text()
            .context("Failed to read input")?;

        let pages = match parse_page_input(&answer, config)? {
            PageChoice::Quit => break,
            PageChoice::Refresh(pages) => pages,
        };

        println!();
        let report = refresh(scraper, pages, config.opportunity_ratio).await;
        print_report(&report, false)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the view or JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config()?;

    info!("🚗 Car Scout - OLX VW Golf VII");
    info!("==============================");

    let scraper = OlxScraper::with_config(config)?;

    if args.once || args.json {
        let config = scraper.config();
        let report = refresh(&scraper, config.default_pages, config.opportunity_ratio).await;
        print_report(&report, args.json)?;
        return Ok(());
    }

    run_interactive(&scraper).await?;

    info!("👋 Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["car-scout"]);
        let config = args.config().unwrap();

        assert_eq!(config.default_pages, 3);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.opportunity_ratio, 0.9);
        assert!(!args.once);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "car-scout",
            "--pages",
            "5",
            "--base-url",
            "http://127.0.0.1:8080",
            "--ratio",
            "0.8",
            "--json",
        ]);
        let config = args.config().unwrap();

        assert_eq!(config.default_pages, 5);
        assert_eq!(config.origin, "http://127.0.0.1:8080");
        assert_eq!(config.opportunity_ratio, 0.8);
        assert!(args.json);
    }

    #[test]
    fn test_args_rejects_out_of_range_pages() {
        for pages in ["0", "11"] {
            let args = Args::parse_from(["car-scout", "--pages", pages]);
            assert!(args.config().is_err(), "{pages}");
        }
    }

    #[test]
    fn test_parse_page_input() {
        let config = ScrapeConfig::default();

        assert_eq!(parse_page_input("", &config).unwrap(), PageChoice::Refresh(3));
        assert_eq!(parse_page_input("  ", &config).unwrap(), PageChoice::Refresh(3));
        assert_eq!(parse_page_input("5", &config).unwrap(), PageChoice::Refresh(5));
        assert_eq!(parse_page_input(" 10 ", &config).unwrap(), PageChoice::Refresh(10));
        assert_eq!(parse_page_input("q", &config).unwrap(), PageChoice::Quit);
        assert_eq!(parse_page_input("QUIT", &config).unwrap(), PageChoice::Quit);

        assert!(parse_page_input("0", &config).is_err());
        assert!(parse_page_input("11", &config).is_err());
        assert!(parse_page_input("abc", &config).is_err());
        assert!(parse_page_input("-2", &config).is_err());
    }

    #[test]
    fn test_parse_page_input_uses_configured_default() {
        let args = Args::parse_from(["car-scout", "--pages", "7"]);
        let config = args.config().unwrap();

        assert_eq!(parse_page_input("", &config).unwrap(), PageChoice::Refresh(7));
    }

    #[test]
    fn test_args_rejects_bad_ratio() {
        let args = Args::parse_from(["car-scout", "--ratio", "0"]);
        assert!(args.config().is_err());
    }
}
