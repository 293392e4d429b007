use reqwest::StatusCode;

/// Failures that abort an extraction. A page with zero matching cards is not one of them.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
