use thiserror::Error;

/// Errors surfaced by the scrapers. Network, browser and file failures are
/// wrapped as-is; nothing here retries them.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webdriver failed: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn selector(selector: &str, reason: impl ToString) -> Self {
        Self::Selector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }
}
