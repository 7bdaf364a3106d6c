//! Photo search scraper: find the best variant of every result image for a
//! search term and save it to disk.

pub mod download;
pub mod search;

use tracing::{info, warn};

use crate::config::ImageSearchConfig;
use crate::{Result, ScrapeError};

pub use download::Downloader;

pub const DEFAULT_TERMS: [&str; 10] = [
    "lions", "tigers", "wolves", "foxes", "bears", "rabbits", "horses", "elephants", "giraffes",
    "zebras",
];

/// What happened for one search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSummary {
    pub term: String,
    pub selected: usize,
    pub saved: usize,
}

async fn fetch_html(downloader: &Downloader, url: &str) -> Result<String> {
    let resp = downloader
        .client()
        .get(url)
        .send()
        .await?
        .error_for_status()?;
    Ok(resp.text().await?)
}

/// Scrapes each term in turn. `tag` prefixes every saved file name and
/// defaults to the term itself.
pub async fn scrape_terms(
    terms: &[String],
    tag: Option<&str>,
    config: &ImageSearchConfig,
) -> Result<Vec<TermSummary>> {
    if terms.is_empty() {
        return Err(ScrapeError::invalid("No search term provided"));
    }
    for term in terms {
        download::check_segment("term", term)?;
    }
    if let Some(tag) = tag {
        download::check_segment("tag", tag)?;
    }

    let downloader = Downloader::new(config)?;
    let mut summaries = Vec::with_capacity(terms.len());

    for term in terms {
        let url = config.search_url_for(term);
        info!(term = %term, url = %url, "searching");

        let page = match fetch_html(&downloader, &url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(term = %term, error = %e, "search page fetch failed");
                summaries.push(TermSummary {
                    term: term.clone(),
                    ..Default::default()
                });
                continue;
            }
        };
        let urls = search::select_urls(&page, config)?;
        info!(term = %term, images = urls.len(), "selected image urls");

        let saved = downloader.save_all(&urls, term, tag.unwrap_or(term)).await;
        summaries.push(TermSummary {
            term: term.clone(),
            selected: urls.len(),
            saved: saved.len(),
        });
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_terms_fail_before_any_request() {
        let err = scrape_terms(&[], None, &ImageSearchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidArgument(m) if m == "No search term provided"));
    }

    #[tokio::test]
    async fn path_like_terms_fail_before_any_request() {
        let terms = vec!["foxes".to_string(), "../etc".to_string()];
        let err = scrape_terms(&terms, None, &ImageSearchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidArgument(_)));
    }
}
