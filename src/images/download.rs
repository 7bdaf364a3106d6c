use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::ImageSearchConfig;
use crate::{Result, ScrapeError};

/// Last non-empty path segment of `url`, ignoring any query string or fragment.
pub fn file_name(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').find(|s| !s.is_empty() && !s.contains(':'))
}

/// Rejects terms and tags that would not stay a single path segment.
pub fn check_segment(what: &str, value: &str) -> Result<()> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        return Err(ScrapeError::invalid(format!(
            "{what} `{value}` cannot be used as a file or directory name"
        )));
    }
    Ok(())
}

/// `out_dir/<term>/<tag>-<file name>.<extension>`
pub fn target_path(
    out_dir: &Path,
    term: &str,
    tag: &str,
    url: &str,
    extension: &str,
) -> Result<PathBuf> {
    check_segment("term", term)?;
    check_segment("tag", tag)?;
    let name = file_name(url)
        .ok_or_else(|| ScrapeError::invalid(format!("no file name in `{url}`")))?;
    Ok(out_dir.join(term).join(format!("{tag}-{name}.{extension}")))
}

fn megabytes(len: usize) -> f64 {
    (len as f64 / 1024.0 / 1024.0 * 100.0).round() / 100.0
}

#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    out_dir: PathBuf,
    extension: String,
}

impl Downloader {
    pub fn new(config: &ImageSearchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            out_dir: PathBuf::from(&config.output_dir),
            extension: config.extension.clone(),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// Downloads one image and writes it under the term directory.
    pub async fn save(&self, url: &str, term: &str, tag: &str) -> Result<PathBuf> {
        let dest = target_path(&self.out_dir, term, tag, url, &self.extension)?;

        info!("Downloading {url}...");
        let bytes = self.fetch(url).await?;

        if let Err(e) = image::guess_format(&bytes) {
            warn!(url, error = %e, "payload does not look like an image");
        }

        if let Some(dir) = dest.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&dest, &bytes).await?;

        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Saved {name}, with size {} MB.", megabytes(bytes.len()));
        Ok(dest)
    }

    /// Saves every URL, carrying on past individual failures. Returns the
    /// paths that were written.
    pub async fn save_all(&self, urls: &[String], term: &str, tag: &str) -> Vec<PathBuf> {
        let mut saved = Vec::with_capacity(urls.len());
        for url in urls {
            match self.save(url, term, tag).await {
                Ok(path) => saved.push(path),
                Err(e) => warn!(url = %url, error = %e, "download failed"),
            }
        }
        saved
    }
}
