//! Runtime configuration.
//!
//! Everything has a working default, so a config file is optional. Selector
//! strings live here rather than in the scrapers because the target pages
//! change their markup; swapping a selector should never need a code change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_CLICK_TIMEOUT_MS, DEFAULT_PAGE_SIZE};
use crate::srcset::DEFAULT_EXCLUSIONS;
use crate::{Result, ScrapeError, html};

pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub jobs: JobBoardConfig,
    pub images: ImageSearchConfig,
}

impl Config {
    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| ScrapeError::Config(e.to_string()))
    }

    /// Checks the numeric settings and that every selector compiles.
    pub fn validate(&self) -> Result<()> {
        if self.jobs.page_size == 0 {
            return Err(ScrapeError::Config("jobs.page_size must be at least 1".into()));
        }
        if self.jobs.click_timeout_ms == 0 {
            return Err(ScrapeError::Config("jobs.click_timeout_ms must be at least 1".into()));
        }
        if self.images.timeout_secs == 0 {
            return Err(ScrapeError::Config("images.timeout_secs must be at least 1".into()));
        }
        if !self.images.search_url.contains("{term}") {
            return Err(ScrapeError::Config(
                "images.search_url must contain a `{term}` placeholder".into(),
            ));
        }

        html::compile(&self.jobs.listing_selector)?;
        html::compile(&self.jobs.consent_selector)?;
        html::compile(&self.jobs.load_more_selector)?;
        for chain in self.jobs.fields.chains() {
            for field in chain {
                html::compile(&field.css)?;
            }
        }
        html::compile(&self.images.image_selector)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `scrapers=debug`. `RUST_LOG` wins if set.
    pub level: String,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

/// One way of reading a field: a CSS selector plus, optionally, the attribute
/// to read instead of the element text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub css: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<String>,
}

impl FieldSelector {
    pub fn text(css: &str) -> Self {
        Self {
            css: css.to_string(),
            attr: None,
        }
    }

    pub fn attr(css: &str, attr: &str) -> Self {
        Self {
            css: css.to_string(),
            attr: Some(attr.to_string()),
        }
    }
}

/// Selector chains for each job field. Alternatives are tried in order and
/// the first one that yields something wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFields {
    pub job_name: Vec<FieldSelector>,
    pub job_link: Vec<FieldSelector>,
    pub ng_href: Vec<FieldSelector>,
    pub company_name: Vec<FieldSelector>,
    pub job_location: Vec<FieldSelector>,
    pub work_type: Vec<FieldSelector>,
    pub tags: Vec<FieldSelector>,
    pub salary: Vec<FieldSelector>,
}

impl JobFields {
    pub fn chains(&self) -> [&[FieldSelector]; 8] {
        [
            &self.job_name,
            &self.job_link,
            &self.ng_href,
            &self.company_name,
            &self.job_location,
            &self.work_type,
            &self.tags,
            &self.salary,
        ]
    }
}

impl Default for JobFields {
    fn default() -> Self {
        Self {
            job_name: vec![FieldSelector::text("a.open-button.ng-binding")],
            job_link: vec![FieldSelector::attr("a.open-button.ng-binding", "href")],
            ng_href: vec![FieldSelector::attr("a.open-button.ng-binding", "ng-href")],
            company_name: vec![FieldSelector::text("div.company a")],
            job_location: vec![FieldSelector::text("div.box i.fa-map-marker + span")],
            work_type: vec![FieldSelector::text("div.box i.fa-clock-o + span")],
            tags: vec![FieldSelector::text("div.box i.fa-tags + a")],
            salary: vec![
                FieldSelector::text("div.box i.fa-money + span"),
                FieldSelector::text("div.box.ng-hide i.fa-money + span"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobBoardConfig {
    pub start_url: String,
    pub allowed_domains: Vec<String>,
    pub page_size: u32,
    pub click_timeout_ms: u64,
    pub listing_selector: String,
    pub consent_selector: String,
    pub load_more_selector: String,
    pub webdriver_url: String,
    pub headless: bool,
    /// How long to wait for the listing and consent elements to appear.
    pub wait_timeout_ms: u64,
    pub fields: JobFields,
}

impl Default for JobBoardConfig {
    fn default() -> Self {
        Self {
            start_url: "https://www.workingnomads.com/jobs".to_string(),
            allowed_domains: vec!["www.workingnomads.com".to_string()],
            page_size: DEFAULT_PAGE_SIZE,
            click_timeout_ms: DEFAULT_CLICK_TIMEOUT_MS,
            listing_selector: "div.jobs-list div.job-wrapper".to_string(),
            consent_selector: "#accept-btn".to_string(),
            load_more_selector: "div.show-more-jobs button".to_string(),
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            wait_timeout_ms: 30_000,
            fields: JobFields::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearchConfig {
    /// Search page URL; `{term}` is replaced with the search term.
    pub search_url: String,
    pub image_selector: String,
    pub srcset_attr: String,
    pub exclusions: Vec<String>,
    pub output_dir: String,
    pub extension: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl ImageSearchConfig {
    pub fn search_url_for(&self, term: &str) -> String {
        self.search_url.replace("{term}", term)
    }
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            search_url: "https://unsplash.com/s/photos/{term}".to_string(),
            image_selector: r#"figure[data-testid*="photo-grid-masonry-figure"] a img"#
                .to_string(),
            srcset_attr: "srcset".to_string(),
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            output_dir: "outputs/up-splash".to_string(),
            extension: "jpeg".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}
