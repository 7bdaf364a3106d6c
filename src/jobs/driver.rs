//! Browser session for the job board.

use std::time::Duration;

use thirtyfour::prelude::*;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::{DEFAULT_USER_AGENT, JobBoardConfig};
use crate::jobs::script;
use crate::pagination::PaginationPlan;
use crate::{Result, ScrapeError};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub async fn open(config: &JobBoardConfig) -> Result<WebDriver> {
    let mut caps = DesiredCapabilities::chrome();

    let mut args: Vec<String> = vec![
        "--disable-gpu".into(),
        "--no-sandbox".into(),
        "--disable-dev-shm-usage".into(),
        "--disable-blink-features=AutomationControlled".into(),
        format!("--user-agent={DEFAULT_USER_AGENT}"),
    ];
    if config.headless {
        args.push("--headless=new".into());
    }
    for a in &args {
        caps.add_arg(a)?;
    }

    let driver = WebDriver::new(config.webdriver_url.as_str(), caps).await?;
    Ok(driver)
}

/// Rejects start URLs whose host is not in `allowed`. An empty list allows any host.
pub fn ensure_allowed(start_url: &str, allowed: &[String]) -> Result<()> {
    let url = Url::parse(start_url)
        .map_err(|e| ScrapeError::invalid(format!("bad start url `{start_url}`: {e}")))?;
    if allowed.is_empty() {
        return Ok(());
    }
    match url.host_str() {
        Some(host) if allowed.iter().any(|d| d == host) => Ok(()),
        host => Err(ScrapeError::invalid(format!(
            "host {:?} is not in the allowed domains {:?}",
            host.unwrap_or_default(),
            allowed
        ))),
    }
}

/// Script timeout for the load-more script: one `timeout_ms` per click plus
/// headroom for the clicks themselves. Saturates instead of overflowing.
pub fn script_budget(plan: &PaginationPlan) -> Duration {
    let waits = u64::from(plan.load_actions).saturating_add(1);
    Duration::from_millis(plan.timeout_ms.saturating_mul(waits).saturating_add(10_000))
}

/// Opens the listing page, dismisses the consent banner, runs the load-more
/// script and returns the final page source.
pub async fn load_listing_page(
    driver: &WebDriver,
    config: &JobBoardConfig,
    plan: &PaginationPlan,
) -> Result<String> {
    ensure_allowed(&config.start_url, &config.allowed_domains)?;

    info!(url = %config.start_url, "opening job board");
    driver.goto(config.start_url.as_str()).await?;

    let wait = Duration::from_millis(config.wait_timeout_ms);
    driver
        .query(By::Css(config.listing_selector.clone()))
        .wait(wait, POLL_INTERVAL)
        .first()
        .await?;

    match driver
        .query(By::Css(config.consent_selector.clone()))
        .wait(wait, POLL_INTERVAL)
        .first()
        .await
    {
        Ok(button) => button.click().await?,
        Err(e) => warn!(selector = %config.consent_selector, error = %e, "no consent banner"),
    }

    driver.set_script_timeout(script_budget(plan)).await?;

    let js = script::render(plan, &config.load_more_selector);
    let clicks: u32 = driver.execute_async(js, Vec::new()).await?.convert()?;
    if clicks < plan.load_actions {
        warn!(planned = plan.load_actions, clicks, "load-more button ran out early");
    } else {
        debug!(clicks, "load-more finished");
    }

    Ok(driver.source().await?)
}

/// Runs a whole session and always shuts the browser down afterwards.
pub async fn fetch_listing_html(config: &JobBoardConfig, plan: &PaginationPlan) -> Result<String> {
    let driver = open(config).await?;
    let result = load_listing_page(&driver, config, plan).await;
    if let Err(e) = driver.quit().await {
        warn!(error = %e, "failed to close webdriver session");
    }
    result
}
