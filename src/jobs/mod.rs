//! Job board scraper: page through the listing with a real browser, then
//! pull one [`JobListing`] out of each listing container.

pub mod driver;
pub mod listing;
pub mod script;

use chrono::Utc;
use scraper::Html;
use tracing::{debug, info};

use crate::Result;
use crate::config::JobBoardConfig;
use crate::html::{self, CompiledField};
use crate::pagination::{self, PaginationPlan, PaginationRequest};

pub use listing::{JobListing, JobListingBuilder};

struct CompiledFields {
    job_name: Vec<CompiledField>,
    job_link: Vec<CompiledField>,
    ng_href: Vec<CompiledField>,
    company_name: Vec<CompiledField>,
    job_location: Vec<CompiledField>,
    work_type: Vec<CompiledField>,
    tags: Vec<CompiledField>,
    salary: Vec<CompiledField>,
}

impl CompiledFields {
    fn new(config: &JobBoardConfig) -> Result<Self> {
        let f = &config.fields;
        Ok(Self {
            job_name: html::compile_chain(&f.job_name)?,
            job_link: html::compile_chain(&f.job_link)?,
            ng_href: html::compile_chain(&f.ng_href)?,
            company_name: html::compile_chain(&f.company_name)?,
            job_location: html::compile_chain(&f.job_location)?,
            work_type: html::compile_chain(&f.work_type)?,
            tags: html::compile_chain(&f.tags)?,
            salary: html::compile_chain(&f.salary)?,
        })
    }
}

pub fn plan_for(config: &JobBoardConfig, target_count: u32) -> Result<PaginationPlan> {
    pagination::plan(
        PaginationRequest::new(target_count)
            .with_page_size(config.page_size)
            .with_click_timeout_ms(config.click_timeout_ms),
    )
}

/// Extracts every listing from a rendered job board page.
///
/// Containers without a job name are skipped.
pub fn parse_listings(page: &str, config: &JobBoardConfig) -> Result<Vec<JobListing>> {
    let document = Html::parse_document(page);
    let container = html::compile(&config.listing_selector)?;
    let fields = CompiledFields::new(config)?;
    let scraped_at = Utc::now();

    let mut listings = Vec::new();
    for (idx, job) in document.select(&container).enumerate() {
        let built = JobListing::builder()
            .job_name(html::first_value(job, &fields.job_name))
            .job_link(html::first_value(job, &fields.job_link))
            .ng_href(html::first_value(job, &fields.ng_href))
            .company_name(html::first_value(job, &fields.company_name))
            .job_location(html::first_value(job, &fields.job_location))
            .work_type(html::first_value(job, &fields.work_type))
            .tags(html::all_values(job, &fields.tags))
            .salary(html::first_value(job, &fields.salary))
            .scraped_at(scraped_at)
            .build();

        match built {
            Ok(listing) => listings.push(listing),
            Err(e) => debug!(index = idx, error = %e, "skipping listing"),
        }
    }

    Ok(listings)
}

/// Loads enough of the board to cover `target_count` listings and returns at
/// most that many.
pub async fn scrape(config: &JobBoardConfig, target_count: u32) -> Result<Vec<JobListing>> {
    let plan = plan_for(config, target_count)?;
    info!(
        target = target_count,
        load_actions = plan.load_actions,
        timeout_ms = plan.timeout_ms,
        "planned pagination"
    );

    let page = driver::fetch_listing_html(config, &plan).await?;
    let mut listings = parse_listings(&page, config)?;
    info!(found = listings.len(), "parsed job listings");

    listings.truncate(target_count as usize);
    Ok(listings)
}
