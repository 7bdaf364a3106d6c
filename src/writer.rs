use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::jobs::JobListing;

#[derive(Serialize)]
struct Row<'a> {
    job_name: &'a str,
    company_name: Option<&'a str>,
    job_location: Option<&'a str>,
    work_type: Option<&'a str>,
    salary: Option<&'a str>,
    tags: String,
    job_link: Option<&'a str>,
    ng_href: Option<&'a str>,
    scraped_at: String,
}

impl<'a> From<&'a JobListing> for Row<'a> {
    fn from(job: &'a JobListing) -> Self {
        Self {
            job_name: &job.job_name,
            company_name: job.company_name.as_deref(),
            job_location: job.job_location.as_deref(),
            work_type: job.work_type.as_deref(),
            salary: job.salary.as_deref(),
            tags: job.tags.join("|"),
            job_link: job.job_link.as_deref(),
            ng_href: job.ng_href.as_deref(),
            scraped_at: job.scraped_at.to_rfc3339(),
        }
    }
}

pub fn save_to_csv(jobs: &[JobListing], path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for job in jobs {
        writer.serialize(Row::from(job))?;
    }

    writer.flush()?;
    Ok(())
}
