use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Result, ScrapeError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobListing {
    pub job_name: String,
    pub job_link: Option<String>,
    pub ng_href: Option<String>,
    pub company_name: Option<String>,
    pub job_location: Option<String>,
    pub work_type: Option<String>,
    pub tags: Vec<String>,
    pub salary: Option<String>,
    pub scraped_at: DateTime<Utc>,
}

impl JobListing {
    pub fn builder() -> JobListingBuilder {
        JobListingBuilder::default()
    }
}

/// Assembles a [`JobListing`] one field at a time.
#[derive(Debug, Default, Clone)]
pub struct JobListingBuilder {
    job_name: Option<String>,
    job_link: Option<String>,
    ng_href: Option<String>,
    company_name: Option<String>,
    job_location: Option<String>,
    work_type: Option<String>,
    tags: Vec<String>,
    salary: Option<String>,
    scraped_at: Option<DateTime<Utc>>,
}

impl JobListingBuilder {
    pub fn job_name(mut self, value: Option<String>) -> Self {
        self.job_name = value;
        self
    }

    pub fn job_link(mut self, value: Option<String>) -> Self {
        self.job_link = value;
        self
    }

    pub fn ng_href(mut self, value: Option<String>) -> Self {
        self.ng_href = value;
        self
    }

    pub fn company_name(mut self, value: Option<String>) -> Self {
        self.company_name = value;
        self
    }

    pub fn job_location(mut self, value: Option<String>) -> Self {
        self.job_location = value;
        self
    }

    pub fn work_type(mut self, value: Option<String>) -> Self {
        self.work_type = value;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn salary(mut self, value: Option<String>) -> Self {
        self.salary = value;
        self
    }

    pub fn scraped_at(mut self, at: DateTime<Utc>) -> Self {
        self.scraped_at = Some(at);
        self
    }

    /// Fails if there is no job name; every other field is optional.
    pub fn build(self) -> Result<JobListing> {
        let job_name = self
            .job_name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ScrapeError::invalid("job listing has no job name"))?;

        Ok(JobListing {
            job_name,
            job_link: self.job_link,
            ng_href: self.ng_href,
            company_name: self.company_name,
            job_location: self.job_location,
            work_type: self.work_type,
            tags: self.tags,
            salary: self.salary,
            scraped_at: self.scraped_at.unwrap_or_else(Utc::now),
        })
    }
}
