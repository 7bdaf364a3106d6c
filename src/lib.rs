pub mod config;
pub mod error;
pub mod html;
pub mod images;
pub mod jobs;
pub mod logging;
pub mod pagination;
pub mod srcset;
pub mod writer;

pub use config::{Config, FieldSelector, ImageSearchConfig, JobBoardConfig, LogConfig};
pub use error::ScrapeError;
pub use jobs::{JobListing, JobListingBuilder};
pub use pagination::{PaginationPlan, PaginationRequest, plan};
pub use srcset::{ExclusionSet, ImageCandidate, SelectionResult, select};
pub use writer::save_to_csv;

pub type Result<T> = std::result::Result<T, ScrapeError>;
