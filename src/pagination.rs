//! Load-more planning for paginated listing pages.
//!
//! The listing page reveals `page_size` items per "load more" click. Given a
//! target item count, the planner works out how many extra clicks the browser
//! has to make before the page holds enough items to extract.

use crate::{Result, ScrapeError};

pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_CLICK_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    pub target_count: u32,
    pub page_size: u32,
    pub click_timeout_ms: u64,
}

impl PaginationRequest {
    pub fn new(target_count: u32) -> Self {
        Self {
            target_count,
            page_size: DEFAULT_PAGE_SIZE,
            click_timeout_ms: DEFAULT_CLICK_TIMEOUT_MS,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_click_timeout_ms(mut self, click_timeout_ms: u64) -> Self {
        self.click_timeout_ms = click_timeout_ms;
        self
    }
}

/// Number of "load more" clicks to perform and how long to wait after each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPlan {
    pub load_actions: u32,
    pub timeout_ms: u64,
}

pub fn plan(request: PaginationRequest) -> Result<PaginationPlan> {
    if request.target_count < 1 {
        return Err(ScrapeError::invalid("target count must be at least 1"));
    }
    if request.page_size < 1 {
        return Err(ScrapeError::invalid("page size must be at least 1"));
    }

    let pages = request.target_count.div_ceil(request.page_size);

    Ok(PaginationPlan {
        load_actions: pages.saturating_sub(1),
        timeout_ms: request.click_timeout_ms,
    })
}

/// Parses a target count coming from the command line or a config string.
///
/// Anything that is not a positive whole number is rejected: `0`, `-5`,
/// `1.5` and `abc` all fail with [`ScrapeError::InvalidArgument`].
pub fn parse_target_count(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let count: u32 = trimmed
        .parse()
        .map_err(|_| ScrapeError::invalid(format!("`{trimmed}` is not a positive integer")))?;
    if count == 0 {
        return Err(ScrapeError::invalid("target count must be at least 1"));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(n: u32) -> u32 {
        plan(PaginationRequest::new(n)).unwrap().load_actions
    }

    #[test]
    fn single_page_needs_no_clicks() {
        assert_eq!(actions(1), 0);
        assert_eq!(actions(100), 0);
    }

    #[test]
    fn boundaries_round_up() {
        assert_eq!(actions(101), 1);
        assert_eq!(actions(200), 1);
        assert_eq!(actions(201), 2);
    }

    #[test]
    fn zero_target_rejected() {
        let err = plan(PaginationRequest::new(0)).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidArgument(_)));
    }

    #[test]
    fn zero_page_size_rejected() {
        let req = PaginationRequest::new(10).with_page_size(0);
        assert!(matches!(plan(req), Err(ScrapeError::InvalidArgument(_))));
    }

    #[test]
    fn custom_page_size_and_timeout() {
        let req = PaginationRequest::new(55)
            .with_page_size(20)
            .with_click_timeout_ms(500);
        assert_eq!(
            plan(req).unwrap(),
            PaginationPlan {
                load_actions: 2,
                timeout_ms: 500
            }
        );
    }

    #[test]
    fn parse_target_count_rejects_junk() {
        assert_eq!(parse_target_count(" 150 ").unwrap(), 150);
        for bad in ["0", "-3", "1.5", "", "ten"] {
            assert!(
                matches!(parse_target_count(bad), Err(ScrapeError::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
