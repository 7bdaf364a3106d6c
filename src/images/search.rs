//! Reading image candidates out of a photo search results page.

use scraper::Html;
use tracing::{debug, warn};

use crate::Result;
use crate::config::ImageSearchConfig;
use crate::html;
use crate::srcset::{self, ExclusionSet, ImageCandidate, SelectionResult};

/// One candidate list per matched image that carries a srcset.
pub fn image_candidates(
    page: &str,
    config: &ImageSearchConfig,
) -> Result<Vec<Vec<ImageCandidate>>> {
    let document = Html::parse_document(page);
    let selector = html::compile(&config.image_selector)?;

    Ok(document
        .select(&selector)
        .filter_map(|img| img.value().attr(&config.srcset_attr))
        .map(srcset::parse_srcset)
        .filter(|candidates| !candidates.is_empty())
        .collect())
}

/// Selection outcome for a whole results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSelection {
    pub urls: Vec<String>,
    /// Images whose srcset was not listed largest-first.
    pub unordered: usize,
}

pub fn select_page(page: &str, config: &ImageSearchConfig) -> Result<PageSelection> {
    let exclusions = ExclusionSet::new(config.exclusions.iter().cloned());
    if exclusions.is_empty() {
        debug!("no exclusion keywords configured");
    }
    let lists = image_candidates(page, config)?;

    let mut selection = PageSelection {
        urls: Vec::with_capacity(lists.len()),
        unordered: 0,
    };
    for candidates in &lists {
        if !srcset::ordering_is_descending(candidates) {
            selection.unordered += 1;
            debug!(first = %candidates[0].url, "srcset not ordered largest-first");
        }
        match srcset::select(candidates, &exclusions) {
            SelectionResult::Url(url) => selection.urls.push(url),
            SelectionResult::None => {
                debug!(variants = candidates.len(), "every variant excluded")
            }
        }
    }
    Ok(selection)
}

/// The chosen URL for each image on the page that has a usable variant.
///
/// Warns once per page when any srcset breaks the largest-first convention;
/// the first survivor is taken regardless.
pub fn select_urls(page: &str, config: &ImageSearchConfig) -> Result<Vec<String>> {
    let selection = select_page(page, config)?;
    if selection.unordered > 0 {
        warn!(
            images = selection.unordered,
            "srcset not ordered largest-first; first surviving variant may not be the largest"
        );
    }
    Ok(selection.urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <figure data-testid="photo-grid-masonry-figure-1">
          <a href="/photos/1"><img srcset="
            https://images.example/photo-1?w=2000 2000w,
            https://images.example/photo-1?w=1000 1000w"></a>
        </figure>
        <figure data-testid="photo-grid-masonry-figure-2">
          <a href="/photos/2"><img src="no-srcset.jpg"></a>
        </figure>
        <figure data-testid="photo-grid-masonry-figure-3">
          <a href="/photos/3"><img srcset="https://plus.example/premium_photo?w=2000 2000w"></a>
        </figure>
        <div><a><img srcset="https://images.example/avatar?w=32 32w"></a></div>
    "#;

    #[test]
    fn collects_only_grid_images_with_srcset() {
        let lists = image_candidates(PAGE, &ImageSearchConfig::default()).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].len(), 2);
    }

    #[test]
    fn drops_images_with_no_surviving_variant() {
        let urls = select_urls(PAGE, &ImageSearchConfig::default()).unwrap();
        assert_eq!(urls, vec!["https://images.example/photo-1".to_string()]);
    }

    #[test]
    fn ascending_srcsets_are_counted_once_each() {
        let page = r#"
            <figure data-testid="photo-grid-masonry-figure">
              <a><img srcset="https://images.example/a?w=100 100w,
                              https://images.example/a?w=200 200w"></a>
            </figure>
            <figure data-testid="photo-grid-masonry-figure">
              <a><img srcset="https://images.example/b?w=400 400w,
                              https://images.example/b?w=200 200w"></a>
            </figure>
        "#;
        let selection = select_page(page, &ImageSearchConfig::default()).unwrap();
        assert_eq!(selection.unordered, 1);
        assert_eq!(
            selection.urls,
            ["https://images.example/a", "https://images.example/b"]
        );
    }
}
