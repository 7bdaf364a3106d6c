//! Picking one image URL out of a responsive-image (`srcset`) attribute.

use std::collections::BTreeSet;

pub const DEFAULT_EXCLUSIONS: [&str; 3] = ["plus", "profile", "premium"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub url: String,
    /// Width (`400w`) or density (`2x`) token; empty when the entry has none.
    pub descriptor: String,
}

impl ImageCandidate {
    pub fn new(url: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            descriptor: descriptor.into(),
        }
    }

    /// Numeric value of the descriptor, if it is a `w` or `x` token.
    pub fn descriptor_value(&self) -> Option<f64> {
        let d = self.descriptor.trim();
        d.strip_suffix('w')
            .or_else(|| d.strip_suffix('x'))
            .and_then(|n| n.parse().ok())
    }
}

/// URL substrings that disqualify a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keywords.into_iter().map(Into::into).collect())
    }

    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn excludes(&self, url: &str) -> bool {
        self.0.iter().any(|k| url.contains(k.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResult {
    Url(String),
    None,
}

/// Candidates whose URL contains no exclusion keyword, in input order.
pub fn surviving<'a>(
    candidates: &'a [ImageCandidate],
    exclusions: &'a ExclusionSet,
) -> impl Iterator<Item = &'a ImageCandidate> + 'a {
    candidates.iter().filter(|c| !exclusions.excludes(&c.url))
}

/// Takes the first surviving candidate and strips its query string.
///
/// The source lists variants from highest to lowest resolution, so the first
/// survivor is the best one left. See [`ordering_is_descending`] for checking
/// that assumption against live pages.
pub fn select(candidates: &[ImageCandidate], exclusions: &ExclusionSet) -> SelectionResult {
    match surviving(candidates, exclusions).next() {
        Some(c) => SelectionResult::Url(strip_query(&c.url).to_string()),
        None => SelectionResult::None,
    }
}

pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// Splits a `srcset` value into candidates.
///
/// Entries are separated by a comma followed by whitespace, so commas inside
/// URLs survive. The first whitespace run inside an entry separates URL from
/// descriptor.
pub fn parse_srcset(raw: &str) -> Vec<ImageCandidate> {
    let mut entries = Vec::new();
    let mut start = 0;
    let bytes = raw.as_bytes();

    for (i, b) in bytes.iter().enumerate() {
        if *b == b',' && bytes.get(i + 1).is_none_or(|n| n.is_ascii_whitespace()) {
            entries.push(&raw[start..i]);
            start = i + 1;
        }
    }
    entries.push(&raw[start..]);

    entries
        .into_iter()
        .filter_map(|entry| {
            let mut parts = entry.split_whitespace();
            let url = parts.next()?;
            let descriptor = parts.collect::<Vec<_>>().join(" ");
            Some(ImageCandidate::new(url, descriptor))
        })
        .collect()
}

/// Whether the numeric descriptors never increase from one entry to the next.
///
/// Entries without a readable descriptor are ignored. Lists with fewer than
/// two readable descriptors count as ordered.
pub fn ordering_is_descending(candidates: &[ImageCandidate]) -> bool {
    let values: Vec<f64> = candidates
        .iter()
        .filter_map(ImageCandidate::descriptor_value)
        .collect();
    values.windows(2).all(|w| w[0] >= w[1])
}
