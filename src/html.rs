//! Selector helpers shared by both scrapers.

use scraper::{ElementRef, Selector};

use crate::config::FieldSelector;
use crate::{Result, ScrapeError};

pub fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::selector(css, e))
}

/// A [`FieldSelector`] with its CSS already parsed.
#[derive(Debug, Clone)]
pub struct CompiledField {
    selector: Selector,
    attr: Option<String>,
}

impl CompiledField {
    pub fn new(field: &FieldSelector) -> Result<Self> {
        Ok(Self {
            selector: compile(&field.css)?,
            attr: field.attr.clone(),
        })
    }

    fn values<'a>(&'a self, scope: ElementRef<'a>) -> impl Iterator<Item = String> + 'a {
        scope.select(&self.selector).filter_map(move |el| {
            let value = match &self.attr {
                Some(name) => el.value().attr(name).map(|v| v.trim().to_string())?,
                None => clean_text(el.text()),
            };
            (!value.is_empty()).then_some(value)
        })
    }
}

pub fn compile_chain(chain: &[FieldSelector]) -> Result<Vec<CompiledField>> {
    chain.iter().map(CompiledField::new).collect()
}

/// First non-empty value, trying each alternative in order.
pub fn first_value(scope: ElementRef<'_>, chain: &[CompiledField]) -> Option<String> {
    chain.iter().find_map(|field| field.values(scope).next())
}

/// Every non-empty value matched by the first alternative that matches anything.
pub fn all_values(scope: ElementRef<'_>, chain: &[CompiledField]) -> Vec<String> {
    chain
        .iter()
        .map(|field| field.values(scope).collect::<Vec<_>>())
        .find(|values| !values.is_empty())
        .unwrap_or_default()
}

/// Joins text fragments, collapsing newlines and runs of whitespace to one space.
pub fn clean_text<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let text = fragments.collect::<Vec<_>>().join(" ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
