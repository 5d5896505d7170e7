//! Listing-page parser
//!
//! Extracts absolute title detail URLs from an IMDb ranked listing page.
//! Each ranked item carries an `h3.lister-item-header` whose anchor links
//! to the title page with a relative href (`/title/tt0133093/`).

use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use super::context::ListingParseContext;
use super::error::{ParsingError, ParsingResult};
use super::ContextualParser;

/// Parser for extracting title detail URLs from listing pages
pub struct ListingParser {
    item_header: Selector,
    anchor: Selector,
}

impl ListingParser {
    pub fn new() -> ParsingResult<Self> {
        Ok(Self {
            item_header: compile("h3.lister-item-header")?,
            anchor: compile("a")?,
        })
    }
}

fn compile(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}

impl ContextualParser for ListingParser {
    type Output = Vec<String>;
    type Context = ListingParseContext;

    /// Collect the detail URL of every ranked item on the page
    ///
    /// Items with a missing anchor or href are skipped; a page with no
    /// ranked items at all yields an empty list rather than an error.
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let base = Url::parse(&context.base_url)
            .map_err(|e| ParsingError::url_resolution_failed(&context.base_url, e))?;

        let mut urls = Vec::new();
        for (index, header) in html.select(&self.item_header).enumerate() {
            let href = header
                .select(&self.anchor)
                .next()
                .and_then(|a| a.value().attr("href"));

            match href {
                Some(href) => match base.join(href) {
                    Ok(resolved) => urls.push(resolved.to_string()),
                    Err(e) => warn!("Skipping item {}: unresolvable href '{}': {}", index, href, e),
                },
                None => warn!("Skipping item {}: header has no linked anchor", index),
            }
        }

        debug!("Extracted {} title URLs from listing page", urls.len());
        Ok(urls)
    }
}
