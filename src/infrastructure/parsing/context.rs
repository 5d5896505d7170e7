//! Parsing contexts
//!
//! Context objects carry the request-side facts a parser needs beyond the
//! document itself: the page URL for URL-derived fields and the base URL
//! for resolving relative hrefs.

use crate::infrastructure::config::imdb;

/// Context for parsing a listing page
#[derive(Debug, Clone)]
pub struct ListingParseContext {
    /// Base URL prefixed onto relative title hrefs
    pub base_url: String,
}

impl ListingParseContext {
    /// Context resolving against the IMDb site root
    pub fn new() -> Self {
        Self {
            base_url: imdb::BASE_URL.to_string(),
        }
    }

    /// Context resolving against a custom base, for mirrors and tests
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ListingParseContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context for parsing a title detail page
#[derive(Debug, Clone)]
pub struct DetailParseContext {
    /// URL the document was fetched from; source of the `imdb_id` field
    pub url: String,
}

impl DetailParseContext {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
