//! Site constants and crate-wide defaults
//!
//! Endpoint URLs are fixed properties of IMDb, not user configuration, so
//! they live here as constants rather than in a config file.

/// IMDb endpoint constants
pub mod imdb {
    /// Site root, prefixed onto relative title hrefs from listing pages
    pub const BASE_URL: &str = "https://www.imdb.com";

    /// Ranked title search endpoint; append a title-type category
    pub const SEARCH_TITLE_URL: &str = "https://www.imdb.com/search/title/?title_type=";
}

/// Default values shared across the crate
pub mod defaults {
    /// Listing pages generated when the caller gives no page count
    pub const PAGE_COUNT: u32 = 200;

    /// Ranked results per listing page; fixed by the site
    pub const RESULTS_PER_PAGE: u32 = 50;

    /// HTTP request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// Browser-like user agent; IMDb serves a reduced page to unknown agents
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
}

/// Build the canonical detail-page URL for an IMDb title identifier
pub fn canonical_title_url(imdb_id: &str) -> String {
    format!("{}/title/{}/", imdb::BASE_URL, imdb_id)
}
