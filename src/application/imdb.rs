//! IMDb orchestration facade
//!
//! Ties the pieces together: listing-page URL generation, detail-URL
//! extraction from fetched listing pages, and record assembly from fetched
//! title pages. Fetches are sequential and blocking; the caller drives the
//! iteration and owns any pacing between requests.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::domain::movie::MovieRecord;
use crate::domain::pagination::{self, SortBy};
use crate::infrastructure::config::{canonical_title_url, defaults};
use crate::infrastructure::http_client::{HttpClient, HttpClientConfig};
use crate::infrastructure::parsing::{
    ContextualParser, DetailParseContext, ListingParseContext, ListingParser, MovieDetailParser,
};

/// High-level client for scraping IMDb listings and title pages
///
/// Selectors are compiled once at construction; one `Imdb` instance can
/// process any number of pages.
pub struct Imdb {
    http: HttpClient,
    listing_parser: ListingParser,
    detail_parser: MovieDetailParser,
}

impl Imdb {
    /// Create a client with default HTTP configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom HTTP configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
            listing_parser: ListingParser::new().context("listing parser construction")?,
            detail_parser: MovieDetailParser::new().context("detail parser construction")?,
        })
    }

    /// Listing-page URLs for a title category, optionally sorted
    ///
    /// Pure generation, no network. See [`pagination::listing_page_urls`]
    /// for the offset scheme and the 10,000-result limitation.
    pub fn listing_pages(
        &self,
        title_type: &str,
        sort: Option<SortBy>,
        page_count: Option<u32>,
    ) -> impl Iterator<Item = String> {
        pagination::listing_page_urls(
            title_type,
            sort,
            page_count.unwrap_or(defaults::PAGE_COUNT),
        )
    }

    /// Fetch a listing page and extract the detail URL of every ranked item
    pub fn detail_urls(&self, listing_url: &str) -> Result<Vec<String>> {
        let html = self
            .http
            .fetch_html(listing_url)
            .with_context(|| format!("fetching listing page {listing_url}"))?;
        let urls = self
            .listing_parser
            .parse_with_context(&html, &ListingParseContext::new())?;
        info!("Listing page {} yielded {} titles", listing_url, urls.len());
        Ok(urls)
    }

    /// Fetch a title page and assemble its movie record
    ///
    /// Never fails: a failed fetch yields a record where only the
    /// URL-derived `imdb_id` is populated.
    pub fn movie_record(&self, detail_url: &str) -> MovieRecord {
        let context = DetailParseContext::new(detail_url);

        let html = match self.http.fetch_html(detail_url) {
            Ok(html) => html,
            Err(e) => {
                warn!("Fetch failed for {}, record will be empty: {}", detail_url, e);
                return MovieRecord {
                    imdb_id: MovieDetailParser::extract_imdb_id(detail_url),
                    ..MovieRecord::default()
                };
            }
        };

        match self.detail_parser.parse_with_context(&html, &context) {
            Ok(record) => record,
            Err(e) => {
                warn!("Parse failed for {}: {}", detail_url, e);
                MovieRecord {
                    imdb_id: MovieDetailParser::extract_imdb_id(detail_url),
                    ..MovieRecord::default()
                }
            }
        }
    }

    /// Assemble the movie record for a known IMDb title identifier
    pub fn movie_record_by_id(&self, imdb_id: &str) -> MovieRecord {
        self.movie_record(&canonical_title_url(imdb_id))
    }
}
