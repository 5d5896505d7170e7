//! IMDb movie metadata extraction
//!
//! This crate fetches IMDb listing and title pages and parses known DOM
//! patterns into flat [`MovieRecord`]s. It covers two concerns: generating
//! the URL sequence for paginated ranked listings, and applying per-field
//! extraction rules to a parsed title page. Fetching is synchronous and
//! sequential; every field rule is independently fault-isolated, so a
//! missing element yields an absent field instead of aborting the record.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the public surface for easier access
pub use application::imdb::Imdb;
pub use domain::movie::MovieRecord;
pub use domain::pagination::{SortBy, listing_page_urls};
pub use infrastructure::http_client::{HttpClient, HttpClientConfig};
