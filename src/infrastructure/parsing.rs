//! HTML parsing infrastructure
//!
//! Trait-based parsing architecture: each parser is constructed once with
//! its CSS selectors compiled up front, then applied to any number of
//! fetched documents. Listing pages and title detail pages get separate
//! parsers because their extraction policies differ — listing extraction
//! skips broken items, detail extraction collapses every per-field miss
//! into an absent value.

pub mod context;
pub mod detail_parser;
pub mod error;
pub mod listing_parser;

// Re-export public types
pub use context::{DetailParseContext, ListingParseContext};
pub use detail_parser::MovieDetailParser;
pub use error::{ParsingError, ParsingResult};
pub use listing_parser::ListingParser;

use scraper::Html;

/// Parser trait with context support
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse a fetched document with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output>;
}
