//! Domain layer: pure data and pure logic
//!
//! Nothing in this module performs IO. Movie records are plain data and
//! listing-page URL generation is a pure function of its inputs.

pub mod movie;
pub mod pagination;

pub use movie::MovieRecord;
pub use pagination::{SortBy, listing_page_urls};
