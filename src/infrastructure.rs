//! Infrastructure layer: site constants, HTTP fetching and HTML parsing

pub mod config;
pub mod http_client;
pub mod logging;
pub mod parsing;

pub use http_client::{HttpClient, HttpClientConfig};
pub use parsing::{ListingParser, MovieDetailParser, ParsingError, ParsingResult};
