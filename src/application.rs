//! Application layer: the IMDb-facing orchestration API

pub mod imdb;

pub use imdb::Imdb;
