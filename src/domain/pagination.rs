//! Listing-page URL generation for IMDb ranked search
//!
//! IMDb ranks titles under `/search/title/` with 50 results per page; the
//! first page covers ranks 1-50, the second starts at rank 51, and each
//! further page advances the `start` offset by 50. The whole sequence is a
//! pure function of the inputs, so it can be produced (and re-produced)
//! without any network access.
//!
//! Known limitation, inherited from the site: past 10,000 ranked results the
//! `start` offset stops working and the real pagination token becomes an
//! opaque hash that can only be obtained by visiting the preceding page.
//! URLs generated beyond that point will not resolve to the expected ranks.

use crate::infrastructure::config::{defaults, imdb};

/// Sort keys accepted by IMDb's ranked search
///
/// Omitting the sort key ranks by popularity, the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    NumVotes,
    BoxOfficeGrossUs,
    Runtime,
    Year,
    ReleaseDate,
    Alpha,
}

impl SortBy {
    /// Query-string token for this sort key
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::NumVotes => "num_votes",
            Self::BoxOfficeGrossUs => "boxoffice_gross_us",
            Self::Runtime => "runtime",
            Self::Year => "year",
            Self::ReleaseDate => "release_date",
            Self::Alpha => "alpha",
        }
    }
}

/// Generate the listing-page URL sequence for a title category
///
/// Yields exactly `page_count` URLs with `start` offsets 1, 51, 101, ...
/// ascending sort order is applied when a sort key is given.
pub fn listing_page_urls(
    title_type: &str,
    sort: Option<SortBy>,
    page_count: u32,
) -> impl Iterator<Item = String> {
    let endpoint = format!("{}{}", imdb::SEARCH_TITLE_URL, title_type);
    let sort_param = sort.map(SortBy::as_param);

    (1..=page_count * defaults::RESULTS_PER_PAGE)
        .step_by(defaults::RESULTS_PER_PAGE as usize)
        .map(move |start| match sort_param {
            Some(param) => format!("{endpoint}&sort={param},asc&start={start}"),
            None => format!("{endpoint}&start={start}"),
        })
}
