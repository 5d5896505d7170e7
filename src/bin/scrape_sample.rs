//! Small end-to-end probe: fetch one listing page, then the first few
//! title records, and print them as JSON.
//!
//! Usage: scrape_sample [title_type] [max_titles]

use anyhow::Result;
use tracing::info;

use imdb_harvest::infrastructure::logging::init_logging;
use imdb_harvest::{Imdb, SortBy};

fn main() -> Result<()> {
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let title_type = args.next().unwrap_or_else(|| "feature".to_string());
    let max_titles: usize = args.next().and_then(|n| n.parse().ok()).unwrap_or(3);

    let imdb = Imdb::new()?;

    let first_page = imdb
        .listing_pages(&title_type, Some(SortBy::NumVotes), Some(1))
        .next()
        .expect("page count of 1 yields one URL");
    info!("Fetching listing page: {}", first_page);

    let detail_urls = imdb.detail_urls(&first_page)?;
    info!("Found {} titles, extracting the first {}", detail_urls.len(), max_titles);

    for url in detail_urls.iter().take(max_titles) {
        let record = imdb.movie_record(url);
        info!(
            "{}: {} of {} fields populated",
            record.imdb_id.as_deref().unwrap_or("?"),
            record.populated_count(),
            record.fields().len()
        );
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    Ok(())
}
