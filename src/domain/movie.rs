use serde::{Deserialize, Serialize};

/// Flat movie metadata record extracted from one IMDb title page
///
/// Every field is optional: extraction rules collapse any miss (absent tag,
/// attribute, sibling or index) into `None` rather than failing the record.
/// `imdb_id` is derived from the page URL, not the document, so it survives
/// even a failed fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: Option<String>,
    pub year: Option<String>,
    pub runtime: Option<String>,
    pub imdb_rating: Option<String>,
    pub imdb_votes: Option<String>,
    pub imdb_id: Option<String>,
    pub metascore_rating: Option<String>,
    pub director: Option<String>,
    pub star_1: Option<String>,
    pub star_2: Option<String>,
    pub star_3: Option<String>,
    pub genre: Option<String>,
    pub summary: Option<String>,
    pub awards: Option<String>,
    pub tagline: Option<String>,
    pub release_date: Option<String>,
    pub also_known_as: Option<String>,
    pub filming_locations: Option<String>,
    pub production_company: Option<String>,
    pub mpaa_rating: Option<String>,
    pub mpaa_reasoning: Option<String>,
    pub keywords: Option<String>,
    pub writers: Option<String>,
    pub sound_mix: Option<String>,
    pub budget: Option<String>,
    pub opening_weekend: Option<String>,
    pub gross: Option<String>,
    pub worldwide_gross: Option<String>,
}

impl MovieRecord {
    /// View the record as (field name, value) pairs in declaration order
    ///
    /// Useful for CSV writers and other flat consumers that need the column
    /// set without hardcoding it.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("title", self.title.as_deref()),
            ("year", self.year.as_deref()),
            ("runtime", self.runtime.as_deref()),
            ("imdb_rating", self.imdb_rating.as_deref()),
            ("imdb_votes", self.imdb_votes.as_deref()),
            ("imdb_id", self.imdb_id.as_deref()),
            ("metascore_rating", self.metascore_rating.as_deref()),
            ("director", self.director.as_deref()),
            ("star_1", self.star_1.as_deref()),
            ("star_2", self.star_2.as_deref()),
            ("star_3", self.star_3.as_deref()),
            ("genre", self.genre.as_deref()),
            ("summary", self.summary.as_deref()),
            ("awards", self.awards.as_deref()),
            ("tagline", self.tagline.as_deref()),
            ("release_date", self.release_date.as_deref()),
            ("also_known_as", self.also_known_as.as_deref()),
            ("filming_locations", self.filming_locations.as_deref()),
            ("production_company", self.production_company.as_deref()),
            ("mpaa_rating", self.mpaa_rating.as_deref()),
            ("mpaa_reasoning", self.mpaa_reasoning.as_deref()),
            ("keywords", self.keywords.as_deref()),
            ("writers", self.writers.as_deref()),
            ("sound_mix", self.sound_mix.as_deref()),
            ("budget", self.budget.as_deref()),
            ("opening_weekend", self.opening_weekend.as_deref()),
            ("gross", self.gross.as_deref()),
            ("worldwide_gross", self.worldwide_gross.as_deref()),
        ]
    }

    /// Number of fields that carry a value
    pub fn populated_count(&self) -> usize {
        self.fields().iter().filter(|(_, v)| v.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_fully_absent() {
        let record = MovieRecord::default();
        assert_eq!(record.populated_count(), 0);
        assert!(record.fields().iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn fields_cover_every_column() {
        let record = MovieRecord::default();
        assert_eq!(record.fields().len(), 28);
    }

    #[test]
    fn populated_count_tracks_values() {
        let record = MovieRecord {
            title: Some("The Matrix".to_string()),
            imdb_id: Some("tt0133093".to_string()),
            ..Default::default()
        };
        assert_eq!(record.populated_count(), 2);
    }

    #[test]
    fn record_serializes_to_flat_json() {
        let record = MovieRecord {
            title: Some("The Matrix".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "The Matrix");
        assert!(json["year"].is_null());
    }
}
