//! Title detail-page parser
//!
//! One extraction rule per metadata field, every rule independently
//! fault-isolated: a missing tag, attribute, sibling or index collapses to
//! `None` for that field alone. A title with no critic score must still
//! yield its other two dozen fields, so no error ever crosses a field
//! boundary.
//!
//! The rules target the classic IMDb title-page markup: labeled `h4`
//! elements inside `txt-block`/`credit_summary_item` containers, with the
//! values as trailing text nodes or sibling anchors.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::ContextualParser;
use super::context::DetailParseContext;
use super::error::{ParsingError, ParsingResult};
use crate::domain::movie::MovieRecord;

/// Parser for extracting movie metadata fields from title pages
pub struct MovieDetailParser {
    heading: Selector,
    label: Selector,
    span: Selector,
    title_year: Selector,
    rating_value: Selector,
    rating_count: Selector,
    metascore: Selector,
    summary: Selector,
    subtext: Selector,
    awards_blurb: Selector,
    rated_prefix: Regex,
    space_runs: Regex,
}

impl MovieDetailParser {
    pub fn new() -> ParsingResult<Self> {
        Ok(Self {
            heading: compile("h1")?,
            label: compile("h4")?,
            span: compile("span")?,
            title_year: compile("span#titleYear")?,
            rating_value: compile(r#"span[itemprop="ratingValue"]"#)?,
            rating_count: compile(r#"span[itemprop="ratingCount"]"#)?,
            metascore: compile("div.metacriticScore")?,
            summary: compile("div.summary_text")?,
            subtext: compile("div.subtext")?,
            awards_blurb: compile("span.awards-blurb")?,
            rated_prefix: Regex::new("^Rated")
                .map_err(|e| ParsingError::invalid_pattern("^Rated", e))?,
            space_runs: Regex::new(" +").map_err(|e| ParsingError::invalid_pattern(" +", e))?,
        })
    }

    /// Extract the title from the first heading
    ///
    /// The heading reads `The Matrix\u{a0}(1999)`; the non-breaking space
    /// separates the title from the parenthesized year.
    pub fn extract_title(&self, html: &Html) -> Option<String> {
        let heading = html.select(&self.heading).next()?;
        let text = heading.text().collect::<String>();
        let title = text.split('\u{a0}').next()?.trim().to_string();
        non_empty(title)
    }

    /// Release year as shown next to the title, parentheses included
    pub fn extract_year(&self, html: &Html) -> Option<String> {
        self.select_text(html, &self.title_year)
    }

    /// IMDb user rating, e.g. `8.7`
    pub fn extract_rating(&self, html: &Html) -> Option<String> {
        self.select_text(html, &self.rating_value)
    }

    /// Number of user votes behind the rating
    pub fn extract_votes(&self, html: &Html) -> Option<String> {
        self.select_text(html, &self.rating_count)
    }

    /// Metacritic critic score; absent for unrated titles
    pub fn extract_metascore(&self, html: &Html) -> Option<String> {
        self.select_text(html, &self.metascore)
    }

    /// Plot summary blurb
    pub fn extract_summary(&self, html: &Html) -> Option<String> {
        self.select_text(html, &self.summary)
    }

    /// Value text following a labeled `h4`, e.g. `Budget:` -> `$63,000,000`
    ///
    /// Takes the first following text-node sibling with non-blank content.
    pub fn extract_next_sibling_text(&self, html: &Html, label: &str) -> Option<String> {
        let label_el = self.find_label(html, label)?;
        label_el
            .next_siblings()
            .filter_map(|node| node.value().as_text())
            .map(|text| text.trim().to_string())
            .find(|text| !text.is_empty())
    }

    /// Joined values of all anchors following a labeled `h4`
    ///
    /// The site labels contributor blocks in singular form when there is
    /// exactly one contributor (`Director:` vs `Directors:`), so an empty
    /// plural lookup falls back to the singular label when one is supplied.
    pub fn extract_multiple_tags(
        &self,
        html: &Html,
        label: &str,
        singular_label: Option<&str>,
    ) -> Option<String> {
        self.combine_sibling_anchors(html, label).or_else(|| {
            singular_label.and_then(|singular| self.combine_sibling_anchors(html, singular))
        })
    }

    /// All award blurbs, whitespace-normalized and joined with `", "`
    pub fn extract_awards(&self, html: &Html) -> Option<String> {
        let blurbs: Vec<String> = html
            .select(&self.awards_blurb)
            .map(|el| {
                let text = el.text().collect::<String>().replace('\n', "");
                self.space_runs.replace_all(&text, " ").trim().to_string()
            })
            .filter(|text| !text.is_empty())
            .collect();
        if blurbs.is_empty() {
            None
        } else {
            Some(blurbs.join(", "))
        }
    }

    /// Anchors following the `Stars:` label, in billing order
    ///
    /// Indexed per slot via [`Self::grab_star`]; trailing non-cast links
    /// (`See full cast & crew`) sit past index 2 and are never exposed.
    pub fn extract_stars(&self, html: &Html) -> Vec<String> {
        self.find_label(html, "Stars:")
            .map(sibling_anchors)
            .unwrap_or_default()
    }

    /// Star at billing position `index`; out of range is an absent slot
    pub fn grab_star(stars: &[String], index: usize) -> Option<String> {
        stars.get(index).cloned()
    }

    /// MPAA reasoning: the first span reading `Rated ...`
    pub fn extract_mpaa_reasoning(&self, html: &Html) -> Option<String> {
        html.select(&self.span)
            .map(collect_text)
            .find(|text| self.rated_prefix.is_match(text))
    }

    /// Runtime from the `time` element after the `Runtime:` label
    pub fn extract_runtime(&self, html: &Html) -> Option<String> {
        let label_el = self.find_label(html, "Runtime:")?;
        label_el
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "time")
            .map(collect_text)
            .and_then(non_empty)
    }

    /// Content rating: the leading text of the `subtext` bar
    pub fn extract_mpaa_rating(&self, html: &Html) -> Option<String> {
        let subtext = html.select(&self.subtext).next()?;
        let first_child = subtext.children().next()?;
        first_child
            .value()
            .as_text()
            .map(|text| text.trim().to_string())
            .and_then(non_empty)
    }

    /// IMDb identifier from the page URL, not the document
    ///
    /// Second-to-last path segment: `/title/tt0133093/` -> `tt0133093`.
    /// Survives a failed fetch, since it never touches the document.
    pub fn extract_imdb_id(url: &str) -> Option<String> {
        let segments: Vec<&str> = url.split('/').collect();
        if segments.len() < 2 {
            return None;
        }
        non_empty(segments[segments.len() - 2].to_string())
    }

    fn select_text(&self, html: &Html, selector: &Selector) -> Option<String> {
        html.select(selector).next().map(collect_text).and_then(non_empty)
    }

    fn find_label<'a>(&self, html: &'a Html, label: &str) -> Option<ElementRef<'a>> {
        html.select(&self.label).find(|el| collect_text(*el) == label)
    }

    fn combine_sibling_anchors(&self, html: &Html, label: &str) -> Option<String> {
        let label_el = self.find_label(html, label)?;
        let values = sibling_anchors(label_el);
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

impl ContextualParser for MovieDetailParser {
    type Output = MovieRecord;
    type Context = DetailParseContext;

    /// Assemble the full record by applying every field rule
    ///
    /// Always `Ok` for a parsed document: individual misses are absent
    /// fields, not failures.
    fn parse_with_context(&self, html: &Html, context: &Self::Context) -> ParsingResult<Self::Output> {
        let stars = self.extract_stars(html);

        let record = MovieRecord {
            title: self.extract_title(html),
            year: self.extract_year(html),
            runtime: self.extract_runtime(html),
            imdb_rating: self.extract_rating(html),
            imdb_votes: self.extract_votes(html),
            imdb_id: Self::extract_imdb_id(&context.url),
            metascore_rating: self.extract_metascore(html),
            director: self.extract_multiple_tags(html, "Directors:", Some("Director:")),
            star_1: Self::grab_star(&stars, 0),
            star_2: Self::grab_star(&stars, 1),
            star_3: Self::grab_star(&stars, 2),
            genre: self.extract_multiple_tags(html, "Genres:", None),
            summary: self.extract_summary(html),
            awards: self.extract_awards(html),
            tagline: self.extract_next_sibling_text(html, "Taglines:"),
            release_date: self.extract_next_sibling_text(html, "Release Date:"),
            also_known_as: self.extract_next_sibling_text(html, "Also Known As:"),
            filming_locations: self.extract_multiple_tags(html, "Filming Locations:", None),
            production_company: self.extract_multiple_tags(html, "Production Co:", None),
            mpaa_rating: self.extract_mpaa_rating(html),
            mpaa_reasoning: self.extract_mpaa_reasoning(html),
            keywords: self.extract_multiple_tags(html, "Plot Keywords:", None),
            writers: self.extract_multiple_tags(html, "Writers:", Some("Writer:")),
            sound_mix: self.extract_multiple_tags(html, "Sound Mix:", None),
            budget: self.extract_next_sibling_text(html, "Budget:"),
            opening_weekend: self.extract_next_sibling_text(html, "Opening Weekend USA:"),
            gross: self.extract_next_sibling_text(html, "Gross USA:"),
            worldwide_gross: self.extract_next_sibling_text(html, "Cumulative Worldwide Gross:"),
        };

        debug!(
            "Extracted {} of {} fields for {}",
            record.populated_count(),
            record.fields().len(),
            context.url
        );
        Ok(record)
    }
}

fn compile(selector: &str) -> ParsingResult<Selector> {
    Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
}

/// Concatenated descendant text, trimmed
fn collect_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Anchor texts among the following siblings of an element
fn sibling_anchors(el: ElementRef) -> Vec<String> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == "a")
        .map(collect_text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classic title-page markup with every extractable field present
    const MATRIX_DETAIL: &str = r#"<html><body>
<div class="title_wrapper">
  <h1>The Matrix&nbsp;<span id="titleYear">(<a href="/year/1999/">1999</a>)</span></h1>
  <div class="subtext">
    R
    <span class="ghost">|</span>
    <time datetime="PT136M">2h 16min</time>
  </div>
</div>
<div class="ratingValue"><strong><span itemprop="ratingValue">8.7</span></strong></div>
<a href="/title/tt0133093/ratings"><span itemprop="ratingCount">1,676,426</span></a>
<div class="metacriticScore score_favorable"><span>73</span></div>
<div class="summary_text">A computer hacker learns from mysterious rebels about the true nature of his reality.</div>
<div class="credit_summary_item">
  <h4 class="inline">Directors:</h4>
  <a href="/name/nm0905154/">Lana Wachowski</a>, <a href="/name/nm0905152/">Lilly Wachowski</a>
</div>
<div class="credit_summary_item">
  <h4 class="inline">Writer:</h4>
  <a href="/name/nm0905154/">Lana Wachowski</a>
</div>
<div class="credit_summary_item">
  <h4 class="inline">Stars:</h4>
  <a href="/name/nm0000206/">Keanu Reeves</a>, <a href="/name/nm0000401/">Laurence Fishburne</a>, <a href="/name/nm0005251/">Carrie-Anne Moss</a>
  <span class="ghost">|</span>
  <a href="fullcredits/">See full cast &amp; crew</a>
</div>
<span class="awards-blurb">Won 4 Oscars.
        Another 37 wins   &amp; 51 nominations.</span>
<div class="txt-block"><h4 class="inline">Taglines:</h4>
  Free your mind
  <span class="see-more inline">See more</span>
</div>
<div class="see-more inline canwrap"><h4 class="inline">Genres:</h4>
  <a href="/search/title?genres=action">Action</a>&nbsp;|
  <a href="/search/title?genres=sci-fi">Sci-Fi</a>
</div>
<div class="txt-block"><h4 class="inline">Motion Picture Rating (MPAA)</h4>
  <span>Rated R for sci-fi violence and brief language</span>
</div>
<div class="txt-block"><h4 class="inline">Release Date:</h4> 31 March 1999 (USA)
</div>
<div class="txt-block"><h4 class="inline">Also Known As:</h4> Matrix
</div>
<div class="txt-block"><h4 class="inline">Filming Locations:</h4>
  <a href="/search/title?locations=Nashville">Nashville, Illinois, USA</a>
</div>
<div class="txt-block"><h4 class="inline">Budget:</h4>$63,000,000
  <span class="attribute">(estimated)</span>
</div>
<div class="txt-block"><h4 class="inline">Opening Weekend USA:</h4> $27,788,331
</div>
<div class="txt-block"><h4 class="inline">Gross USA:</h4> $171,479,930
</div>
<div class="txt-block"><h4 class="inline">Cumulative Worldwide Gross:</h4> $465,343,787
</div>
<div class="txt-block"><h4 class="inline">Production Co:</h4>
  <a href="/company/co0002663/">Warner Bros.</a>, <a href="/company/co0108864/">Village Roadshow Pictures</a>
</div>
<div class="see-more inline canwrap"><h4 class="inline">Plot Keywords:</h4>
  <a href="/keyword/artificial-reality/">artificial reality</a>
  <a href="/keyword/simulated-reality/">simulated reality</a>
</div>
<div class="txt-block"><h4 class="inline">Runtime:</h4>
  <time datetime="PT136M">136 min</time>
</div>
<div class="txt-block"><h4 class="inline">Sound Mix:</h4>
  <a href="/search/title?sound_mixes=dolby_digital">Dolby Digital</a>
</div>
</body></html>"#;

    fn parser() -> MovieDetailParser {
        MovieDetailParser::new().unwrap()
    }

    fn matrix_doc() -> Html {
        Html::parse_document(MATRIX_DETAIL)
    }

    #[test]
    fn title_splits_on_non_breaking_space() {
        assert_eq!(
            parser().extract_title(&matrix_doc()).as_deref(),
            Some("The Matrix")
        );
    }

    #[test]
    fn tag_text_fields() {
        let parser = parser();
        let doc = matrix_doc();
        assert_eq!(parser.extract_year(&doc).as_deref(), Some("(1999)"));
        assert_eq!(parser.extract_rating(&doc).as_deref(), Some("8.7"));
        assert_eq!(parser.extract_votes(&doc).as_deref(), Some("1,676,426"));
        assert_eq!(parser.extract_metascore(&doc).as_deref(), Some("73"));
        assert_eq!(
            parser.extract_summary(&doc).as_deref(),
            Some("A computer hacker learns from mysterious rebels about the true nature of his reality.")
        );
    }

    #[test]
    fn next_sibling_text_fields() {
        let parser = parser();
        let doc = matrix_doc();
        assert_eq!(
            parser.extract_next_sibling_text(&doc, "Taglines:").as_deref(),
            Some("Free your mind")
        );
        assert_eq!(
            parser.extract_next_sibling_text(&doc, "Release Date:").as_deref(),
            Some("31 March 1999 (USA)")
        );
        assert_eq!(
            parser.extract_next_sibling_text(&doc, "Budget:").as_deref(),
            Some("$63,000,000")
        );
        assert_eq!(
            parser
                .extract_next_sibling_text(&doc, "Cumulative Worldwide Gross:")
                .as_deref(),
            Some("$465,343,787")
        );
    }

    #[test]
    fn next_sibling_text_skips_blank_nodes_and_elements() {
        let parser = parser();
        let doc = Html::parse_document(
            r#"<div><h4>Budget:</h4> <b>approx.</b>$100,000 </div>"#,
        );
        assert_eq!(
            parser.extract_next_sibling_text(&doc, "Budget:").as_deref(),
            Some("$100,000")
        );
    }

    #[test]
    fn multi_value_fields_join_sibling_anchors() {
        let parser = parser();
        let doc = matrix_doc();
        assert_eq!(
            parser
                .extract_multiple_tags(&doc, "Directors:", Some("Director:"))
                .as_deref(),
            Some("Lana Wachowski, Lilly Wachowski")
        );
        assert_eq!(
            parser.extract_multiple_tags(&doc, "Genres:", None).as_deref(),
            Some("Action, Sci-Fi")
        );
        assert_eq!(
            parser
                .extract_multiple_tags(&doc, "Production Co:", None)
                .as_deref(),
            Some("Warner Bros., Village Roadshow Pictures")
        );
    }

    #[test]
    fn singular_label_fallback() {
        // The page has "Writer:" only; the plural lookup must fall back.
        let parser = parser();
        let doc = matrix_doc();
        assert_eq!(
            parser
                .extract_multiple_tags(&doc, "Writers:", Some("Writer:"))
                .as_deref(),
            Some("Lana Wachowski")
        );
        assert_eq!(parser.extract_multiple_tags(&doc, "Writers:", None), None);
    }

    #[test]
    fn awards_are_whitespace_normalized() {
        assert_eq!(
            parser().extract_awards(&matrix_doc()).as_deref(),
            Some("Won 4 Oscars. Another 37 wins & 51 nominations.")
        );
    }

    #[test]
    fn stars_are_positional_with_silent_bounds() {
        let stars = parser().extract_stars(&matrix_doc());
        assert_eq!(
            MovieDetailParser::grab_star(&stars, 0).as_deref(),
            Some("Keanu Reeves")
        );
        assert_eq!(
            MovieDetailParser::grab_star(&stars, 1).as_deref(),
            Some("Laurence Fishburne")
        );
        assert_eq!(
            MovieDetailParser::grab_star(&stars, 2).as_deref(),
            Some("Carrie-Anne Moss")
        );
        assert_eq!(MovieDetailParser::grab_star(&stars, 99), None);
    }

    #[test]
    fn missing_star_slot_is_absent_only_for_that_slot() {
        let parser = parser();
        let doc = Html::parse_document(
            r#"<div><h4>Stars:</h4><a>Tom Hanks</a><a>Robin Wright</a></div>"#,
        );
        let stars = parser.extract_stars(&doc);
        assert_eq!(MovieDetailParser::grab_star(&stars, 1).as_deref(), Some("Robin Wright"));
        assert_eq!(MovieDetailParser::grab_star(&stars, 2), None);
    }

    #[test]
    fn mpaa_rating_and_reasoning() {
        let parser = parser();
        let doc = matrix_doc();
        assert_eq!(parser.extract_mpaa_rating(&doc).as_deref(), Some("R"));
        assert_eq!(
            parser.extract_mpaa_reasoning(&doc).as_deref(),
            Some("Rated R for sci-fi violence and brief language")
        );
    }

    #[test]
    fn runtime_from_time_element() {
        assert_eq!(
            parser().extract_runtime(&matrix_doc()).as_deref(),
            Some("136 min")
        );
    }

    #[test]
    fn imdb_id_is_second_to_last_url_segment() {
        assert_eq!(
            MovieDetailParser::extract_imdb_id("https://example.com/title/tt0133093/").as_deref(),
            Some("tt0133093")
        );
        assert_eq!(
            MovieDetailParser::extract_imdb_id("https://www.imdb.com/title/tt0468569/").as_deref(),
            Some("tt0468569")
        );
        assert_eq!(MovieDetailParser::extract_imdb_id(""), None);
    }

    #[test]
    fn every_field_is_absent_on_an_unrelated_document() {
        let parser = parser();
        let doc = Html::parse_document("<html><body><p>not a title page</p></body></html>");
        let record = parser
            .parse_with_context(&doc, &DetailParseContext::new(""))
            .unwrap();
        for (name, value) in record.fields() {
            assert!(value.is_none(), "field {name} should be absent");
        }
    }

    #[test]
    fn missing_metascore_does_not_cascade() {
        let parser = parser();
        let degraded = MATRIX_DETAIL.replace("metacriticScore", "retiredScore");
        let doc = Html::parse_document(&degraded);
        let record = parser
            .parse_with_context(&doc, &DetailParseContext::new("https://www.imdb.com/title/tt0133093/"))
            .unwrap();

        assert_eq!(record.metascore_rating, None);
        assert_eq!(record.title.as_deref(), Some("The Matrix"));
        assert_eq!(record.imdb_rating.as_deref(), Some("8.7"));
        assert_eq!(record.director.as_deref(), Some("Lana Wachowski, Lilly Wachowski"));
        assert_eq!(record.star_1.as_deref(), Some("Keanu Reeves"));
        assert_eq!(record.imdb_id.as_deref(), Some("tt0133093"));
        assert_eq!(record.populated_count(), record.fields().len() - 1);
    }

    #[test]
    fn full_record_from_complete_page() {
        let parser = parser();
        let record = parser
            .parse_with_context(
                &matrix_doc(),
                &DetailParseContext::new("https://www.imdb.com/title/tt0133093/"),
            )
            .unwrap();

        assert_eq!(record.populated_count(), record.fields().len());
        assert_eq!(record.tagline.as_deref(), Some("Free your mind"));
        assert_eq!(record.keywords.as_deref(), Some("artificial reality, simulated reality"));
        assert_eq!(record.sound_mix.as_deref(), Some("Dolby Digital"));
        assert_eq!(record.also_known_as.as_deref(), Some("Matrix"));
        assert_eq!(record.filming_locations.as_deref(), Some("Nashville, Illinois, USA"));
        assert_eq!(record.gross.as_deref(), Some("$171,479,930"));
        assert_eq!(record.opening_weekend.as_deref(), Some("$27,788,331"));
        assert_eq!(record.writers.as_deref(), Some("Lana Wachowski"));
    }
}
