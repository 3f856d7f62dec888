use serde::Serialize;
use std::collections::BTreeSet;

/// Genre tags as they appear in the catalog's `genre_list` column
pub mod tags {
    pub const ACTION: &str = "Action";
    pub const ADVENTURE: &str = "Adventure";
    pub const COMEDIES: &str = "Comedies";
    pub const CRIME: &str = "Crime";
    pub const DOCUMENTARY: &str = "Documentary";
    pub const DRAMA: &str = "Drama";
    pub const FAMILY: &str = "Family";
    pub const HORROR: &str = "Horror";
    pub const MYSTERY: &str = "Mystery";
    pub const ROMANTIC: &str = "Romantic";
    pub const THRILLER: &str = "Thriller";
}

/// A fixed set of genre tags used for matching against catalog records
pub type GenreSet = &'static [&'static str];

/// A single catalog entry
///
/// Records are created once by the catalog loader and never mutated. The
/// genre tags are always the parsed form of the catalog's serialized list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleRecord {
    pub title_en: String,
    pub title_zh: String,
    pub release_year: i32,
    pub genre_tags: BTreeSet<String>,
    pub duration_minutes: u32,
    pub rating: String,
    pub description: String,
    /// Bilingual genre line shown next to the title, e.g. "Dramas 劇情"
    pub combined_genre_label: String,
}

impl TitleRecord {
    /// Returns true if the record carries at least one of the given tags
    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.genre_tags.contains(*tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_tags(tags: &[&str]) -> TitleRecord {
        TitleRecord {
            title_en: "Sample".to_string(),
            title_zh: "範例".to_string(),
            release_year: 2020,
            genre_tags: tags.iter().map(|t| t.to_string()).collect(),
            duration_minutes: 90,
            rating: "TV-14".to_string(),
            description: String::new(),
            combined_genre_label: String::new(),
        }
    }

    #[test]
    fn test_has_any_tag_matches_single_overlap() {
        let record = record_with_tags(&[tags::DRAMA, tags::ROMANTIC]);
        assert!(record.has_any_tag(&[tags::HORROR, tags::DRAMA]));
    }

    #[test]
    fn test_has_any_tag_is_exact_match() {
        let record = record_with_tags(&["Horror Movies"]);
        assert!(!record.has_any_tag(&[tags::HORROR]));
    }

    #[test]
    fn test_has_any_tag_empty_inputs() {
        let untagged = record_with_tags(&[]);
        assert!(!untagged.has_any_tag(&[tags::DRAMA]));

        let tagged = record_with_tags(&[tags::DRAMA]);
        assert!(!tagged.has_any_tag(&[]));
    }

    #[test]
    fn test_serialize_genre_tags_as_sorted_array() {
        let record = record_with_tags(&[tags::THRILLER, tags::ACTION]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["genre_tags"], serde_json::json!(["Action", "Thriller"]));
        assert_eq!(json["duration_minutes"], 90);
    }
}
