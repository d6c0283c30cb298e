use crate::content::ContentType;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Genre selector. `"all"` (any case) is the wildcard; anything else must
/// match an item's genre exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

impl GenreFilter {
    pub fn matches(&self, genre: &str) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(wanted) => wanted == genre,
        }
    }
}

impl From<String> for GenreFilter {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("all") {
            GenreFilter::All
        } else {
            GenreFilter::Only(s)
        }
    }
}

impl From<&str> for GenreFilter {
    fn from(s: &str) -> Self {
        GenreFilter::from(s.to_string())
    }
}

impl From<GenreFilter> for String {
    fn from(filter: GenreFilter) -> Self {
        match filter {
            GenreFilter::All => "all".to_string(),
            GenreFilter::Only(genre) => genre,
        }
    }
}

impl FromStr for GenreFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GenreFilter::from(s))
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str("all"),
            GenreFilter::Only(genre) => f.write_str(genre),
        }
    }
}

/// Ordering applied to a filtered listing.
///
/// Parsing never fails: an unknown key is kept as `Unrecognized` and leaves
/// the listing in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Popularity,
    Rating,
    Year,
    Title,
    /// Newest saved first. Only meaningful for saved-list entries.
    DateAdded,
    Unrecognized(String),
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Rating => "rating",
            SortKey::Year => "year",
            SortKey::Title => "title",
            SortKey::DateAdded => "date-added",
            SortKey::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "popularity" => SortKey::Popularity,
            "rating" => SortKey::Rating,
            "year" => SortKey::Year,
            "title" => SortKey::Title,
            "date-added" | "date_added" => SortKey::DateAdded,
            other => SortKey::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::from(s.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a listing view lets the user pick: free text, genre, sort order
/// and an optional content type. Built fresh for every interaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub genre: GenreFilter,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<GenreFilter>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_content_type(mut self, content_type: Option<ContentType>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_filter_wildcard_any_case() {
        assert_eq!(GenreFilter::from("all"), GenreFilter::All);
        assert_eq!(GenreFilter::from("All"), GenreFilter::All);
        assert_eq!(GenreFilter::from("action"), GenreFilter::Only("action".to_string()));
    }

    #[test]
    fn test_genre_filter_matches_exactly() {
        let filter = GenreFilter::from("action");
        assert!(filter.matches("action"));
        assert!(!filter.matches("Action"));
        assert!(GenreFilter::All.matches("anything"));
    }

    #[test]
    fn test_sort_key_unknown_is_kept() {
        let key: SortKey = "newest".parse().unwrap();
        assert_eq!(key, SortKey::Unrecognized("newest".to_string()));
        assert_eq!(key.to_string(), "newest");
        assert_eq!("date-added".parse::<SortKey>().unwrap(), SortKey::DateAdded);
    }

    #[test]
    fn test_criteria_default_is_cleared_state() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.query, "");
        assert_eq!(criteria.genre, GenreFilter::All);
        assert_eq!(criteria.sort_key, SortKey::Popularity);
        assert_eq!(criteria.content_type, None);
        assert!(!criteria.has_query());
        assert!(!criteria.with_query("   ").has_query());
    }

    #[test]
    fn test_criteria_serde_uses_plain_strings() {
        let criteria = FilterCriteria::new()
            .with_genre("drama")
            .with_sort(SortKey::Title);
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json["genre"], "drama");
        assert_eq!(json["sort_key"], "title");

        let back: FilterCriteria = serde_json::from_value(json).unwrap();
        assert_eq!(back, criteria);
    }
}
