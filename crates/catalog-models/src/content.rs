use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single title in the catalog.
///
/// Field names follow the stored JSON layout, so catalogs exported from the
/// web pages load without a mapping step. `popularity` and `type` are missing
/// from some of those catalogs and default to `0` / `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub year: u32,
    pub rating: f32, // 0.0 - 10.0
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
}

impl ContentItem {
    pub fn is_series(&self) -> bool {
        matches!(self.content_type, Some(ContentType::Series))
    }
}

/// Stored as `"movie"` / `"series"`; reading accepts the same aliases as `FromStr`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum ContentType {
    Movie,
    Series,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Series => "series",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "movie" | "movies" | "film" => Ok(ContentType::Movie),
            "series" | "show" | "shows" | "tv" | "tv show" | "tv-show" => Ok(ContentType::Series),
            other => Err(format!("Invalid content type: {}. Use 'movie' or 'series'", other)),
        }
    }
}

impl TryFrom<String> for ContentType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_item_deserializes_page_layout() {
        let json = r#"{
            "id": 2,
            "title": "Cosmic Horizons",
            "type": "series",
            "genre": "sci-fi",
            "year": 2024,
            "rating": 9.1,
            "duration": "3 Seasons",
            "description": "A mind-bending journey across galaxies with stunning visual effects.",
            "popularity": 98
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 2);
        assert_eq!(item.content_type, Some(ContentType::Series));
        assert_eq!(item.popularity, 98);
        assert!(item.is_series());
    }

    #[test]
    fn test_content_item_without_type_or_popularity() {
        let json = r#"{"id": 1, "title": "Quantum Horizon", "genre": "Sci-Fi", "year": 2024, "rating": 8.7}"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.content_type, None);
        assert_eq!(item.popularity, 0);
        assert_eq!(item.description, "");

        let out = serde_json::to_string(&item).unwrap();
        assert!(!out.contains("\"type\""));
    }

    #[test]
    fn test_content_type_aliases() {
        assert_eq!("TV Show".parse::<ContentType>().unwrap(), ContentType::Series);
        assert_eq!("Movie".parse::<ContentType>().unwrap(), ContentType::Movie);
        assert!("podcast".parse::<ContentType>().is_err());

        let parsed: ContentType = serde_json::from_str("\"TV Show\"").unwrap();
        assert_eq!(parsed, ContentType::Series);
    }

    #[test]
    fn test_content_type_deserializes_any_case() {
        for raw in ["\"tv\"", "\"Tv Show\"", "\"SERIES\""] {
            let parsed: ContentType = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, ContentType::Series);
        }
        let parsed: ContentType = serde_json::from_str("\"Film\"").unwrap();
        assert_eq!(parsed, ContentType::Movie);
        assert!(serde_json::from_str::<ContentType>("\"podcast\"").is_err());

        // Written back in canonical form
        assert_eq!(serde_json::to_string(&ContentType::Series).unwrap(), "\"series\"");

        let item: ContentItem = serde_json::from_str(
            r#"{"id": 9, "title": "Night Shift", "type": "Tv Show", "genre": "drama", "year": 2021, "rating": 7.4}"#,
        )
        .unwrap();
        assert!(item.is_series());
    }
}
