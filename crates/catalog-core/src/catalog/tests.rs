use super::*;
use catalog_models::{ContentType, GenreFilter};
use chrono::TimeZone;

fn create_item(id: u32, title: &str, genre: &str, popularity: u32) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        year: 2020,
        rating: 8.0,
        duration: "2h".to_string(),
        description: format!("Description of {}", title),
        popularity,
        content_type: Some(ContentType::Movie),
    }
}

fn ids(items: &[ContentItem]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

#[test]
fn test_popularity_sort_descending() {
    let items = vec![create_item(1, "A", "action", 50), create_item(2, "B", "action", 90)];

    let result = apply(&items, &FilterCriteria::default());
    assert_eq!(ids(&result), vec![2, 1]);
}

#[test]
fn test_popularity_ties_keep_input_order() {
    let items = vec![
        create_item(1, "A", "action", 70),
        create_item(2, "B", "drama", 90),
        create_item(3, "C", "comedy", 70),
        create_item(4, "D", "action", 70),
    ];

    let result = apply(&items, &FilterCriteria::default());
    assert_eq!(ids(&result), vec![2, 1, 3, 4]);
}

#[test]
fn test_default_criteria_return_every_item() {
    let catalog = Catalog::seed();
    let result = catalog.search(&FilterCriteria::default());
    assert_eq!(result.len(), catalog.len());
    assert!(result.windows(2).all(|w| w[0].popularity >= w[1].popularity));
}

#[test]
fn test_genre_filter_excludes_other_genres() {
    let catalog = Catalog::seed();
    let criteria = FilterCriteria::new().with_genre("drama");

    let result = catalog.search(&criteria);
    assert_eq!(ids(&result), vec![7, 4]);
    assert!(result.iter().all(|item| item.genre == "drama"));
}

#[test]
fn test_genre_filter_is_exact() {
    let catalog = Catalog::seed();
    let result = catalog.search(&FilterCriteria::new().with_genre(GenreFilter::Only("Drama".to_string())));
    assert!(result.is_empty());
}

#[test]
fn test_query_matches_title_case_insensitively() {
    let catalog = Catalog::seed();
    let result = catalog.search(&FilterCriteria::new().with_query("cosmic"));
    assert_eq!(ids(&result), vec![2]);

    let upper = catalog.search(&FilterCriteria::new().with_query("COSMIC HORIZONS"));
    assert_eq!(ids(&upper), vec![2]);
}

#[test]
fn test_query_matches_description() {
    let catalog = Catalog::seed();
    // Only in the description of "Neon Nights"
    let result = catalog.search(&FilterCriteria::new().with_query("CyberPunk"));
    assert_eq!(ids(&result), vec![5]);
}

#[test]
fn test_no_match_then_reset_returns_everything() {
    let catalog = Catalog::seed();
    let criteria = FilterCriteria::new().with_query("zzz_no_match").with_genre("action");
    assert!(catalog.search(&criteria).is_empty());

    let reset = criteria.with_query("").with_genre("all");
    assert_eq!(catalog.search(&reset).len(), catalog.len());
}

#[test]
fn test_content_type_filter() {
    let catalog = Catalog::seed();
    let series = catalog.search(&FilterCriteria::new().with_content_type(Some(ContentType::Series)));
    assert_eq!(ids(&series), vec![2, 7, 4, 6]);

    // Items without a type never match a type filter
    let mut untyped = create_item(9, "Untyped", "drama", 10);
    untyped.content_type = None;
    let result = apply(&[untyped], &FilterCriteria::new().with_content_type(Some(ContentType::Movie)));
    assert!(result.is_empty());
}

#[test]
fn test_rating_and_year_sort() {
    let catalog = Catalog::seed();

    let by_rating = catalog.search(&FilterCriteria::new().with_sort(SortKey::Rating));
    assert_eq!(by_rating[0].title, "Cosmic Horizons");
    assert_eq!(by_rating.last().unwrap().title, "Laugh Out Loud");

    let by_year = catalog.search(&FilterCriteria::new().with_sort(SortKey::Year));
    // 2024 titles first, in catalog order
    assert_eq!(ids(&by_year), vec![2, 4, 6, 8, 1, 3, 5, 7]);
}

#[test]
fn test_title_sort_ascending_ignores_case() {
    let items = vec![
        create_item(1, "banana", "x", 0),
        create_item(2, "Apple", "x", 0),
        create_item(3, "cherry", "x", 0),
        create_item(4, "apple", "x", 0),
    ];

    let result = apply(&items, &FilterCriteria::new().with_sort(SortKey::Title));
    assert_eq!(ids(&result), vec![4, 2, 1, 3]);
}

#[test]
fn test_unrecognized_sort_key_keeps_input_order() {
    let items = vec![
        create_item(1, "Low", "x", 10),
        create_item(2, "High", "x", 99),
        create_item(3, "Mid", "x", 50),
    ];
    let criteria = FilterCriteria::new().with_sort("newest".parse().unwrap());

    let result = apply(&items, &criteria);
    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn test_apply_does_not_mutate_input() {
    let items = vec![create_item(1, "A", "x", 1), create_item(2, "B", "x", 2)];
    let before = items.clone();

    let _ = apply(&items, &FilterCriteria::new().with_sort(SortKey::Popularity));
    assert_eq!(items, before);
}

#[test]
fn test_empty_input() {
    let items: Vec<ContentItem> = Vec::new();
    assert!(apply(&items, &FilterCriteria::new().with_query("anything")).is_empty());
}

#[test]
fn test_date_added_sort_for_saved_entries() {
    let older = MyListEntry::new(create_item(1, "Older", "x", 0), Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    let newer = MyListEntry::new(create_item(2, "Newer", "x", 0), Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap());

    let result = apply(&[older, newer], &FilterCriteria::new().with_sort(SortKey::DateAdded));
    let order: Vec<u32> = result.iter().map(|entry| entry.id()).collect();
    assert_eq!(order, vec![2, 1]);
}

#[test]
fn test_date_added_on_plain_items_keeps_order() {
    let items = vec![create_item(1, "A", "x", 1), create_item(2, "B", "x", 2)];
    let result = apply(&items, &FilterCriteria::new().with_sort(SortKey::DateAdded));
    assert_eq!(ids(&result), vec![1, 2]);
}

#[test]
fn test_catalog_helpers() {
    let catalog = Catalog::seed();
    assert_eq!(catalog.get(5).unwrap().title, "Neon Nights");
    assert!(catalog.get(99).is_none());
    assert_eq!(catalog.genres(), vec!["action", "sci-fi", "comedy", "drama", "thriller"]);
    assert_eq!(ids(&catalog.popular(3)), vec![2, 1, 7]);
}

#[test]
fn test_catalog_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let items = vec![create_item(1, "One", "drama", 5), create_item(2, "Two", "drama", 6)];
    std::fs::write(&path, serde_json::to_string(&items).unwrap()).unwrap();

    let catalog = Catalog::from_json_file(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(2).unwrap().title, "Two");
}

#[test]
fn test_catalog_from_json_file_rejects_duplicates_and_bad_ratings() {
    let dir = tempfile::tempdir().unwrap();

    let dup_path = dir.path().join("dup.json");
    let dup = vec![create_item(1, "One", "drama", 5), create_item(1, "Again", "drama", 6)];
    std::fs::write(&dup_path, serde_json::to_string(&dup).unwrap()).unwrap();
    assert!(matches!(Catalog::from_json_file(&dup_path), Err(StoreError::Catalog { .. })));

    let bad_path = dir.path().join("bad.json");
    let mut bad = create_item(1, "One", "drama", 5);
    bad.rating = 11.0;
    std::fs::write(&bad_path, serde_json::to_string(&vec![bad]).unwrap()).unwrap();
    assert!(Catalog::from_json_file(&bad_path).is_err());

    assert!(Catalog::from_json_file(&dir.path().join("missing.json")).is_err());
}
