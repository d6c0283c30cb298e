// Catalog filtering and sorting shared by every listing view

use crate::error::{Result, StoreError};
use catalog_config::Config;
use catalog_models::{ContentItem, FilterCriteria, MyListEntry, SortKey};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

mod seed;
#[cfg(test)]
mod tests;

/// Anything a listing can be built from: a catalog item, or a saved entry
/// wrapping one.
pub trait Listing {
    fn content(&self) -> &ContentItem;

    /// When the entry was saved, for `SortKey::DateAdded`
    fn added_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

impl Listing for ContentItem {
    fn content(&self) -> &ContentItem {
        self
    }
}

impl Listing for MyListEntry {
    fn content(&self) -> &ContentItem {
        &self.item
    }

    fn added_at(&self) -> Option<DateTime<Utc>> {
        Some(self.added_at)
    }
}

/// Compute the visible, ordered subset of `items` for `criteria`.
///
/// An item passes when its genre matches (or the filter is `All`), its
/// content type matches (when one is requested), and the lowercase query is
/// a substring of the lowercase title or description. The sort is stable,
/// so ties keep their input order; an unrecognized sort key leaves the
/// filtered list in input order. `items` is never modified.
pub fn apply<T: Listing + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    let query = criteria.query.to_lowercase();

    let mut results: Vec<T> = items
        .iter()
        .filter(|entry| matches(entry.content(), criteria, &query))
        .cloned()
        .collect();

    sort_listing(&mut results, &criteria.sort_key);

    debug!(
        "apply: {} of {} items match (query={:?}, genre={}, sort={})",
        results.len(),
        items.len(),
        criteria.query,
        criteria.genre,
        criteria.sort_key
    );

    results
}

/// `query` must already be lowercased.
fn matches(item: &ContentItem, criteria: &FilterCriteria, query: &str) -> bool {
    if !criteria.genre.matches(&item.genre) {
        return false;
    }

    if let Some(wanted) = criteria.content_type {
        if item.content_type != Some(wanted) {
            return false;
        }
    }

    query.is_empty()
        || item.title.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
}

fn sort_listing<T: Listing>(results: &mut [T], sort_key: &SortKey) {
    match sort_key {
        SortKey::Popularity => results.sort_by(|a, b| b.content().popularity.cmp(&a.content().popularity)),
        SortKey::Rating => results.sort_by(|a, b| b.content().rating.total_cmp(&a.content().rating)),
        SortKey::Year => results.sort_by(|a, b| b.content().year.cmp(&a.content().year)),
        SortKey::Title => results.sort_by(|a, b| compare_titles(&a.content().title, &b.content().title)),
        // Newest first, undated entries last
        SortKey::DateAdded => results.sort_by(|a, b| b.added_at().cmp(&a.added_at())),
        SortKey::Unrecognized(key) => {
            debug!("Unrecognized sort key {:?}, keeping input order", key);
        }
    }
}

/// Dictionary-style title order: case-insensitive first, lowercase before
/// uppercase when the titles only differ in case.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// The fixed list of titles a session browses.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// The built-in catalog.
    pub fn seed() -> Self {
        Self::new(seed::seed_items())
    }

    /// Load a catalog from a JSON array of items.
    ///
    /// Ids must be unique and ratings must lie in `[0, 10]`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let catalog_err = |message: String| StoreError::Catalog {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| catalog_err(e.to_string()))?;
        let items: Vec<ContentItem> = serde_json::from_str(&content).map_err(|e| catalog_err(e.to_string()))?;

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(catalog_err(format!("duplicate id {}", item.id)));
            }
            if !(0.0..=10.0).contains(&item.rating) {
                return Err(catalog_err(format!(
                    "rating {} of \"{}\" is outside 0-10",
                    item.rating, item.title
                )));
            }
        }

        info!("Loaded catalog from {:?} ({} items)", path, items.len());
        Ok(Self::new(items))
    }

    /// The configured catalog file, or the built-in catalog when none is set.
    pub fn load(config: &Config) -> Result<Self> {
        match &config.catalog.path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::seed()),
        }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.genre.as_str())
            .filter(|genre| seen.insert(*genre))
            .collect()
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<ContentItem> {
        apply(&self.items, criteria)
    }

    /// The `n` most popular titles.
    pub fn popular(&self, n: usize) -> Vec<ContentItem> {
        let mut items = apply(&self.items, &FilterCriteria::default());
        items.truncate(n);
        items
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
