use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::content::ContentItem;

/// Membership of a catalog id in the watchlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl WatchlistEntry {
    pub fn new(id: u32) -> Self {
        Self { id, added_at: None }
    }
}

/// A saved title on "My List". Stores the whole item so the list still
/// renders if the catalog it came from changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MyListEntry {
    #[serde(flatten)]
    pub item: ContentItem,
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl MyListEntry {
    pub fn new(item: ContentItem, added_at: DateTime<Utc>) -> Self {
        Self { item, added_at }
    }

    pub fn id(&self) -> u32 {
        self.item.id
    }
}
