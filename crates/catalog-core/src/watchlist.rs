use crate::catalog::Catalog;
use crate::error::Result;
use crate::keys::StorageKeys;
use crate::notify::{messages, Notice, Notifier};
use crate::storage::{load_json, save_json, SharedStore};
use catalog_models::{ContentItem, WatchlistEntry};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Outcome of a toggle: the set after the change and which way it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub ids: BTreeSet<u32>,
    pub was_added: bool,
}

/// A durable set of ids stored as a JSON array under one key.
///
/// Every mutation reads the current value, applies the change and writes
/// the whole set back before returning.
pub struct IdSetStore {
    storage: SharedStore,
    key: String,
}

impl IdSetStore {
    pub fn new(storage: SharedStore, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current set; absent or unparsable values read as empty.
    pub fn load(&self) -> BTreeSet<u32> {
        load_json::<Vec<u32>>(self.storage.as_ref(), &self.key)
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.load().contains(&id)
    }

    pub fn toggle(&self, id: u32) -> Result<Toggle> {
        let mut ids = self.load();
        let was_added = if ids.remove(&id) {
            false
        } else {
            ids.insert(id);
            true
        };
        self.save(&ids)?;
        Ok(Toggle { ids, was_added })
    }

    /// Add `id`; returns false when it was already present.
    pub fn insert(&self, id: u32) -> Result<bool> {
        let mut ids = self.load();
        if !ids.insert(id) {
            return Ok(false);
        }
        self.save(&ids)?;
        Ok(true)
    }

    /// Remove `id`; returns false when it was not present.
    pub fn remove(&self, id: u32) -> Result<bool> {
        let mut ids = self.load();
        if !ids.remove(&id) {
            return Ok(false);
        }
        self.save(&ids)?;
        Ok(true)
    }

    /// Add every id in `new_ids`; returns how many were new.
    pub fn insert_all(&self, new_ids: impl IntoIterator<Item = u32>) -> Result<usize> {
        let mut ids = self.load();
        let before = ids.len();
        ids.extend(new_ids);
        let added = ids.len() - before;
        if added > 0 {
            self.save(&ids)?;
        }
        Ok(added)
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)
    }

    fn save(&self, ids: &BTreeSet<u32>) -> Result<()> {
        save_json(self.storage.as_ref(), &self.key, ids)?;
        debug!("Saved {} ids to {}", ids.len(), self.key);
        Ok(())
    }
}

/// The user's saved titles.
pub struct WatchlistStore {
    ids: IdSetStore,
}

impl WatchlistStore {
    pub fn new(storage: SharedStore, keys: &StorageKeys) -> Self {
        Self {
            ids: IdSetStore::new(storage, keys.watchlist.clone()),
        }
    }

    pub fn load(&self) -> BTreeSet<u32> {
        self.ids.load()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(id)
    }

    pub fn toggle(&self, id: u32) -> Result<Toggle> {
        let toggle = self.ids.toggle(id)?;
        info!(
            "Watchlist {} {} ({} saved)",
            if toggle.was_added { "added" } else { "removed" },
            id,
            toggle.ids.len()
        );
        Ok(toggle)
    }

    /// Toggle `item` and announce the outcome by title.
    pub fn toggle_item(&self, item: &ContentItem, notifier: &dyn Notifier) -> Result<Toggle> {
        let toggle = self.toggle(item.id)?;
        notifier.notify(&Notice::success(messages::watchlist_toggled(&item.title, toggle.was_added)));
        Ok(toggle)
    }

    pub fn entries(&self) -> Vec<WatchlistEntry> {
        self.load().into_iter().map(WatchlistEntry::new).collect()
    }

    /// Split saved ids into catalog items and ids the catalog no longer has.
    pub fn resolve(&self, catalog: &Catalog) -> (Vec<ContentItem>, Vec<u32>) {
        let mut items = Vec::new();
        let mut unknown = Vec::new();
        for id in self.load() {
            match catalog.get(id) {
                Some(item) => items.push(item.clone()),
                None => unknown.push(id),
            }
        }
        (items, unknown)
    }

    pub fn clear(&self) -> Result<()> {
        self.ids.clear()
    }
}

/// Which notifications the user has already seen.
pub struct NotificationReadStore {
    ids: IdSetStore,
}

impl NotificationReadStore {
    pub fn new(storage: SharedStore, keys: &StorageKeys) -> Self {
        Self {
            ids: IdSetStore::new(storage, keys.notifications_read.clone()),
        }
    }

    pub fn load(&self) -> BTreeSet<u32> {
        self.ids.load()
    }

    pub fn is_read(&self, id: u32) -> bool {
        self.ids.contains(id)
    }

    pub fn mark_read(&self, id: u32) -> Result<bool> {
        self.ids.insert(id)
    }

    pub fn mark_unread(&self, id: u32) -> Result<bool> {
        self.ids.remove(id)
    }

    pub fn mark_all_read(&self, ids: impl IntoIterator<Item = u32>) -> Result<usize> {
        self.ids.insert_all(ids)
    }

    pub fn unread_count(&self, ids: &[u32]) -> usize {
        let read = self.load();
        ids.iter().filter(|id| !read.contains(id)).count()
    }

    pub fn clear(&self) -> Result<()> {
        self.ids.clear()
    }
}
