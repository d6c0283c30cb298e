use crate::catalog::apply;
use crate::error::Result;
use crate::keys::StorageKeys;
use crate::notify::{messages, Notice, Notifier};
use crate::storage::{load_json, save_json, SharedStore};
use catalog_models::{ContentItem, FilterCriteria, MyListEntry, SortKey};
use chrono::{DateTime, Utc};
use tracing::info;

/// Saved titles with the time they were added. Entries keep a full copy of
/// the item.
pub struct MyListStore {
    storage: SharedStore,
    key: String,
}

impl MyListStore {
    pub fn new(storage: SharedStore, keys: &StorageKeys) -> Self {
        Self {
            storage,
            key: keys.my_list.clone(),
        }
    }

    /// Saved entries in insertion order; absent or unparsable values read as
    /// empty.
    pub fn load(&self) -> Vec<MyListEntry> {
        load_json(self.storage.as_ref(), &self.key).unwrap_or_default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.load().iter().any(|entry| entry.id() == id)
    }

    /// Remove `item` when saved, otherwise append it stamped with the current
    /// time. Returns the new list and whether the item was added.
    pub fn toggle(&self, item: &ContentItem) -> Result<(Vec<MyListEntry>, bool)> {
        self.toggle_at(item, Utc::now())
    }

    pub fn toggle_at(&self, item: &ContentItem, now: DateTime<Utc>) -> Result<(Vec<MyListEntry>, bool)> {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|entry| entry.id() != item.id);

        let added = entries.len() == before;
        if added {
            entries.push(MyListEntry::new(item.clone(), now));
        }

        save_json(self.storage.as_ref(), &self.key, &entries)?;
        info!(
            "My List {} {} ({} saved)",
            if added { "added" } else { "removed" },
            item.id,
            entries.len()
        );
        Ok((entries, added))
    }

    /// Remove the entry for `id`, returning it when it was present.
    pub fn remove(&self, id: u32) -> Result<Option<MyListEntry>> {
        let mut entries = self.load();
        let Some(pos) = entries.iter().position(|entry| entry.id() == id) else {
            return Ok(None);
        };

        let removed = entries.remove(pos);
        save_json(self.storage.as_ref(), &self.key, &entries)?;
        info!("My List removed {} ({} saved)", id, entries.len());
        Ok(Some(removed))
    }

    pub fn toggle_item(&self, item: &ContentItem, notifier: &dyn Notifier) -> Result<bool> {
        let (_, added) = self.toggle(item)?;
        notifier.notify(&Notice::success(messages::my_list_toggled(&item.title, added)));
        Ok(added)
    }

    pub fn remove_item(&self, id: u32, notifier: &dyn Notifier) -> Result<Option<MyListEntry>> {
        let removed = self.remove(id)?;
        if let Some(entry) = &removed {
            notifier.notify(&Notice::success(messages::my_list_removed(&entry.item.title)));
        }
        Ok(removed)
    }

    /// Filtered, sorted view of the saved entries.
    pub fn listing(&self, criteria: &FilterCriteria) -> Vec<MyListEntry> {
        apply(&self.load(), criteria)
    }

    /// The page's default view: everything, newest first.
    pub fn default_criteria() -> FilterCriteria {
        FilterCriteria::new().with_sort(SortKey::DateAdded)
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)
    }
}
