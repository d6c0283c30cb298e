use crate::error::Result;
use crate::keys::StorageKeys;
use crate::notify::{messages, Notice, Notifier};
use crate::storage::{load_json, save_json, SharedStore};
use catalog_config::DEFAULT_HISTORY_LIMIT;
use tracing::{debug, info};

/// Bounded, most-recent-first log of submitted queries.
pub struct SearchHistoryStore {
    storage: SharedStore,
    key: String,
    limit: usize,
}

impl SearchHistoryStore {
    /// `limit` below 1 is raised to 1.
    pub fn new(storage: SharedStore, keys: &StorageKeys, limit: usize) -> Self {
        Self {
            storage,
            key: keys.search_history.clone(),
            limit: limit.max(1),
        }
    }

    pub fn with_default_limit(storage: SharedStore, keys: &StorageKeys) -> Self {
        Self::new(storage, keys, DEFAULT_HISTORY_LIMIT)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Stored queries, most recent first. Absent or unparsable values read
    /// as empty; a list longer than the limit is cut on read.
    pub fn load(&self) -> Vec<String> {
        let mut history: Vec<String> = load_json(self.storage.as_ref(), &self.key).unwrap_or_default();
        history.truncate(self.limit);
        history
    }

    pub fn contains(&self, query: &str) -> bool {
        let query = query.trim();
        self.load().iter().any(|entry| entry == query)
    }

    /// Record a submitted query and return the resulting history.
    ///
    /// The query is trimmed. Empty queries and queries already anywhere in
    /// the history leave it unchanged and write nothing.
    pub fn record(&self, query: &str) -> Result<Vec<String>> {
        let query = query.trim();
        let mut history = self.load();

        if query.is_empty() {
            return Ok(history);
        }
        if history.iter().any(|entry| entry == query) {
            debug!("Query {:?} already in search history", query);
            return Ok(history);
        }

        history.insert(0, query.to_string());
        history.truncate(self.limit);
        save_json(self.storage.as_ref(), &self.key, &history)?;
        debug!("Recorded query {:?} ({} in history)", query, history.len());
        Ok(history)
    }

    pub fn clear(&self, notifier: &dyn Notifier) -> Result<()> {
        self.storage.remove(&self.key)?;
        info!("Search history cleared");
        notifier.notify(&Notice::success(messages::HISTORY_CLEARED));
        Ok(())
    }
}
