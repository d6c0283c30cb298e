use catalog_config::{Config, DEFAULT_NAMESPACE};

/// Storage keys, one independent record each, all sharing a namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub watchlist: String,
    pub search_history: String,
    pub my_list: String,
    pub notifications_read: String,
    pub profile: String,
    pub settings: String,
}

impl StorageKeys {
    pub fn new(namespace: &str) -> Self {
        Self {
            watchlist: format!("{}-watchlist", namespace),
            search_history: format!("{}-search-history", namespace),
            my_list: format!("{}-mylist", namespace),
            notifications_read: format!("{}-notifications-read", namespace),
            profile: format!("{}-profile", namespace),
            settings: format!("{}-settings", namespace),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.storage.namespace)
    }

    pub fn all(&self) -> [&str; 6] {
        [
            &self.watchlist,
            &self.search_history,
            &self.my_list,
            &self.notifications_read,
            &self.profile,
            &self.settings,
        ]
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
