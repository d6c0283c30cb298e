pub mod browse;
pub mod catalog;
pub mod error;
pub mod history;
pub mod keys;
pub mod my_list;
pub mod notify;
pub mod profile;
pub mod storage;
pub mod watchlist;

pub use browse::{BrowseSession, BrowseState};
pub use catalog::{apply, compare_titles, Catalog, Listing};
pub use error::{Result, StoreError};
pub use history::SearchHistoryStore;
pub use keys::StorageKeys;
pub use my_list::MyListStore;
pub use notify::{messages, Notice, NoticeKind, Notifier, NoopNotifier, RecordingNotifier, TracingNotifier};
pub use profile::{delete_account, ProfileStore, SettingsStore};
pub use storage::{load_json, save_json, FileStore, KeyValueStore, MemoryStore, SharedStore};
pub use watchlist::{IdSetStore, NotificationReadStore, Toggle, WatchlistStore};
