pub mod config;
pub mod paths;

pub use config::{CatalogConfig, Config, LoggingConfig, NotificationConfig, SearchConfig, StorageConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_NAMESPACE};
pub use paths::{base_path_override, PathManager, BASE_PATH_ENV};
