use catalog_models::SortKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_NAMESPACE: &str = "flixvibe";
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Prefix for every storage key, e.g. `flixvibe-watchlist`
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Overrides the platform data directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default)]
    pub default_sort: SortKey,
    /// Number of popular titles suggested while browsing
    #[serde(default = "default_suggestions")]
    pub suggestions: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON file with a catalog to use instead of the built-in one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NotificationConfig {
    /// Print toast-style notices after actions
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub file: Option<PathBuf>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_suggestions() -> usize {
    4
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            dir: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            default_sort: SortKey::default(),
            suggestions: default_suggestions(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.storage.namespace.trim().is_empty() {
            return Err(anyhow::anyhow!("storage.namespace cannot be empty"));
        }
        if self.storage.namespace.contains(|c: char| c == '/' || c == '\\') {
            return Err(anyhow::anyhow!("storage.namespace cannot contain path separators"));
        }
        if self.storage.namespace.starts_with('.') {
            return Err(anyhow::anyhow!("storage.namespace cannot start with '.'"));
        }
        if self.search.history_limit == 0 {
            return Err(anyhow::anyhow!("search.history_limit must be at least 1"));
        }
        if let SortKey::Unrecognized(ref key) = self.search.default_sort {
            return Err(anyhow::anyhow!("Invalid search.default_sort: {}", key));
        }
        Ok(())
    }
}
