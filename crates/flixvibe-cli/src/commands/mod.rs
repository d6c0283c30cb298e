pub mod browse;
pub mod config;
pub mod history;
pub mod mylist;
pub mod notifications;
pub mod profile;
pub mod prompts;
pub mod watchlist;

use crate::output::{Output, OutputNotifier};
use catalog_config::{Config, PathManager};
use catalog_core::{Catalog, FileStore, SharedStore, StorageKeys};
use color_eyre::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Everything a command needs: config, storage, keys and the catalog.
pub struct AppContext {
    pub config: Config,
    pub storage: SharedStore,
    pub keys: StorageKeys,
    pub catalog: Catalog,
}

impl AppContext {
    /// Load config (defaults when the file is missing) and open file storage.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let path_manager = PathManager::from_env()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to resolve flixvibe directories: {}", e))?;
        let config_file = config_override.unwrap_or_else(|| path_manager.config_file());

        let config = Config::load_or_default(&config_file)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

        Self::from_config(config, &path_manager)
    }

    pub fn from_config(config: Config, path_manager: &PathManager) -> Result<Self> {
        let store = FileStore::from_config(path_manager, &config);
        debug!("Storage directory: {}", store.dir().display());

        let keys = StorageKeys::from_config(&config);
        let catalog = Catalog::load(&config)?;

        Ok(Self {
            config,
            storage: Arc::new(store),
            keys,
            catalog,
        })
    }

    pub fn notifier<'a>(&self, output: &'a Output) -> OutputNotifier<'a> {
        OutputNotifier::new(output, self.config.notifications.enabled)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use catalog_core::MemoryStore;

    /// A context over in-memory storage and the built-in catalog.
    pub fn memory_context() -> AppContext {
        let config = Config::default();
        AppContext {
            keys: StorageKeys::from_config(&config),
            config,
            storage: MemoryStore::shared(),
            catalog: Catalog::seed(),
        }
    }

    pub fn quiet_output() -> Output {
        Output::new(crate::output::OutputFormat::Json, true)
    }
}
