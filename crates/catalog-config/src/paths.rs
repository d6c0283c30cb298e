use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable that relocates every flixvibe path under one directory.
pub const BASE_PATH_ENV: &str = "FLIXVIBE_BASE_PATH";

/// The base directory from `FLIXVIBE_BASE_PATH`, if set and non-empty.
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var_os(BASE_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("flixvibe");

        Ok(Self {
            config_dir: base_dir.clone(),
            data_dir: base_dir.join("data"),
            log_dir: base_dir.join("logs"),
        })
    }

    pub fn from_base(base: PathBuf) -> Self {
        // Config file at base level, data/logs in subdirs
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    /// Use `base` when given, otherwise the per-user config directory.
    pub fn resolve(base: Option<PathBuf>) -> Result<Self> {
        match base {
            Some(base) => Ok(Self::from_base(base)),
            None => Self::new(),
        }
    }

    /// Honour `FLIXVIBE_BASE_PATH`, falling back to ~/.config/flixvibe.
    pub fn from_env() -> Result<Self> {
        Self::resolve(base_path_override())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Directory holding one JSON file per storage key.
    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir.join("storage")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("flixvibe.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        std::fs::create_dir_all(self.storage_dir())?;
        Ok(())
    }
}
