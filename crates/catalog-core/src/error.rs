use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read storage key {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write storage key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize value for storage key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("invalid value {value:?} for {field} (expected one of: {allowed})")]
    InvalidValue {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("failed to load catalog from {}: {message}", path.display())]
    Catalog { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
