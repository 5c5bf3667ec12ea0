//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("unknown section id '{0}'")]
    UnknownSection(String),

    #[error("failed to read content file {path}: {source}")]
    ContentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse content file {path}: {source}")]
    ContentParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("threshold for '{section}' must be in (0, 1], got {value}")]
    InvalidThreshold { section: String, value: f32 },

    #[error("terminal input failed: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
