use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode settings file '{path}': {source}")]
    DecodeFile {
        path: PathBuf,
        source: DecodeError,
    },

    #[error("failed to decode settings: {0}")]
    Decode(#[from] DecodeError),

    #[error("invalid database url '{url}': {source}")]
    InvalidDatabaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// A document that could be read but not turned into typed settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
