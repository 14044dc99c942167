//! Settings file loading.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::overlay::ConfigDocument;
use super::{Config, ConfigError, Cookie, DecodeError};

/// Path read by [`parse`].
pub const DEFAULT_PATH: &str = "./settings.json";

/// Encoding of a settings document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Picks the format from the file extension. Anything other than
    /// `.toml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }

    pub(crate) fn decode<T: DeserializeOwned>(self, contents: &str) -> Result<T, DecodeError> {
        match self {
            Format::Json => Ok(serde_json::from_str(contents)?),
            Format::Toml => Ok(toml::from_str(contents)?),
        }
    }
}

/// Loads the settings file at [`DEFAULT_PATH`].
pub fn parse() -> Result<Config, ConfigError> {
    parse_path(DEFAULT_PATH)
}

/// Loads the settings file at `path`.
///
/// The cookie section is overlaid on [`Cookie::default`], so a document
/// without one keeps the default cookie. Every other absent field is zero.
pub fn parse_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let document: ConfigDocument = load_section(path.as_ref())?;
    Ok(document.into_config(Cookie::default()))
}

/// Reads `path` and decodes it according to its extension.
pub(crate) fn load_section<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = read_file(path)?;
    let format = Format::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "decoding settings file");

    format.decode(&contents).map_err(|source| ConfigError::DecodeFile {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
