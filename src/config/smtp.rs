use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::load_section;
use super::ConfigError;

/// Outgoing mail relay settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smtp {
    pub port: u16,
    pub user: String,
    pub password: String,
    pub host: String,
    pub from: String,
    pub alias: String,
}

impl Smtp {
    /// Loads an SMTP section from its own file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_section(path.as_ref())
    }

    /// Returns `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Formats the sender for a `From` header: `"alias" <from>`, or
    /// `<from>` without an alias. The alias is not escaped.
    pub fn from_address(&self) -> String {
        if self.alias.is_empty() {
            format!("<{}>", self.from)
        } else {
            format!("\"{}\" <{}>", self.alias, self.from)
        }
    }
}
