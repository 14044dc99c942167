//! Document shapes decoded from settings files and the merge onto defaults.
//!
//! Sections whose absent fields must keep a non-zero default are decoded
//! into `Option` fields first. Only the fields present in the document are
//! then applied to the base value.

use std::time::Duration;

use serde::Deserialize;

use super::cookie::{age_nanos, Cookie};
use super::{Config, Database, Metadata, Smtp};

/// Cookie fields as they appear in a document. `None` means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct CookiePatch {
    #[serde(deserialize_with = "age_nanos::deserialize_option")]
    pub age: Option<Duration>,
    pub domain: Option<String>,
    pub http_only: Option<bool>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub secure: Option<bool>,
}

impl CookiePatch {
    pub fn apply(self, mut base: Cookie) -> Cookie {
        if let Some(age) = self.age {
            base.age = age;
        }
        if let Some(domain) = self.domain {
            base.domain = domain;
        }
        if let Some(http_only) = self.http_only {
            base.http_only = http_only;
        }
        if let Some(name) = self.name {
            base.name = name;
        }
        if let Some(path) = self.path {
            base.path = path;
        }
        if let Some(secure) = self.secure {
            base.secure = secure;
        }
        base
    }
}

/// A whole settings document. Scalars and the zero-valued sections fall
/// back to their zero values; the cookie section is a patch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigDocument {
    pub https: bool,
    pub domain: String,
    pub proxy_domain: String,
    pub port: u16,
    pub proxy_port: u16,
    pub templates: String,
    pub abs_path: String,
    pub media: String,
    pub media_url: String,
    #[serde(rename = "static")]
    pub static_dir: String,
    pub static_url: String,
    pub secret_key: String,
    pub version: String,
    pub database: Database,
    pub cookie: CookiePatch,
    pub smtp: Smtp,
    pub metadata: Metadata,
}

impl ConfigDocument {
    /// Builds a [`Config`] with the cookie section overlaid on `cookie`.
    pub fn into_config(self, cookie: Cookie) -> Config {
        Config {
            https: self.https,
            domain: self.domain,
            proxy_domain: self.proxy_domain,
            port: self.port,
            proxy_port: self.proxy_port,
            template_dir: self.templates,
            abs_path: self.abs_path,
            media_dir: self.media,
            media_url: self.media_url,
            static_dir: self.static_dir,
            static_url: self.static_url,
            secret_key: self.secret_key,
            version: self.version,
            database: self.database,
            cookie: self.cookie.apply(cookie),
            smtp: self.smtp,
            metadata: self.metadata,
        }
    }
}
