use serde::Serialize;

use super::overlay::ConfigDocument;
use super::{ConfigError, Cookie, Database, Format, Location, Metadata, Smtp};

/// Site settings: where the site is served, where it is reachable from
/// outside, and the database, cookie, and mail sections.
///
/// Load one with [`parse`](crate::parse) or [`parse_path`](crate::parse_path).
/// [`Config::default`] is a local development setup on port 8080.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub https: bool,
    pub domain: String,
    pub proxy_domain: String,
    pub port: u16,
    pub proxy_port: u16,
    #[serde(rename = "templates")]
    pub template_dir: String,
    pub abs_path: String,
    #[serde(rename = "media")]
    pub media_dir: String,
    pub media_url: String,
    #[serde(rename = "static")]
    pub static_dir: String,
    pub static_url: String,
    pub secret_key: String,
    pub version: String,
    pub database: Database,
    pub cookie: Cookie,
    pub smtp: Smtp,
    pub metadata: Metadata,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            https: false,
            domain: String::new(),
            proxy_domain: String::new(),
            port: 8080,
            proxy_port: 0,
            template_dir: String::new(),
            abs_path: String::new(),
            media_dir: String::new(),
            media_url: String::new(),
            static_dir: String::new(),
            static_url: "/static/".to_string(),
            secret_key: String::new(),
            version: String::new(),
            database: Database::default(),
            cookie: Cookie::default(),
            smtp: Smtp::default(),
            metadata: Metadata::new(),
        }
    }
}

impl Config {
    /// Decodes a JSON settings document.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Self::decode(Format::Json, contents)
    }

    /// Decodes a TOML settings document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::decode(Format::Toml, contents)
    }

    fn decode(format: Format, contents: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument = format.decode(contents)?;
        Ok(document.into_config(Cookie::default()))
    }

    /// The bind address, `domain:port`. Proxy settings are ignored.
    pub fn address(&self) -> String {
        format!("{}:{}", self.domain, self.port)
    }

    /// The proxy domain when set, otherwise the domain.
    pub fn effective_domain(&self) -> &str {
        if self.proxy_domain.is_empty() {
            &self.domain
        } else {
            &self.proxy_domain
        }
    }

    /// The proxy port when set, otherwise the port.
    pub fn effective_port(&self) -> u16 {
        if self.proxy_port == 0 {
            self.port
        } else {
            self.proxy_port
        }
    }

    /// The externally visible base URL.
    ///
    /// Port 80 is left out whatever the scheme, so an `https` site behind a
    /// proxy on port 80 renders as `https://domain`.
    pub fn url(&self) -> Location {
        let scheme = if self.https { "https" } else { "http" };
        let domain = self.effective_domain();
        let host = match self.effective_port() {
            80 => domain.to_string(),
            port => format!("{domain}:{port}"),
        };
        Location::new(scheme, host)
    }

    pub fn full_address(&self) -> String {
        self.url().to_string()
    }

    /// The base URL with its path set to `static_url`.
    pub fn static_address(&self) -> String {
        self.url().with_path(&self.static_url).to_string()
    }

    /// The base URL with its path set to `media_url`.
    pub fn media_address(&self) -> String {
        self.url().with_path(&self.media_url).to_string()
    }
}
