//! Site settings and the addresses derived from them.

mod cookie;
mod database;
mod error;
mod loader;
mod location;
mod metadata;
mod overlay;
mod settings;
mod smtp;

pub use self::cookie::Cookie;
pub use database::Database;
pub use error::{ConfigError, DecodeError};
pub use loader::{parse, parse_path, Format, DEFAULT_PATH};
pub use location::Location;
pub use metadata::Metadata;
pub use settings::Config;
pub use smtp::Smtp;
