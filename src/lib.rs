pub mod config;

pub use config::{
    parse, parse_path, Config, ConfigError, Cookie, Database, DecodeError, Location, Metadata,
    Smtp,
};
