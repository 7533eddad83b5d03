//! Configuration loading and types.
//!
//! All settings have working defaults; the service boots from environment
//! variables alone, with an optional TOML file underneath.

mod loader;
mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::{
    Config, SanitizedConfig, SanitizedTaglineConfig, SanitizedTmdbConfig, ServerConfig,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}
