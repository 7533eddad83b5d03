use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration by layering, lowest to highest precedence:
/// built-in defaults, an optional TOML file, `NOLLYWATCH_`-prefixed
/// environment variables (`__` separates nesting, e.g.
/// `NOLLYWATCH_TMDB__API_KEY`), and finally the bare deployment variables
/// the original surface documents: `TMDB_API_KEY`, `GEMINI_API_KEY`,
/// `TMDB_REGION` and `PORT`.
///
/// A missing file is not an error; the service boots from environment
/// and defaults alone.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("NOLLYWATCH_").split("__"));

    for (var, key) in [
        ("TMDB_API_KEY", "tmdb.api_key"),
        ("GEMINI_API_KEY", "tagline.api_key"),
        ("TMDB_REGION", "tmdb.region"),
    ] {
        if let Ok(value) = std::env::var(var) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }
    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::ParseError(format!("invalid PORT value: {}", port)))?;
        figment = figment.merge(Serialized::default("server.port", port));
    }

    figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
