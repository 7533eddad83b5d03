use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::tagline::TaglineConfig;
use crate::tmdb::TmdbConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub tagline: TaglineConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5174
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub tmdb: SanitizedTmdbConfig,
    pub tagline: SanitizedTaglineConfig,
}

/// Sanitized TMDB config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTmdbConfig {
    pub region: String,
    pub api_key_configured: bool,
    pub timeout_secs: u32,
    pub provider_cache_capacity: usize,
}

/// Sanitized tagline config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTaglineConfig {
    pub model: String,
    pub api_key_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            tmdb: SanitizedTmdbConfig {
                region: config.tmdb.region.clone(),
                api_key_configured: !config.tmdb.api_key.is_empty(),
                timeout_secs: config.tmdb.timeout_secs,
                provider_cache_capacity: config.tmdb.provider_cache_capacity,
            },
            tagline: SanitizedTaglineConfig {
                model: config.tagline.model.clone(),
                api_key_configured: !config.tagline.api_key.is_empty(),
            },
        }
    }
}
