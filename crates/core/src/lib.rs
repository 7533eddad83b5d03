pub mod aggregator;
pub mod client;
pub mod config;
pub mod metrics;
pub mod movie;
pub mod tagline;
pub mod testing;
pub mod tmdb;

pub use aggregator::{to_embed_url, AggregatorError, MovieAggregator, ProviderCache};
pub use client::{ApiClient, ApiClientError};
pub use config::{
    load_config, load_config_from_str, Config, ConfigError, SanitizedConfig, ServerConfig,
};
pub use movie::{sample_movies, Movie, Platform, PriceCategory};
pub use tagline::{
    GeminiClient, LlmClient, LlmError, TaglineConfig, TaglineService, ERROR_TAGLINE,
    FALLBACK_TAGLINE,
};
pub use tmdb::{
    CountryListings, DiscoverQuery, GenreEntry, MovieCatalog, MovieDetail, MovieSummary,
    MovieVideo, ProviderEntry, TmdbClient, TmdbConfig, TmdbError, WatchProviderResults,
};
