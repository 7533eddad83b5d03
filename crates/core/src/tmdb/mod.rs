//! TMDB (The Movie Database) upstream integration.
//!
//! The aggregation layer talks to TMDB exclusively through the
//! [`MovieCatalog`] trait so tests can substitute a mock with recorded
//! calls.

mod client;
mod types;

pub use client::{TmdbClient, TmdbConfig, DEFAULT_IMAGE_BASE_URL};
pub use types::{
    CountryListings, DiscoverQuery, GenreEntry, MovieDetail, MovieSummary, MovieVideo,
    ProductionCountry, ProviderEntry, WatchProviderResults,
};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the upstream movie catalog.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimited,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for the upstream movie catalog.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Weekly trending movies for a region, in upstream order.
    async fn trending_week(&self, region: &str) -> Result<Vec<MovieSummary>, TmdbError>;

    /// Discovery listing for the given query, in upstream order.
    async fn discover(&self, query: &DiscoverQuery) -> Result<Vec<MovieSummary>, TmdbError>;

    /// Free-text movie search.
    async fn search_movies(&self, query: &str, region: &str)
        -> Result<Vec<MovieSummary>, TmdbError>;

    /// Full detail record for one movie.
    async fn movie_detail(&self, id: u64) -> Result<MovieDetail, TmdbError>;

    /// Video list (trailers, teasers, clips) for one movie.
    async fn movie_videos(&self, id: u64) -> Result<Vec<MovieVideo>, TmdbError>;

    /// Watch-provider offers for one movie, keyed by region.
    async fn watch_providers(&self, id: u64) -> Result<WatchProviderResults, TmdbError>;

    /// The full genre id-to-name table.
    async fn genre_list(&self) -> Result<Vec<GenreEntry>, TmdbError>;
}
