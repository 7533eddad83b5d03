//! Movie aggregation and normalization.
//!
//! This is the layer that turns raw upstream listings into the canonical
//! [`Movie`](crate::movie::Movie) representation: it merges watch-provider
//! and genre data, derives the local business fields (price category,
//! low-data flag, home-region flag) and enriches single movies with
//! detail-endpoint data.

mod embed;
mod provider_cache;
mod service;

pub use embed::to_embed_url;
pub use provider_cache::ProviderCache;
pub use service::MovieAggregator;

use thiserror::Error;

use crate::tmdb::TmdbError;

/// Errors from the aggregation layer.
#[derive(Debug, Error)]
pub enum AggregatorError {
    /// The upstream credential is missing; feeds refuse to serve rather
    /// than fabricate data.
    #[error("TMDB API key is not configured")]
    NotConfigured,

    /// The upstream call failed.
    #[error(transparent)]
    Upstream(#[from] TmdbError),
}
