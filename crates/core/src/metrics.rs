//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Upstream TMDB calls (by endpoint)
//! - Provider cache effectiveness
//! - Tagline generation outcomes

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

/// Upstream TMDB requests by endpoint.
pub static UPSTREAM_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "nollywatch_upstream_requests_total",
            "Total TMDB requests issued",
        ),
        &["endpoint"], // "trending", "discover", "search", "detail", "videos", "providers", "genres"
    )
    .unwrap()
});

/// Provider cache hits.
pub static PROVIDER_CACHE_HITS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "nollywatch_provider_cache_hits_total",
        "Watch-provider lookups served from the cache",
    )
    .unwrap()
});

/// Provider cache misses.
pub static PROVIDER_CACHE_MISSES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "nollywatch_provider_cache_misses_total",
        "Watch-provider lookups that went upstream",
    )
    .unwrap()
});

/// Taglines served by outcome.
pub static TAGLINES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("nollywatch_taglines_total", "Taglines served by outcome"),
        &["outcome"], // "generated", "fallback", "error"
    )
    .unwrap()
});

/// Register all core metrics with the given registry.
///
/// Registration errors (double registration in tests) are ignored.
pub fn register_core_metrics(registry: &Registry) {
    registry
        .register(Box::new(UPSTREAM_REQUESTS_TOTAL.clone()))
        .ok();
    registry.register(Box::new(PROVIDER_CACHE_HITS.clone())).ok();
    registry
        .register(Box::new(PROVIDER_CACHE_MISSES.clone()))
        .ok();
    registry.register(Box::new(TAGLINES_TOTAL.clone())).ok();
}
