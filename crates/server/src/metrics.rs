//! Prometheus metrics for the HTTP surface.
//!
//! Request-level metrics live here; the aggregation-layer counters
//! (upstream calls, provider-cache effectiveness, tagline outcomes) are
//! defined in the core crate and registered into the same registry.

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Request latency. Feed requests fan out to TMDB, so the buckets run up
/// to the upstream timeout rather than stopping at interactive latencies.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "nollywatch_http_request_duration_seconds",
            "HTTP request latency in seconds",
        )
        .buckets(vec![0.005, 0.025, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// Requests served, by method, path and status.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("nollywatch_http_requests_total", "HTTP requests served"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// Requests currently being processed.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "nollywatch_http_requests_in_flight",
        "HTTP requests currently in flight",
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    // Double registration happens in tests; ignore it.
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .ok();
    registry.register(Box::new(HTTP_REQUESTS_TOTAL.clone())).ok();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .ok();
    nollywatch_core::metrics::register_core_metrics(registry);
}

/// Render the registry in Prometheus text exposition format.
pub fn gather() -> String {
    let mut buffer = Vec::new();
    if TextEncoder::new()
        .encode(&REGISTRY.gather(), &mut buffer)
        .is_err()
    {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Collapse numeric path segments so movie ids do not explode label
/// cardinality (`/api/movies/603` -> `/api/movies/{id}`).
pub fn normalize_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
