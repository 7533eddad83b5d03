//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock upstream catalog injected, enabling comprehensive E2E
//! testing without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use nollywatch_core::testing::MockMovieCatalog;
use nollywatch_core::{Config, MovieAggregator, MovieCatalog, TaglineService};
use nollywatch_server::api::create_router;
use nollywatch_server::state::AppState;

/// Re-export fixtures for test convenience
pub use nollywatch_core::testing::fixtures;

/// Test fixture for E2E testing with a mock upstream.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock upstream catalog - configure listings and inspect recorded
    /// queries
    pub catalog: Arc<MockMovieCatalog>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with the mock catalog wired as the upstream.
    pub fn new() -> Self {
        let catalog = Arc::new(MockMovieCatalog::new());

        let mut config = Config::default();
        config.tmdb.api_key = "test-key".to_string();

        let aggregator = MovieAggregator::new(
            Some(Arc::clone(&catalog) as Arc<dyn MovieCatalog>),
            &config.tmdb,
        );
        let tagline = TaglineService::new(None, config.tagline.max_tokens);

        let state = Arc::new(AppState::new(config, aggregator, tagline));

        Self {
            router: create_router(state),
            catalog,
        }
    }

    /// Create a fixture with no upstream credential configured.
    ///
    /// The mock catalog exists but is deliberately not wired in, so any
    /// recorded query would prove the server leaked an upstream call.
    pub fn unconfigured() -> Self {
        let catalog = Arc::new(MockMovieCatalog::new());

        let config = Config::default();
        let aggregator = MovieAggregator::new(None, &config.tmdb);
        let tagline = TaglineService::new(None, config.tagline.max_tokens);

        let state = Arc::new(AppState::new(config, aggregator, tagline));

        Self {
            router: create_router(state),
            catalog,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }
}
