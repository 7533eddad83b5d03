//! Movie feed API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use nollywatch_core::{AggregatorError, Movie};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type FeedResult = Result<Json<Vec<Movie>>, (StatusCode, Json<ErrorResponse>)>;

/// Map an aggregation failure to the wire error shape.
///
/// Missing credential is the caller's configuration problem (400);
/// anything upstream collapses to a feed-specific 500 message without
/// leaking upstream details.
fn feed_error(err: AggregatorError, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        AggregatorError::NotConfigured => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "TMDB_API_KEY is not configured.".to_string(),
            }),
        ),
        AggregatorError::Upstream(e) => {
            error!("upstream failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
        }
    }
}

/// GET /api/movies/trending
pub async fn trending(State(state): State<Arc<AppState>>) -> FeedResult {
    state
        .aggregator()
        .trending()
        .await
        .map(Json)
        .map_err(|e| feed_error(e, "Failed to load trending movies."))
}

/// GET /api/movies/new
pub async fn new_local(State(state): State<Arc<AppState>>) -> FeedResult {
    state
        .aggregator()
        .new_local()
        .await
        .map(Json)
        .map_err(|e| feed_error(e, "Failed to load new Afro films."))
}

/// GET /api/movies/cheapest
pub async fn cheapest(State(state): State<Arc<AppState>>) -> FeedResult {
    state
        .aggregator()
        .cheapest()
        .await
        .map(Json)
        .map_err(|e| feed_error(e, "Failed to load cheapest picks."))
}

/// GET /api/movies/low-data
pub async fn low_data(State(state): State<Arc<AppState>>) -> FeedResult {
    state
        .aggregator()
        .low_data()
        .await
        .map(Json)
        .map_err(|e| feed_error(e, "Failed to load low-data picks."))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// GET /api/movies/search?query=...
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> FeedResult {
    state
        .aggregator()
        .search(&params.query)
        .await
        .map(Json)
        .map_err(|e| feed_error(e, "Failed to search movies."))
}

/// GET /api/movies/{id}
pub async fn movie_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Movie>, (StatusCode, Json<ErrorResponse>)> {
    match state.aggregator().movie_by_id(id).await {
        Ok(movie) => Ok(Json(movie)),
        Err(AggregatorError::Upstream(nollywatch_core::TmdbError::NotFound(_))) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Movie not found: {}", id),
            }),
        )),
        Err(e) => Err(feed_error(e, "Failed to load movie details.")),
    }
}
