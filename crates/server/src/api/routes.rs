use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, middleware, movies, tagline};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Feeds
        .route("/movies/trending", get(movies::trending))
        .route("/movies/new", get(movies::new_local))
        .route("/movies/cheapest", get(movies::cheapest))
        .route("/movies/low-data", get(movies::low_data))
        .route("/movies/search", get(movies::search))
        .route("/movies/{id}", get(movies::movie_by_id))
        // Alerts
        .route("/subscribe", post(handlers::subscribe))
        // Tagline generation
        .route("/generate-tagline", post(tagline::generate_tagline))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn(middleware::track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
