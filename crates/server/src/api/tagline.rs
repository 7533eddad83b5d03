//! Tagline API handler.
//!
//! The tagline endpoint never surfaces an error object: every response
//! carries some tagline text, real or canned.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use nollywatch_core::{ERROR_TAGLINE, FALLBACK_TAGLINE};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TaglineRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TaglineResponse {
    pub tagline: String,
}

/// POST /api/generate-tagline
pub async fn generate_tagline(
    State(state): State<Arc<AppState>>,
    body: Option<Json<TaglineRequest>>,
) -> (StatusCode, Json<TaglineResponse>) {
    let Some(Json(request)) = body else {
        return canned(StatusCode::BAD_REQUEST, FALLBACK_TAGLINE);
    };
    if request.title.is_empty() || request.description.is_empty() {
        return canned(StatusCode::BAD_REQUEST, FALLBACK_TAGLINE);
    }

    match state
        .tagline()
        .naija_tagline(&request.title, &request.description)
        .await
    {
        Ok(tagline) => (StatusCode::OK, Json(TaglineResponse { tagline })),
        Err(e) => {
            warn!("tagline generation failed: {}", e);
            canned(StatusCode::INTERNAL_SERVER_ERROR, ERROR_TAGLINE)
        }
    }
}

fn canned(status: StatusCode, tagline: &str) -> (StatusCode, Json<TaglineResponse>) {
    (
        status,
        Json(TaglineResponse {
            tagline: tagline.to_string(),
        }),
    )
}
