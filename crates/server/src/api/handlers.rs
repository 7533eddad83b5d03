use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use nollywatch_core::SanitizedConfig;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// GET /metrics
///
/// Prometheus text exposition.
pub async fn metrics() -> String {
    crate::metrics::gather()
}

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub status: String,
}

/// POST /api/subscribe
///
/// Acknowledge an alert subscription. Delivery is out of scope; the
/// handler only validates that an email was provided.
pub async fn subscribe(
    body: Option<Json<SubscribeRequest>>,
) -> (StatusCode, Json<SubscribeResponse>) {
    let email = body.map(|Json(b)| b.email).unwrap_or_default();
    if email.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubscribeResponse {
                status: "invalid".to_string(),
            }),
        );
    }

    (
        StatusCode::OK,
        Json(SubscribeResponse {
            status: "ok".to_string(),
        }),
    )
}
