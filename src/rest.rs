use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

// The only HTTP surface this service exposes; unauthenticated by design.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "interview reminder service running" }))
}

pub fn router() -> Router {
    Router::new().route("/api/health", get(health))
}
