use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Checks the SQLite connection when the store is backed by one. Other
/// backends are ready as soon as the process is.
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    let Some(pool) = &app_state.pool else {
        return (
            StatusCode::OK,
            Json(json!({"status": "ready", "store": app_state.config.store.backend.to_string()})),
        );
    };

    match sqlx::query("SELECT 1").fetch_one(pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "store": "sqlite"})),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: database unavailable - {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "database_unavailable"
                })),
            )
        }
    }
}
