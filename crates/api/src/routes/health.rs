use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response payload.
#[derive(Serialize)]
struct HealthResponse {
    /// Overall service status; the engine holds no state, so this is
    /// always "ok" while the process is up.
    status: &'static str,
    /// Crate version from Cargo.toml.
    version: &'static str,
}

/// GET /health -- returns service health.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
