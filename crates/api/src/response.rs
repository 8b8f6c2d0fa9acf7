//! Conversion of engine results into HTTP responses.
//!
//! The engine owns status codes and bodies; this module only maps them
//! onto the wire. Success bodies are returned as-is; failures use a
//! consistent `{ "error": ..., "code": ... }` JSON envelope, with the
//! catch-all `"default"` code carried in the body and reported as 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petstore_core::OperationResult;
use serde_json::json;

/// Newtype making [`OperationResult`] an axum response.
pub struct OperationResponse(pub OperationResult);

impl From<OperationResult> for OperationResponse {
    fn from(result: OperationResult) -> Self {
        OperationResponse(result)
    }
}

impl IntoResponse for OperationResponse {
    fn into_response(self) -> Response {
        match self.0 {
            OperationResult::Success { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
                (status, Json(body)).into_response()
            }
            OperationResult::Failure {
                status,
                message,
                detail,
            } => {
                let http = StatusCode::from_u16(status.http_status())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let mut body = json!({
                    "error": message,
                    "code": status,
                });
                if let Some(detail) = detail {
                    body["detail"] = json!(detail);
                }
                (http, Json(body)).into_response()
            }
        }
    }
}
