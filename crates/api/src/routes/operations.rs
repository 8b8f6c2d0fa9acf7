//! Contract introspection and named operation dispatch.

use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use petstore_core::{catalogue, registry};
use serde_json::{json, Value};

use crate::response::OperationResponse;

/// GET /api/v1/operations
///
/// List every operation contract: id, method, path, parameters and
/// required body keys.
async fn list_operations() -> Json<Value> {
    Json(json!({ "data": catalogue::OPERATIONS }))
}

/// POST /api/v1/operations/{operationId}
///
/// Invoke an operation by id with a JSON object of arguments. An
/// absent body is treated as an empty argument object.
async fn invoke_operation(
    Path(operation_id): Path<String>,
    body: Option<Json<Value>>,
) -> OperationResponse {
    let args = body.map_or_else(|| json!({}), |Json(args)| args);
    registry::invoke(&operation_id, &args).into()
}

/// Routes mounted at `/operations`.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_operations))
        .route("/{operationId}", post(invoke_operation))
}
