//! Routes and handlers for the `/store` resource.

use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use petstore_core::ops::store;
use petstore_core::types::ResourceId;
use serde_json::Value;

use crate::response::OperationResponse;
use crate::routes::with_body_object;

/// GET /api/v1/store/inventory
async fn get_inventory() -> OperationResponse {
    store::get_inventory().into()
}

/// POST /api/v1/store/order
async fn place_order(Json(body): Json<Value>) -> OperationResponse {
    with_body_object(&body, store::place_order).into()
}

/// GET /api/v1/store/order/{orderId}
async fn get_order(Path(order_id): Path<ResourceId>) -> OperationResponse {
    store::get_order_by_id(order_id).into()
}

/// DELETE /api/v1/store/order/{orderId}
async fn delete_order(Path(order_id): Path<ResourceId>) -> OperationResponse {
    store::delete_order(order_id).into()
}

/// Routes mounted at `/store`.
pub fn router() -> Router {
    Router::new()
        .route("/inventory", get(get_inventory))
        .route("/order", post(place_order))
        .route("/order/{orderId}", get(get_order).delete(delete_order))
}
