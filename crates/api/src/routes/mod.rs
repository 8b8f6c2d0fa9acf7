pub mod health;
pub mod operations;
pub mod pet;
pub mod store;
pub mod user;

use axum::Router;
use petstore_core::types::JsonMap;
use petstore_core::OperationResult;
use serde_json::Value;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pet                         update (PUT), add (POST)
/// /pet/findByStatus            find by status (GET)
/// /pet/findByTags              find by tags (GET)
/// /pet/{petId}                 get, form update (POST), delete
/// /pet/{petId}/uploadImage     upload image (POST)
///
/// /store/inventory             inventory counts (GET)
/// /store/order                 place order (POST)
/// /store/order/{orderId}       get, delete
///
/// /user                        create (POST)
/// /user/createWithList         bulk create (POST)
/// /user/login                  login (GET)
/// /user/logout                 logout (GET)
/// /user/{username}             get, update (PUT), delete
///
/// /operations                  contract catalogue (GET)
/// /operations/{operationId}    named dispatch (POST)
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .nest("/pet", pet::router())
        .nest("/store", store::router())
        .nest("/user", user::router())
        .nest("/operations", operations::router())
}

/// Run a body-consuming operation against a JSON request body,
/// rejecting non-object payloads before the engine sees them.
pub(crate) fn with_body_object(
    body: &Value,
    op: impl FnOnce(&JsonMap) -> OperationResult,
) -> OperationResult {
    match body.as_object() {
        Some(object) => op(object),
        None => OperationResult::validation("Request body must be a JSON object"),
    }
}
