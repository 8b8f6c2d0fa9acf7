//! Routes and handlers for the `/pet` resource.

use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use petstore_core::ops::pet;
use petstore_core::types::ResourceId;
use serde::Deserialize;
use serde_json::Value;

use crate::response::OperationResponse;
use crate::routes::with_body_object;

/// PUT /api/v1/pet
async fn update_pet(Json(body): Json<Value>) -> OperationResponse {
    with_body_object(&body, pet::update_pet).into()
}

/// POST /api/v1/pet
async fn add_pet(Json(body): Json<Value>) -> OperationResponse {
    with_body_object(&body, pet::add_pet).into()
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: Option<String>,
}

/// GET /api/v1/pet/findByStatus?status=available
async fn find_by_status(Query(query): Query<StatusQuery>) -> OperationResponse {
    pet::find_pets_by_status(query.status.as_deref().unwrap_or("available")).into()
}

#[derive(Debug, Deserialize)]
struct TagsQuery {
    tags: Option<String>,
}

/// GET /api/v1/pet/findByTags?tags=a,b
async fn find_by_tags(Query(query): Query<TagsQuery>) -> OperationResponse {
    let tags = query.tags.map(Value::String).unwrap_or(Value::Null);
    pet::find_pets_by_tags(&tags).into()
}

/// GET /api/v1/pet/{petId}
async fn get_pet(Path(pet_id): Path<ResourceId>) -> OperationResponse {
    pet::get_pet_by_id(pet_id).into()
}

#[derive(Debug, Deserialize)]
struct FormQuery {
    name: Option<String>,
    status: Option<String>,
}

/// POST /api/v1/pet/{petId}?name=X&status=Y
async fn update_with_form(
    Path(pet_id): Path<ResourceId>,
    Query(query): Query<FormQuery>,
) -> OperationResponse {
    pet::update_pet_with_form(pet_id, query.name.as_deref(), query.status.as_deref()).into()
}

/// DELETE /api/v1/pet/{petId}
async fn delete_pet(Path(pet_id): Path<ResourceId>) -> OperationResponse {
    pet::delete_pet(pet_id).into()
}

#[derive(Debug, Deserialize)]
struct UploadQuery {
    #[serde(rename = "additionalMetadata")]
    additional_metadata: Option<String>,
}

/// POST /api/v1/pet/{petId}/uploadImage
///
/// The raw request body is the image payload; an empty body counts as
/// no payload.
async fn upload_image(
    Path(pet_id): Path<ResourceId>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> OperationResponse {
    let image = (!body.is_empty()).then_some(body.as_ref());
    pet::upload_pet_image(pet_id, query.additional_metadata.as_deref(), image).into()
}

/// Routes mounted at `/pet`.
pub fn router() -> Router {
    Router::new()
        .route("/", put(update_pet).post(add_pet))
        .route("/findByStatus", get(find_by_status))
        .route("/findByTags", get(find_by_tags))
        .route(
            "/{petId}",
            get(get_pet).post(update_with_form).delete(delete_pet),
        )
        .route("/{petId}/uploadImage", post(upload_image))
}
