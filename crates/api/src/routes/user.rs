//! Routes and handlers for the `/user` resource.

use axum::extract::{Path, Query};
use axum::routing::{get, post};
use axum::{Json, Router};
use petstore_core::ops::user;
use petstore_core::OperationResult;
use serde::Deserialize;
use serde_json::Value;

use crate::response::OperationResponse;
use crate::routes::with_body_object;

/// POST /api/v1/user
async fn create_user(Json(body): Json<Value>) -> OperationResponse {
    with_body_object(&body, user::create_user).into()
}

/// POST /api/v1/user/createWithList
async fn create_with_list(Json(body): Json<Value>) -> OperationResponse {
    match body.as_array() {
        Some(users) => user::create_users_with_list(users).into(),
        None => OperationResult::validation("Users list is required").into(),
    }
}

#[derive(Debug, Deserialize)]
struct LoginQuery {
    username: Option<String>,
    password: Option<String>,
}

/// GET /api/v1/user/login?username=X&password=Y
async fn login(Query(query): Query<LoginQuery>) -> OperationResponse {
    user::login_user(query.username.as_deref(), query.password.as_deref()).into()
}

/// GET /api/v1/user/logout
async fn logout() -> OperationResponse {
    user::logout_user().into()
}

/// GET /api/v1/user/{username}
async fn get_user(Path(username): Path<String>) -> OperationResponse {
    user::get_user_by_name(&username).into()
}

/// PUT /api/v1/user/{username}
async fn update_user(Path(username): Path<String>, Json(body): Json<Value>) -> OperationResponse {
    user::update_user(&username, &body).into()
}

/// DELETE /api/v1/user/{username}
async fn delete_user(Path(username): Path<String>) -> OperationResponse {
    user::delete_user(&username).into()
}

/// Routes mounted at `/user`.
pub fn router() -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/createWithList", post(create_with_list))
        .route("/login", get(login))
        .route("/logout", get(logout))
        .route(
            "/{username}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
