//! User resource operations.

use serde_json::{json, Value};

use crate::result::OperationResult;
use crate::simulation;
use crate::types::JsonMap;
use crate::validate;

/// Required body keys for every user payload, in declared order.
pub const USER_REQUIRED: &[&str] = &["id", "username", "password"];

const INVALID_USERNAME: &str = "Invalid username supplied";

/// POST /user -- create a user, echoing the payload.
pub fn create_user(user: &JsonMap) -> OperationResult {
    if let Err(err) = validate::require_fields(user, USER_REQUIRED) {
        return err.into();
    }

    OperationResult::ok(json!({
        "message": "User created successfully",
        "user": user,
        "content_types": simulation::CONTENT_TYPES,
    }))
}

/// POST /user/createWithList -- create users from a list.
///
/// The whole call fails with one aggregate message if any element is
/// missing a required field; there is no partial success.
pub fn create_users_with_list(users: &[Value]) -> OperationResult {
    if users.is_empty() {
        return OperationResult::validation("Users list is required");
    }

    let any_invalid = users.iter().any(|user| match user.as_object() {
        Some(map) => !validate::missing_fields(map, USER_REQUIRED).is_empty(),
        None => true,
    });
    if any_invalid {
        return OperationResult::validation(
            "One or more users missing required fields (id, username, password)",
        );
    }

    OperationResult::ok(json!({
        "message": format!("{} users created successfully", users.len()),
        "users": users,
        "content_types": simulation::CONTENT_TYPES,
    }))
}

/// GET /user/login -- synthesize a session token.
///
/// The token is a fixed-format string with no cryptographic meaning.
pub fn login_user(username: Option<&str>, password: Option<&str>) -> OperationResult {
    let (Some(username), Some(_password)) = (
        username.filter(|u| !u.is_empty()),
        password.filter(|p| !p.is_empty()),
    ) else {
        return OperationResult::validation("Username and password are required");
    };

    OperationResult::ok(json!({
        "description": "Login successful",
        "username": username,
        "token": simulation::session_token(username),
        "content_types": simulation::CONTENT_TYPES,
    }))
}

/// GET /user/logout -- confirm logout.
pub fn logout_user() -> OperationResult {
    OperationResult::ok(json!({
        "description": "User logged out successfully",
        "status": "logged_out",
    }))
}

/// GET /user/{username} -- fetch the synthetic user for a username.
pub fn get_user_by_name(username: &str) -> OperationResult {
    if let Err(err) = validate::require_non_blank(username, INVALID_USERNAME) {
        return err.into();
    }
    if !simulation::user_on_record(username) {
        return OperationResult::not_found(format!("User '{username}' not found"));
    }

    OperationResult::ok(json!({
        "description": format!("User data for {username}"),
        "user": simulation::synthetic_user(username),
        "content_types": simulation::CONTENT_TYPES,
    }))
}

/// PUT /user/{username} -- update a user, echoing the payload.
///
/// The body must be an object with at least one field.
pub fn update_user(username: &str, user: &Value) -> OperationResult {
    if let Err(err) = validate::require_non_blank(username, INVALID_USERNAME) {
        return err.into();
    }
    if !simulation::user_on_record(username) {
        return OperationResult::not_found(format!("User '{username}' not found"));
    }
    if !user.as_object().is_some_and(|map| !map.is_empty()) {
        return OperationResult::validation("Request body is required with at least one field");
    }

    OperationResult::ok(json!({
        "description": format!("User '{username}' updated successfully"),
        "username": username,
        "updated_user": user,
    }))
}

/// DELETE /user/{username} -- delete a user by username.
pub fn delete_user(username: &str) -> OperationResult {
    if let Err(err) = validate::require_non_blank(username, INVALID_USERNAME) {
        return err.into();
    }
    if !simulation::user_on_record(username) {
        return OperationResult::not_found(format!("User '{username}' not found"));
    }

    OperationResult::ok(json!({
        "description": format!("User '{username}' deleted successfully"),
        "status": "deleted",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_payload(pairs: &[(&str, Value)]) -> JsonMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn full_user(id: i64, username: &str) -> Value {
        json!({ "id": id, "username": username, "password": "secret" })
    }

    // -- createUser --

    #[test]
    fn create_user_requires_id_username_and_password() {
        let user = user_payload(&[("username", json!("alice"))]);
        let result = create_user(&user);
        assert_eq!(result.http_status(), 400);
        assert_eq!(
            result.message(),
            Some("Missing required fields: id, password")
        );
    }

    #[test]
    fn create_user_echoes_the_payload() {
        let user = user_payload(&[
            ("id", json!(1)),
            ("username", json!("alice")),
            ("password", json!("secret")),
            ("email", json!("alice@example.com")),
        ]);
        let result = create_user(&user);
        assert_eq!(result.http_status(), 200);
        assert_eq!(result.body().unwrap()["user"]["email"], "alice@example.com");
    }

    // -- createUsersWithListInput --

    #[test]
    fn empty_user_list_is_rejected() {
        let result = create_users_with_list(&[]);
        assert_eq!(result.http_status(), 400);
        assert_eq!(result.message(), Some("Users list is required"));
    }

    #[test]
    fn one_bad_element_fails_the_whole_call() {
        let users = vec![
            full_user(1, "alice"),
            json!({ "id": 2, "username": "bob" }),
        ];
        let result = create_users_with_list(&users);
        assert_eq!(result.http_status(), 400);
        assert_eq!(
            result.message(),
            Some("One or more users missing required fields (id, username, password)")
        );
    }

    #[test]
    fn non_object_element_fails_the_whole_call() {
        let users = vec![full_user(1, "alice"), json!("bob")];
        assert_eq!(create_users_with_list(&users).http_status(), 400);
    }

    #[test]
    fn valid_list_reports_the_count() {
        let users = vec![full_user(1, "alice"), full_user(2, "bob")];
        let result = create_users_with_list(&users);
        let body = result.body().unwrap();
        assert_eq!(body["message"], "2 users created successfully");
        assert_eq!(body["users"].as_array().unwrap().len(), 2);
    }

    // -- loginUser / logoutUser --

    #[test]
    fn login_requires_both_credentials() {
        assert_eq!(login_user(None, None).http_status(), 400);
        assert_eq!(login_user(Some("alice"), None).http_status(), 400);
        assert_eq!(login_user(None, Some("pw")).http_status(), 400);
        assert_eq!(login_user(Some("alice"), Some("")).http_status(), 400);
    }

    #[test]
    fn login_synthesizes_the_session_token() {
        let result = login_user(Some("alice"), Some("pw"));
        let body = result.body().unwrap();
        assert_eq!(body["token"], "session-alice-12345");
        assert_eq!(body["username"], "alice");
    }

    #[test]
    fn logout_always_succeeds() {
        let result = logout_user();
        assert_eq!(result.http_status(), 200);
        assert_eq!(result.body().unwrap()["status"], "logged_out");
    }

    // -- getUserByName --

    #[test]
    fn username_partitions() {
        assert_eq!(get_user_by_name("").http_status(), 400);
        assert_eq!(get_user_by_name("  ").http_status(), 400);
        assert_eq!(get_user_by_name("unknown").http_status(), 404);
        assert_eq!(get_user_by_name("alice").http_status(), 200);
    }

    #[test]
    fn synthetic_user_email_derives_from_username() {
        let result = get_user_by_name("alice");
        let user = &result.body().unwrap()["user"];
        assert_eq!(user["email"], "alice@example.com");
        assert_eq!(user["firstName"], "John");
        assert_eq!(user["userStatus"], 1);
    }

    #[test]
    fn unknown_user_message_quotes_the_username() {
        assert_eq!(
            get_user_by_name("unknown").message(),
            Some("User 'unknown' not found")
        );
    }

    // -- updateUser --

    #[test]
    fn update_user_checks_username_before_body() {
        assert_eq!(update_user("", &json!({})).http_status(), 400);
        assert_eq!(update_user("unknown", &json!({})).http_status(), 404);
    }

    #[test]
    fn update_user_rejects_an_empty_body() {
        let result = update_user("alice", &json!({}));
        assert_eq!(result.http_status(), 400);
        assert_eq!(
            result.message(),
            Some("Request body is required with at least one field")
        );
        assert_eq!(update_user("alice", &Value::Null).http_status(), 400);
    }

    #[test]
    fn update_user_echoes_the_payload() {
        let result = update_user("alice", &json!({ "email": "new@example.com" }));
        let body = result.body().unwrap();
        assert_eq!(body["username"], "alice");
        assert_eq!(body["updated_user"]["email"], "new@example.com");
    }

    // -- deleteUser --

    #[test]
    fn delete_user_partitions_match_fetch() {
        assert_eq!(delete_user("").http_status(), 400);
        assert_eq!(delete_user("unknown").http_status(), 404);
        let ok = delete_user("alice");
        assert_eq!(ok.http_status(), 200);
        assert_eq!(ok.body().unwrap()["status"], "deleted");
    }

    // -- Idempotence --

    #[test]
    fn repeated_calls_produce_identical_results() {
        assert_eq!(get_user_by_name("alice"), get_user_by_name("alice"));
        assert_eq!(
            login_user(Some("alice"), Some("pw")),
            login_user(Some("alice"), Some("pw"))
        );
    }
}
