//! Named operation dispatch with uniform fault suppression.
//!
//! [`invoke`] is the single entry point for callers addressing
//! operations by id: it resolves the contract, extracts arguments from
//! a JSON object, and runs the operation inside a catch-all wrapper so
//! that no fault ever escapes as a panic. Callers always get an
//! [`OperationResult`] back.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::Value;

use crate::catalogue;
use crate::ops::{pet, store, user};
use crate::result::OperationResult;
use crate::types::{JsonMap, ResourceId};

/// Run the named operation against a JSON object of arguments.
///
/// Unknown operation ids resolve to a 404 failure; missing required
/// arguments to a 400 failure. A panic inside an operation is caught,
/// logged, and reported as a `"default"`-coded failure.
pub fn invoke(operation_id: &str, args: &Value) -> OperationResult {
    let Some(spec) = catalogue::find(operation_id) else {
        return OperationResult::not_found(format!("Unknown operation '{operation_id}'"));
    };

    suppress_faults(spec.id, || dispatch(spec.id, args))
}

/// Catch-all wrapper applied uniformly to every dispatched call.
fn suppress_faults(
    operation_id: &str,
    call: impl FnOnce() -> OperationResult,
) -> OperationResult {
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => result,
        Err(panic) => {
            let detail = panic_text(panic.as_ref());
            tracing::error!(operation = operation_id, detail = %detail, "operation panicked");
            OperationResult::unexpected(detail)
        }
    }
}

fn panic_text(panic: &(dyn Any + Send)) -> String {
    if let Some(text) = panic.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn dispatch(operation_id: &str, args: &Value) -> OperationResult {
    match operation_id {
        "updatePet" => with_object(args, "pet", pet::update_pet),
        "addPet" => with_object(args, "pet", pet::add_pet),
        "findPetsByStatus" => {
            pet::find_pets_by_status(str_arg(args, "status").unwrap_or("available"))
        }
        "findPetsByTags" => pet::find_pets_by_tags(args.get("tags").unwrap_or(&Value::Null)),
        "getPetById" => with_id(args, "petId", pet::get_pet_by_id),
        "updatePetWithForm" => with_id(args, "petId", |pet_id| {
            pet::update_pet_with_form(pet_id, str_arg(args, "name"), str_arg(args, "status"))
        }),
        "deletePet" => with_id(args, "petId", pet::delete_pet),
        // JSON has no binary kind, so the named surface carries the
        // image as a string and reports its UTF-8 byte length.
        "uploadPetImage" => with_id(args, "petId", |pet_id| {
            pet::upload_pet_image(
                pet_id,
                str_arg(args, "additionalMetadata"),
                str_arg(args, "image").map(str::as_bytes),
            )
        }),
        "getInventory" => store::get_inventory(),
        "placeOrder" => with_object(args, "order", store::place_order),
        "getOrderById" => with_id(args, "orderId", store::get_order_by_id),
        "deleteOrder" => with_id(args, "orderId", store::delete_order),
        "createUser" => with_object(args, "user", user::create_user),
        "createUsersWithListInput" => match args.get("users").and_then(Value::as_array) {
            Some(users) => user::create_users_with_list(users),
            None => OperationResult::validation("Users list is required"),
        },
        "loginUser" => user::login_user(str_arg(args, "username"), str_arg(args, "password")),
        "logoutUser" => user::logout_user(),
        "getUserByName" => with_str(args, "username", user::get_user_by_name),
        "updateUser" => with_str(args, "username", |username| {
            user::update_user(username, args.get("user").unwrap_or(&Value::Null))
        }),
        "deleteUser" => with_str(args, "username", user::delete_user),
        // Catalogue entries and dispatch arms are maintained together;
        // a contract without an arm is an internal fault.
        other => OperationResult::unexpected(format!("operation '{other}' has no handler")),
    }
}

// ---------------------------------------------------------------------------
// Argument extraction
// ---------------------------------------------------------------------------

fn int_arg(args: &Value, name: &str) -> Option<ResourceId> {
    args.get(name).and_then(Value::as_i64)
}

fn str_arg<'a>(args: &'a Value, name: &str) -> Option<&'a str> {
    args.get(name).and_then(Value::as_str)
}

fn missing_argument(name: &str) -> OperationResult {
    OperationResult::validation(format!("Missing required argument '{name}'"))
}

fn with_id(
    args: &Value,
    name: &str,
    op: impl FnOnce(ResourceId) -> OperationResult,
) -> OperationResult {
    match int_arg(args, name) {
        Some(id) => op(id),
        None => missing_argument(name),
    }
}

fn with_str(
    args: &Value,
    name: &str,
    op: impl FnOnce(&str) -> OperationResult,
) -> OperationResult {
    match str_arg(args, name) {
        Some(value) => op(value),
        None => missing_argument(name),
    }
}

fn with_object(
    args: &Value,
    name: &str,
    op: impl FnOnce(&JsonMap) -> OperationResult,
) -> OperationResult {
    match args.get(name).and_then(Value::as_object) {
        Some(object) => op(object),
        None => missing_argument(name),
    }
}
