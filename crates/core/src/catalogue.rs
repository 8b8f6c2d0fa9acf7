//! Static contract catalogue for every operation.
//!
//! Each record describes one operation's public surface: id, HTTP
//! method and path, parameters, and the body keys the payload must
//! carry. The registry uses it for argument extraction; the transport
//! exposes it for introspection.

use serde::Serialize;

use crate::ops::{pet, store, user};

/// Where a parameter is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// Declared parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Integer,
    String,
    Object,
    Array,
    Binary,
}

/// One declared parameter of an operation.
#[derive(Debug, Clone, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub description: &'static str,
}

/// The full contract of one operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationSpec {
    /// Operation id as published by the store contract.
    pub id: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
    /// Keys the body object must carry, in declared order.
    pub required_fields: &'static [&'static str],
}

const fn param(
    name: &'static str,
    location: ParamLocation,
    kind: ParamKind,
    required: bool,
    description: &'static str,
) -> ParamSpec {
    ParamSpec {
        name,
        location,
        kind,
        required,
        default: None,
        description,
    }
}

/// Every operation the mock store exposes, in contract order.
pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        id: "updatePet",
        method: "PUT",
        path: "/pet",
        summary: "Update an existing pet by id, echoing the payload",
        params: &[param(
            "pet",
            ParamLocation::Body,
            ParamKind::Object,
            true,
            "Pet object; must include id, name and photoUrls",
        )],
        required_fields: pet::UPDATE_PET_REQUIRED,
    },
    OperationSpec {
        id: "addPet",
        method: "POST",
        path: "/pet",
        summary: "Add a new pet to the store",
        params: &[param(
            "pet",
            ParamLocation::Body,
            ParamKind::Object,
            true,
            "Pet object; must include name and photoUrls",
        )],
        required_fields: pet::ADD_PET_REQUIRED,
    },
    OperationSpec {
        id: "findPetsByStatus",
        method: "GET",
        path: "/pet/findByStatus",
        summary: "Find pets by status",
        params: &[ParamSpec {
            name: "status",
            location: ParamLocation::Query,
            kind: ParamKind::String,
            required: false,
            default: Some("available"),
            description: "One of: available, pending, sold",
        }],
        required_fields: &[],
    },
    OperationSpec {
        id: "findPetsByTags",
        method: "GET",
        path: "/pet/findByTags",
        summary: "Find pets by tags",
        params: &[param(
            "tags",
            ParamLocation::Query,
            ParamKind::String,
            true,
            "Comma-separated tag list or array of tags",
        )],
        required_fields: &[],
    },
    OperationSpec {
        id: "getPetById",
        method: "GET",
        path: "/pet/{petId}",
        summary: "Return a single pet by id",
        params: &[param(
            "petId",
            ParamLocation::Path,
            ParamKind::Integer,
            true,
            "Id of the pet to return",
        )],
        required_fields: &[],
    },
    OperationSpec {
        id: "updatePetWithForm",
        method: "POST",
        path: "/pet/{petId}",
        summary: "Update a pet's name and/or status from form fields",
        params: &[
            param(
                "petId",
                ParamLocation::Path,
                ParamKind::Integer,
                true,
                "Id of the pet to update",
            ),
            param(
                "name",
                ParamLocation::Query,
                ParamKind::String,
                false,
                "New name for the pet",
            ),
            param(
                "status",
                ParamLocation::Query,
                ParamKind::String,
                false,
                "New status for the pet",
            ),
        ],
        required_fields: &[],
    },
    OperationSpec {
        id: "deletePet",
        method: "DELETE",
        path: "/pet/{petId}",
        summary: "Delete a pet by id",
        params: &[param(
            "petId",
            ParamLocation::Path,
            ParamKind::Integer,
            true,
            "Id of the pet to delete",
        )],
        required_fields: &[],
    },
    OperationSpec {
        id: "uploadPetImage",
        method: "POST",
        path: "/pet/{petId}/uploadImage",
        summary: "Upload an image for a pet",
        params: &[
            param(
                "petId",
                ParamLocation::Path,
                ParamKind::Integer,
                true,
                "Id of the pet being updated",
            ),
            param(
                "additionalMetadata",
                ParamLocation::Query,
                ParamKind::String,
                false,
                "Additional metadata about the image",
            ),
            param(
                "image",
                ParamLocation::Body,
                ParamKind::Binary,
                false,
                "Binary image payload",
            ),
        ],
        required_fields: &[],
    },
    OperationSpec {
        id: "getInventory",
        method: "GET",
        path: "/store/inventory",
        summary: "Return pet inventory counts by status",
        params: &[],
        required_fields: &[],
    },
    OperationSpec {
        id: "placeOrder",
        method: "POST",
        path: "/store/order",
        summary: "Place an order for a pet",
        params: &[param(
            "order",
            ParamLocation::Body,
            ParamKind::Object,
            true,
            "Order object; must include id, petId and quantity",
        )],
        required_fields: store::PLACE_ORDER_REQUIRED,
    },
    OperationSpec {
        id: "getOrderById",
        method: "GET",
        path: "/store/order/{orderId}",
        summary: "Find a purchase order by id",
        params: &[param(
            "orderId",
            ParamLocation::Path,
            ParamKind::Integer,
            true,
            "Id of the order to fetch",
        )],
        required_fields: &[],
    },
    OperationSpec {
        id: "deleteOrder",
        method: "DELETE",
        path: "/store/order/{orderId}",
        summary: "Delete a purchase order by id",
        params: &[param(
            "orderId",
            ParamLocation::Path,
            ParamKind::Integer,
            true,
            "Id of the order to delete",
        )],
        required_fields: &[],
    },
    OperationSpec {
        id: "createUser",
        method: "POST",
        path: "/user",
        summary: "Create a user",
        params: &[param(
            "user",
            ParamLocation::Body,
            ParamKind::Object,
            true,
            "User object; must include id, username and password",
        )],
        required_fields: user::USER_REQUIRED,
    },
    OperationSpec {
        id: "createUsersWithListInput",
        method: "POST",
        path: "/user/createWithList",
        summary: "Create multiple users from a list",
        params: &[param(
            "users",
            ParamLocation::Body,
            ParamKind::Array,
            true,
            "Non-empty list of user objects",
        )],
        required_fields: &[],
    },
    OperationSpec {
        id: "loginUser",
        method: "GET",
        path: "/user/login",
        summary: "Log a user into the system",
        params: &[
            param(
                "username",
                ParamLocation::Query,
                ParamKind::String,
                true,
                "Username for login",
            ),
            param(
                "password",
                ParamLocation::Query,
                ParamKind::String,
                true,
                "Password for login, in clear text",
            ),
        ],
        required_fields: &[],
    },
    OperationSpec {
        id: "logoutUser",
        method: "GET",
        path: "/user/logout",
        summary: "Log the current user out of the system",
        params: &[],
        required_fields: &[],
    },
    OperationSpec {
        id: "getUserByName",
        method: "GET",
        path: "/user/{username}",
        summary: "Get user details by username",
        params: &[param(
            "username",
            ParamLocation::Path,
            ParamKind::String,
            true,
            "Name of the user to fetch",
        )],
        required_fields: &[],
    },
    OperationSpec {
        id: "updateUser",
        method: "PUT",
        path: "/user/{username}",
        summary: "Update a user resource",
        params: &[
            param(
                "username",
                ParamLocation::Path,
                ParamKind::String,
                true,
                "Name of the user to update",
            ),
            param(
                "user",
                ParamLocation::Body,
                ParamKind::Object,
                true,
                "User payload with at least one field",
            ),
        ],
        required_fields: &[],
    },
    OperationSpec {
        id: "deleteUser",
        method: "DELETE",
        path: "/user/{username}",
        summary: "Delete a user resource",
        params: &[param(
            "username",
            ParamLocation::Path,
            ParamKind::String,
            true,
            "Name of the user to delete",
        )],
        required_fields: &[],
    },
];

/// Look up an operation contract by id.
pub fn find(operation_id: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.iter().find(|op| op.id == operation_id)
}
