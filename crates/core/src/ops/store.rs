//! Store (inventory and order) resource operations.

use serde_json::json;

use crate::result::OperationResult;
use crate::simulation;
use crate::types::{JsonMap, ResourceId};
use crate::validate;

/// Required body keys for `placeOrder`, in declared order.
pub const PLACE_ORDER_REQUIRED: &[&str] = &["id", "petId", "quantity"];

/// GET /store/inventory -- canned inventory counts by status.
pub fn get_inventory() -> OperationResult {
    OperationResult::ok(json!({
        "description": "Inventory counts retrieved successfully.",
        "inventory": simulation::inventory(),
        "content_type": simulation::JSON_CONTENT_TYPE,
    }))
}

/// POST /store/order -- place an order, echoing the payload.
pub fn place_order(order: &JsonMap) -> OperationResult {
    if let Err(err) = validate::require_fields(order, PLACE_ORDER_REQUIRED) {
        return err.into();
    }

    OperationResult::ok(json!({
        "message": "Order placed successfully",
        "order": order,
        "content_type": simulation::JSON_CONTENT_TYPE,
    }))
}

/// GET /store/order/{orderId} -- fetch a purchase order by id.
pub fn get_order_by_id(order_id: ResourceId) -> OperationResult {
    if let Err(err) = validate::require_positive_id(order_id) {
        return err.into();
    }
    if !simulation::order_on_record(order_id) {
        return OperationResult::not_found("Order not found");
    }

    OperationResult::ok(json!({
        "description": format!("Order data for ID {order_id}"),
        "order": simulation::synthetic_order(order_id),
        "content_types": simulation::CONTENT_TYPES,
    }))
}

/// DELETE /store/order/{orderId} -- delete a purchase order by id.
pub fn delete_order(order_id: ResourceId) -> OperationResult {
    if let Err(err) = validate::require_positive_id(order_id) {
        return err.into();
    }
    if !simulation::order_deletable(order_id) {
        return OperationResult::not_found(format!("Order {order_id} not found"));
    }

    OperationResult::ok(json!({
        "description": format!("Order {order_id} deleted successfully"),
        "status": "deleted",
    }))
}
