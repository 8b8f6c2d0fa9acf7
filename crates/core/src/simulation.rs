//! Simulated backend state: canned tables and partition rules.
//!
//! The thresholds and magic values here are simulation artifacts kept
//! byte-compatible with the upstream mock, not business rules. Callers
//! go through the named predicates so a real backend could replace this
//! module without touching any validation logic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::types::ResourceId;

// ---------------------------------------------------------------------------
// Partition rules
// ---------------------------------------------------------------------------

/// The one pet id the simulated store treats as absent.
pub const MISSING_PET_ID: ResourceId = 9999;

/// Order ids in this inclusive range resolve to "not found" on fetch.
pub const ORDER_GAP_START: ResourceId = 6;
pub const ORDER_GAP_END: ResourceId = 10;

/// Orders above this id are treated as absent on deletion.
pub const MAX_DELETABLE_ORDER_ID: ResourceId = 1000;

/// The one username the simulated store treats as absent.
pub const UNKNOWN_USERNAME: &str = "unknown";

/// Whether a (positive) pet id resolves to a stored pet.
pub fn pet_on_record(pet_id: ResourceId) -> bool {
    pet_id != MISSING_PET_ID
}

/// Whether a (positive) order id resolves to a stored order on fetch.
pub fn order_on_record(order_id: ResourceId) -> bool {
    !(ORDER_GAP_START..=ORDER_GAP_END).contains(&order_id)
}

/// Whether a (positive) order id resolves to a stored order on deletion.
pub fn order_deletable(order_id: ResourceId) -> bool {
    order_id <= MAX_DELETABLE_ORDER_ID
}

/// Whether a (non-blank) username resolves to a stored user.
pub fn user_on_record(username: &str) -> bool {
    username != UNKNOWN_USERNAME
}

// ---------------------------------------------------------------------------
// Status catalogue
// ---------------------------------------------------------------------------

/// Pet availability status as defined by the store contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    pub fn as_str(self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl FromStr for PetStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(PetStatus::Available),
            "pending" => Ok(PetStatus::Pending),
            "sold" => Ok(PetStatus::Sold),
            _ => Err(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Canned tables
// ---------------------------------------------------------------------------

/// Media types reported on read-style responses.
pub const CONTENT_TYPES: [&str; 2] = ["application/json", "application/xml"];

/// Media type reported on write-style responses.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Session token synthesis. The token has no cryptographic meaning and
/// must never be treated as a real credential.
pub const SESSION_TOKEN_PREFIX: &str = "session-";
pub const SESSION_TOKEN_SUFFIX: &str = "-12345";

pub fn session_token(username: &str) -> String {
    format!("{SESSION_TOKEN_PREFIX}{username}{SESSION_TOKEN_SUFFIX}")
}

/// The fixed pet table searched by status.
pub fn status_pets() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "Doggo", "status": "available" }),
        json!({ "id": 2, "name": "Kitty", "status": "pending" }),
        json!({ "id": 3, "name": "Birdy", "status": "sold" }),
    ]
}

/// The fixed pet pair returned by tag search.
///
/// Both pets echo only the first normalized tag. This mirrors the
/// upstream stub exactly; it is not real tag filtering.
pub fn tag_pets(first_tag: &str) -> Vec<Value> {
    vec![
        json!({ "id": 101, "name": "doggie", "tags": [first_tag] }),
        json!({ "id": 202, "name": "mittens", "tags": [first_tag] }),
    ]
}

/// Inventory counts keyed by pet status.
pub fn inventory() -> Value {
    json!({ "available": 12, "pending": 5, "sold": 7 })
}

/// Synthetic order returned for any on-record order id.
pub fn synthetic_order(order_id: ResourceId) -> Value {
    json!({
        "id": order_id,
        "petId": 123,
        "quantity": 2,
        "status": "approved",
        "complete": false,
    })
}

/// Synthetic user returned for any on-record username.
pub fn synthetic_user(username: &str) -> Value {
    json!({
        "id": 1,
        "username": username,
        "firstName": "John",
        "lastName": "Doe",
        "email": format!("{username}@example.com"),
        "phone": "123-456-7890",
        "userStatus": 1,
    })
}
