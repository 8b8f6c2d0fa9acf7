//! Shared field-presence and scalar validation helpers.
//!
//! These run before any value-dependent branching: a missing required
//! field is always reported as a client error, regardless of what the
//! rest of the input looks like.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::{JsonMap, ResourceId};

/// Required keys absent from `payload`, in declared order.
pub fn missing_fields<'a>(payload: &JsonMap, required: &'a [&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|field| !payload.contains_key(*field))
        .collect()
}

/// Check that every required key is present on `payload`.
///
/// The error message lists exactly the omitted keys, comma-joined in
/// their declared order.
pub fn require_fields(payload: &JsonMap, required: &[&str]) -> Result<(), CoreError> {
    let missing = missing_fields(payload, required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Check that a path identifier is a positive integer.
pub fn require_positive_id(id: ResourceId) -> Result<(), CoreError> {
    if id > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid ID supplied".to_string()))
    }
}

/// Check that a scalar argument is neither empty nor whitespace-only.
pub fn require_non_blank(value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

/// Normalize a tag argument into a list of trimmed, non-empty tokens.
///
/// Accepts either a single comma-separated string or an array. Array
/// elements are taken as-is (no comma splitting); non-string elements
/// are rendered with their JSON display form.
pub fn normalize_tags(tags: &Value) -> Vec<String> {
    match tags {
        Value::String(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string().trim().to_string(),
            })
            .filter(|token| !token.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
