/// All resource identifiers (pet, order, user) are signed 64-bit integers.
pub type ResourceId = i64;

/// JSON object payload as supplied by a caller and echoed back verbatim.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
