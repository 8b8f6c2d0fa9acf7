//! Domain error taxonomy shared by every operation.

/// Classified failure raised while validating or synthesizing a response.
///
/// Operations never surface one of these to callers directly; each
/// variant converts into a structured
/// [`OperationResult`](crate::result::OperationResult) failure carrying
/// the inner message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Missing or malformed required input (client error, 400).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The identifier resolves to a simulated-absent resource (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// An uncaught fault during response synthesis (catch-all code).
    #[error("Internal error: {0}")]
    Internal(String),
}
