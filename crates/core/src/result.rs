//! The uniform outcome type every operation returns.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::CoreError;

/// Status code carried by a failed operation.
///
/// Either a concrete HTTP-style status (400/404/500) or the catch-all
/// `"default"` code used for unexpected faults. Serializes as a number
/// or as the literal string `"default"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    Status(u16),
    Default,
}

impl FailureCode {
    /// The HTTP status a transport should emit for this code.
    ///
    /// `"default"` has no numeric value of its own and maps to 500.
    pub fn http_status(self) -> u16 {
        match self {
            FailureCode::Status(status) => status,
            FailureCode::Default => 500,
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCode::Status(status) => write!(f, "{status}"),
            FailureCode::Default => write!(f, "default"),
        }
    }
}

impl Serialize for FailureCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FailureCode::Status(status) => serializer.serialize_u16(*status),
            FailureCode::Default => serializer.serialize_str("default"),
        }
    }
}

/// Structured outcome of one operation call.
///
/// Every operation returns one of these; nothing is ever raised to the
/// caller. Success bodies are JSON objects (echoed input plus fixed
/// metadata); failures carry a status code and a human-readable message,
/// optionally with a diagnostic detail string.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Success {
        status: u16,
        body: Value,
    },
    Failure {
        status: FailureCode,
        message: String,
        detail: Option<String>,
    },
}

impl OperationResult {
    /// Successful result with the default 200 status.
    pub fn ok(body: Value) -> Self {
        OperationResult::Success { status: 200, body }
    }

    /// Client-input failure (400).
    pub fn validation(message: impl Into<String>) -> Self {
        OperationResult::Failure {
            status: FailureCode::Status(400),
            message: message.into(),
            detail: None,
        }
    }

    /// Simulated-absent resource failure (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        OperationResult::Failure {
            status: FailureCode::Status(404),
            message: message.into(),
            detail: None,
        }
    }

    /// Suppressed internal fault, reported with the catch-all code.
    pub fn unexpected(detail: impl Into<String>) -> Self {
        OperationResult::Failure {
            status: FailureCode::Default,
            message: "Unexpected error".to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    /// The HTTP status a transport should emit for this result.
    pub fn http_status(&self) -> u16 {
        match self {
            OperationResult::Success { status, .. } => *status,
            OperationResult::Failure { status, .. } => status.http_status(),
        }
    }

    /// Success body, if this result is a success.
    pub fn body(&self) -> Option<&Value> {
        match self {
            OperationResult::Success { body, .. } => Some(body),
            OperationResult::Failure { .. } => None,
        }
    }

    /// Failure message, if this result is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            OperationResult::Success { .. } => None,
            OperationResult::Failure { message, .. } => Some(message),
        }
    }
}

impl From<CoreError> for OperationResult {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => OperationResult::validation(message),
            CoreError::NotFound(message) => OperationResult::not_found(message),
            CoreError::Internal(detail) => OperationResult::unexpected(detail),
        }
    }
}
