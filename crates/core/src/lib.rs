//! Mock pet-store operation engine.
//!
//! A fixed catalogue of named operations over pet, order and user
//! resources. Each operation validates its input against a declared
//! contract and synthesizes a deterministic response instead of
//! touching real storage; value-dependent partition rules simulate
//! backend states (found, not-found, invalid). Everything is pure and
//! synchronous; transports live elsewhere.

pub mod catalogue;
pub mod error;
pub mod ops;
pub mod registry;
pub mod result;
pub mod simulation;
pub mod types;
pub mod validate;

pub use error::CoreError;
pub use result::{FailureCode, OperationResult};
