//! The mock operation catalogue, one module per store resource.
//!
//! Every operation is a pure, synchronous function of its arguments and
//! the fixed tables in [`crate::simulation`]: required-field checks run
//! first, then domain-specific validation, then value-dependent
//! partition branching. Inputs are never mutated and repeated calls
//! with identical arguments always produce identical results.

pub mod pet;
pub mod store;
pub mod user;
