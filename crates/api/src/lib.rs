//! HTTP transport for the mock pet-store engine.
//!
//! Maps the Swagger pet-store paths onto the pure operations in
//! `petstore-core` and serializes their results. Carries no state of
//! its own; every handler is a thin extract-call-convert wrapper.

pub mod config;
pub mod response;
pub mod routes;
