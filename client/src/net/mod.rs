//! Networking modules for the position backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the two REST calls and `types` defines the shared wire
//! schema, which the server crate reuses for its request/response bodies.

pub mod api;
pub mod types;
