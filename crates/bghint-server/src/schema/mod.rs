//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one API
//! surface. Types use serde derives for JSON serialization/deserialization.

pub mod best_move;
pub mod health;
