//! HTTP handler modules for the bghint API.
//!
//! Handlers stay thin: parse the request, delegate to the engine boundary,
//! and return JSON responses. No subprocess logic lives here.

pub mod best_move;
pub mod health;
