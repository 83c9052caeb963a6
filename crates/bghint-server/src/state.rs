//! Application state shared across handler tasks.
//!
//! [`AppState`] wraps the engine invocation config in an `Arc` for use with
//! axum handlers. The engine is immutable once constructed and every
//! request spawns its own subprocess, so no mutex or other coordination is
//! needed -- there is no shared mutable state anywhere in the server.

use std::sync::Arc;

use bghint_engine::Engine;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The external analysis engine boundary.
    pub engine: Arc<Engine>,
}

impl AppState {
    /// Creates state around the given engine configuration.
    pub fn new(engine: Engine) -> Self {
        AppState {
            engine: Arc::new(engine),
        }
    }
}
