//! Typed failure taxonomy for engine invocation.

use std::io;
use std::time::Duration;

/// Failures raised by one engine invocation.
///
/// The HTTP layer collapses all variants into a single 500 response; the
/// variants exist so logs and callers can tell launch failures, stream I/O
/// failures, timeouts, and engine-reported failures apart.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine executable could not be launched.
    #[error("failed to launch engine '{program}': {source}")]
    Spawn {
        /// Executable name or path that failed to launch.
        program: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Reading or writing one of the engine's standard streams failed.
    #[error("engine I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The engine did not exit within the wall-clock limit.
    #[error("engine timed out after {limit:?}")]
    Timeout {
        /// The configured limit that elapsed.
        limit: Duration,
    },

    /// The engine exited non-zero. Displays as the engine's standard error
    /// text, which becomes the failure detail relayed to clients.
    #[error("{stderr}")]
    Failed {
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Captured standard error text.
        stderr: String,
    },
}
