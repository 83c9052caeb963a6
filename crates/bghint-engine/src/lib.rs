//! Subprocess bridge to an external backgammon analysis engine.
//!
//! The engine is modeled strictly as a collaborator behind a narrow
//! interface: build a line-oriented command script, run the engine as a
//! subprocess with the script on stdin, and capture its output streams
//! under a wall-clock timeout. No engine output is parsed here.

pub mod engine;
pub mod error;
pub mod script;

pub use engine::{Engine, EngineOutput};
pub use error::EngineError;
pub use script::AnalysisScript;
