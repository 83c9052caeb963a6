//! Binary entrypoint for the bghint HTTP server.
//!
//! Reads configuration from environment variables:
//! - `BGHINT_ENGINE`: analysis engine executable (default: "gnubg")
//! - `BGHINT_TIMEOUT_SECS`: engine wall-clock timeout in seconds (default: "10")
//! - `BGHINT_PORT`: server listen port (default: "8000")

use std::time::Duration;

use bghint_engine::Engine;
use bghint_server::router::build_router;
use bghint_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let program = std::env::var("BGHINT_ENGINE")
        .unwrap_or_else(|_| bghint_engine::engine::DEFAULT_PROGRAM.to_string());
    let timeout_secs = std::env::var("BGHINT_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(bghint_engine::engine::DEFAULT_TIMEOUT.as_secs());
    let port = std::env::var("BGHINT_PORT")
        .unwrap_or_else(|_| "8000".to_string());

    let engine = Engine::gnubg()
        .with_program(program)
        .with_timeout(Duration::from_secs(timeout_secs));
    let state = AppState::new(engine);

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("bghint server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
