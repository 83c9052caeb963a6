//! Subprocess invocation boundary for the external analysis engine.
//!
//! [`Engine`] holds the executable name, fixed argument list, and wall-clock
//! timeout. [`Engine::invoke`] runs one fresh subprocess per call, feeding
//! the script over stdin and capturing both output streams in full;
//! [`Engine::analyse`] layers the zero/non-zero exit policy on top.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::EngineError;
use crate::script::AnalysisScript;

/// Default engine executable.
pub const DEFAULT_PROGRAM: &str = "gnubg";

/// Fixed flag list selecting the engine's scripted external mode.
pub const DEFAULT_ARGS: &[&str] = &["--external"];

/// Default wall-clock limit for one invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Captured result of one engine invocation.
#[derive(Debug)]
pub struct EngineOutput {
    /// Exit status of the engine process.
    pub status: ExitStatus,
    /// Full standard output text (lossy UTF-8).
    pub stdout: String,
    /// Full standard error text (lossy UTF-8).
    pub stderr: String,
}

/// Invocation configuration for the external analysis engine.
///
/// Immutable once constructed; the server shares one instance behind an
/// `Arc`. Every invocation spawns its own unshared subprocess, so no
/// locking or pooling is involved.
#[derive(Debug, Clone)]
pub struct Engine {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Engine {
    /// Engine with an explicit program, argument list, and timeout.
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Engine {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// The production configuration: `gnubg --external`, 10 second timeout.
    pub fn gnubg() -> Self {
        Engine::new(
            DEFAULT_PROGRAM,
            DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            DEFAULT_TIMEOUT,
        )
    }

    /// Replaces the engine executable, keeping the argument list and timeout.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Replaces the wall-clock timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs one engine subprocess, feeding `script` over stdin and
    /// capturing stdout and stderr in full.
    ///
    /// Waits up to the configured timeout for the process to exit; on
    /// timeout the child is killed and [`EngineError::Timeout`] is
    /// returned. The exit status is reported as-is -- the zero/non-zero
    /// policy lives in [`analyse`](Engine::analyse).
    pub async fn invoke(&self, script: &AnalysisScript) -> Result<EngineOutput, EngineError> {
        tracing::debug!(program = %self.program, "spawning analysis engine");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(script.render().as_bytes()).await {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {
                    // engine exited before consuming the script; its exit
                    // status decides the outcome below
                }
                Err(err) => return Err(EngineError::Io(err)),
            }
            // stdin drops here, closing the pipe so the engine sees EOF
        }

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| EngineError::Timeout {
                limit: self.timeout,
            })??;

        Ok(EngineOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Analyses a position: builds the best-move script, invokes the
    /// engine, and applies the exit-code policy.
    ///
    /// Zero exit returns the captured stdout unparsed. Non-zero exit
    /// surfaces the captured stderr as the failure detail.
    pub async fn analyse(&self, position: &str) -> Result<String, EngineError> {
        let script = AnalysisScript::best_move(position);
        let output = self.invoke(&script).await?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            tracing::warn!(code = ?output.status.code(), "engine exited non-zero");
            Err(EngineError::Failed {
                code: output.status.code(),
                stderr: output.stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str, timeout: Duration) -> Engine {
        Engine::new(
            "sh",
            vec!["-c".to_string(), script.to_string()],
            timeout,
        )
    }

    #[tokio::test]
    async fn invoke_captures_stdout_and_exit_status() {
        let engine = sh("cat", Duration::from_secs(5));
        let script = AnalysisScript::best_move("XGID-test");
        let output = engine.invoke(&script).await.unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout, script.render());
        assert_eq!(output.stderr, "");
    }

    #[tokio::test]
    async fn analyse_returns_stdout_on_zero_exit() {
        let engine = sh("cat", Duration::from_secs(5));
        let output = engine.analyse("4HPwATDgc/ABMA").await.unwrap();
        assert_eq!(output, "set board 4HPwATDgc/ABMA\nshow moves\nquit\n");
    }

    #[tokio::test]
    async fn analyse_surfaces_stderr_on_nonzero_exit() {
        let engine = sh("printf 'bad position' >&2; exit 3", Duration::from_secs(5));
        let err = engine.analyse("whatever").await.unwrap_err();
        match err {
            EngineError::Failed { code, stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "bad position");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn analyse_times_out_when_engine_hangs() {
        let engine = sh("sleep 30", Duration::from_millis(100));
        let err = engine.analyse("pos").await.unwrap_err();
        assert!(matches!(err, EngineError::Timeout { .. }));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let engine = Engine::new("bghint-no-such-engine", vec![], Duration::from_secs(1));
        let err = engine.analyse("pos").await.unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
        assert!(err.to_string().contains("bghint-no-such-engine"));
    }

    #[tokio::test]
    async fn engine_that_ignores_stdin_still_completes() {
        let engine = sh("exec 0<&-; echo ready", Duration::from_secs(5));
        let output = engine.analyse("pos").await.unwrap();
        assert_eq!(output, "ready\n");
    }
}
