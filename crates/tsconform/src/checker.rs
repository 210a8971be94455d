//! The snippet-to-verdict pipeline.
//!
//! A [`Checker`] launches the external type-checker as a child process,
//! streams its output into per-invocation buffers, and classifies the
//! termination as a [`Verdict`]. Each invocation owns its own subprocess
//! and buffers; callers may run any number of checks concurrently.

use crate::binary;
use crate::config::{CheckerConfig, RejectionPolicy};
use crate::error::{RejectCause, Rejection};
use crate::unit::CheckableUnit;
use crate::verdict::Verdict;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::task::JoinHandle;

/// Type-checks source snippets and project configs via an external checker.
///
/// # Example
///
/// ```no_run
/// use tsconform::Checker;
///
/// async fn check() {
///     let checker = Checker::new();
///     let verdict = checker.check_source("console.log(\"Hello, world!\")").await;
///     assert!(verdict.is_accepted());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: CheckerConfig,
    policy: RejectionPolicy,
    /// Explicit checker executable; overrides discovery for both modes.
    binary: Option<PathBuf>,
    /// Bound on one invocation. `None` suspends indefinitely.
    timeout: Option<Duration>,
}

impl Checker {
    /// Create a checker with the default strict configuration and the
    /// snippet-mode rejection policy (exit status only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compiler options.
    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the rejection policy.
    pub fn with_policy(mut self, policy: RejectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a specific checker executable instead of discovering one.
    pub fn with_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary = Some(path.into());
        self
    }

    /// Bound each invocation; on expiry the child is killed and the
    /// verdict is Rejected with whatever output was captured so far.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Type-check a composed unit (snippet mode).
    pub async fn check_unit(&self, unit: &CheckableUnit) -> Verdict {
        self.check_source(unit.source()).await
    }

    /// Type-check raw source text (snippet mode).
    ///
    /// The source is passed to the checker as an inline project body, not
    /// written to disk. Arbitrary text is fine, including broken code.
    pub async fn check_source(&self, source: &str) -> Verdict {
        let program = self
            .binary
            .clone()
            .unwrap_or_else(|| binary::find_checker(binary::TS_NODE));

        tracing::debug!(
            "checking {}-byte snippet with {:?}",
            source.len(),
            program
        );

        let mut cmd = Command::new(&program);
        cmd.args(self.config.to_snippet_args(source));
        self.run(cmd).await
    }

    /// Type-check a pre-existing project config on disk (config-file mode).
    ///
    /// Note that the rejection policy is whatever this checker was built
    /// with; the [`check_project`] free function applies the historical
    /// stricter default.
    pub async fn check_project(&self, tsconfig: &Path) -> Verdict {
        let program = self
            .binary
            .clone()
            .unwrap_or_else(|| binary::find_checker(binary::TSC));

        tracing::debug!("checking project {:?} with {:?}", tsconfig, program);

        let mut cmd = Command::new(&program);
        cmd.arg("--p").arg(tsconfig);
        self.run(cmd).await
    }

    /// Spawn, capture, await, classify. Exactly one verdict per call.
    async fn run(&self, mut cmd: Command) -> Verdict {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!("checker spawn failed: {}", e);
                return Verdict::Rejected(Rejection::bare(RejectCause::SpawnFailed(
                    e.to_string(),
                )));
            }
        };

        let (stdout_buf, stdout_task) = spawn_reader(child.stdout.take());
        let (stderr_buf, stderr_task) = spawn_reader(child.stderr.take());

        let waited = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    let _ = child.kill().await;
                    // Grandchildren may inherit the pipe write ends, so the
                    // readers cannot be awaited to EOF here. Abort them and
                    // settle with whatever arrived before the deadline.
                    stdout_task.abort();
                    stderr_task.abort();
                    return Verdict::Rejected(Rejection {
                        cause: RejectCause::TimedOut(limit),
                        stdout: take_buffer(&stdout_buf),
                        stderr: take_buffer(&stderr_buf),
                    });
                }
            },
            None => child.wait().await,
        };

        // Readers finish once the child's pipes close; waiting here
        // guarantees the buffers are complete before the verdict settles.
        let _ = stdout_task.await;
        let _ = stderr_task.await;
        let stdout = take_buffer(&stdout_buf);
        let stderr = take_buffer(&stderr_buf);

        let status = match waited {
            Ok(status) => status,
            Err(e) => {
                return Verdict::Rejected(Rejection {
                    cause: RejectCause::Io(e.to_string()),
                    stdout,
                    stderr,
                });
            }
        };

        tracing::debug!("checker exited with {:?}", status.code());

        if !status.success() {
            let cause = match status.code() {
                Some(code) => RejectCause::ExitStatus(code),
                None => RejectCause::Signal,
            };
            return Verdict::Rejected(Rejection {
                cause,
                stdout,
                stderr,
            });
        }

        if self.policy == RejectionPolicy::ExitStatusOrErrorOutput && !stderr.is_empty() {
            return Verdict::Rejected(Rejection {
                cause: RejectCause::ErrorOutput,
                stdout,
                stderr,
            });
        }

        Verdict::Accepted
    }
}

/// Drain a child stream chunk-by-chunk, in arrival order, into a buffer
/// that stays readable even if the reader task is aborted mid-stream.
fn spawn_reader<R>(stream: Option<R>) -> (Arc<Mutex<Vec<u8>>>, JoinHandle<()>)
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    let buf = Arc::new(Mutex::new(Vec::new()));
    let task = {
        let buf = Arc::clone(&buf);
        tokio::spawn(async move {
            let Some(mut stream) = stream else {
                return;
            };
            let mut chunk = [0u8; 8192];
            loop {
                match stream.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.lock().extend_from_slice(&chunk[..n]),
                }
            }
        })
    };
    (buf, task)
}

fn take_buffer(buf: &Mutex<Vec<u8>>) -> String {
    String::from_utf8_lossy(&buf.lock()).into_owned()
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Type-check a snippet with the default checker.
///
/// # Example
///
/// ```no_run
/// async fn check() {
///     let verdict = tsconform::check_source("let x: string = 'foo';").await;
///     assert!(verdict.is_accepted());
/// }
/// ```
pub async fn check_source(source: &str) -> Verdict {
    Checker::new().check_source(source).await
}

/// Type-check a composed unit with the default checker.
pub async fn check_unit(unit: &CheckableUnit) -> Verdict {
    Checker::new().check_unit(unit).await
}

/// Type-check a project config with the config-file-mode default policy:
/// accepted only on exit code 0 with an empty error stream.
pub async fn check_project(tsconfig: &Path) -> Verdict {
    Checker::new()
        .with_policy(RejectionPolicy::ExitStatusOrErrorOutput)
        .check_project(tsconfig)
        .await
}
