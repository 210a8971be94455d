//! Rejection payloads produced by failed check invocations.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Why a check invocation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "detail")]
pub enum RejectCause {
    /// The checker process could not be started.
    #[error("spawn failed: {0}")]
    SpawnFailed(String),

    /// The checker ran and exited with a non-zero status.
    #[error("checker exited with status {0}")]
    ExitStatus(i32),

    /// The checker was terminated by a signal (no exit code).
    #[error("checker terminated by signal")]
    Signal,

    /// The checker exited cleanly but wrote to its error stream,
    /// and the active policy treats that as failure.
    #[error("checker produced error output")]
    ErrorOutput,

    /// The invocation exceeded its configured time limit.
    #[error("checker timed out after {0:?}")]
    TimedOut(Duration),

    /// Waiting on the checker process failed.
    #[error("io error: {0}")]
    Io(String),
}

/// Diagnostic payload for a rejected check.
///
/// Carries the termination cause and both captured output streams. The
/// `Display` form embeds all three so a test failure message is enough to
/// debug the snippet without re-running the checker.
#[derive(Debug, Clone, Error, Serialize)]
#[error("type check failed\n# Error: {cause}\n# Output: {stdout}\n# ErrOut: {stderr}")]
pub struct Rejection {
    /// What terminated the invocation.
    pub cause: RejectCause,
    /// Captured standard output, in arrival order.
    pub stdout: String,
    /// Captured error output, in arrival order.
    pub stderr: String,
}

impl Rejection {
    /// Rejection with a cause but no captured output (e.g. spawn failure).
    pub fn bare(cause: RejectCause) -> Self {
        Self {
            cause,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Result alias for check invocations: `Ok(())` is Accepted.
pub type CheckResult = Result<(), Rejection>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display_embeds_streams() {
        let rejection = Rejection {
            cause: RejectCause::ExitStatus(1),
            stdout: "compiling".to_string(),
            stderr: "TS2322: Type 'number' is not assignable".to_string(),
        };

        let msg = rejection.to_string();
        assert!(msg.contains("status 1"));
        assert!(msg.contains("# Output: compiling"));
        assert!(msg.contains("TS2322"));
    }

    #[test]
    fn test_bare_rejection_has_empty_streams() {
        let rejection = Rejection::bare(RejectCause::SpawnFailed("not found".to_string()));
        assert!(rejection.stdout.is_empty());
        assert!(rejection.stderr.is_empty());
    }

    #[test]
    fn test_cause_messages() {
        assert_eq!(
            RejectCause::TimedOut(Duration::from_millis(500)).to_string(),
            "checker timed out after 500ms"
        );
        assert_eq!(
            RejectCause::ErrorOutput.to_string(),
            "checker produced error output"
        );
    }
}
