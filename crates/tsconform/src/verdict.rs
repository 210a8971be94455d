//! The binary outcome of a check invocation.

use crate::error::{CheckResult, Rejection};
use serde::Serialize;

/// Outcome of one check invocation.
///
/// Exactly one verdict is produced per invocation; an invocation never
/// reports both, and never leaves the caller pending once the checker
/// process has terminated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "verdict")]
pub enum Verdict {
    /// The checker accepted the unit.
    Accepted,
    /// The checker rejected the unit, with captured diagnostics.
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected(_))
    }

    /// The diagnostic payload, if rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(rejection) => Some(rejection),
        }
    }

    /// Convert to a `Result` so positive scenarios can use `?` and
    /// negative scenarios can assert on the error.
    pub fn into_result(self) -> CheckResult {
        match self {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(rejection) => Err(rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectCause;

    #[test]
    fn test_accepted_into_result() {
        assert!(Verdict::Accepted.into_result().is_ok());
        assert!(Verdict::Accepted.is_accepted());
        assert!(Verdict::Accepted.rejection().is_none());
    }

    #[test]
    fn test_rejected_into_result() {
        let verdict = Verdict::Rejected(Rejection::bare(RejectCause::Signal));
        assert!(verdict.is_rejected());
        let err = verdict.into_result().unwrap_err();
        assert_eq!(err.cause, RejectCause::Signal);
    }
}
