//! Checkable units: composing a full program text from fragments.
//!
//! Units are plain text, assembled from a reusable prelude (imports, setup
//! calls) and a scenario-specific body. The fragment boundary is normalized
//! to exactly one blank line so concatenation can never glue a prelude's
//! last token onto the body's first.

use std::fmt;

/// Reusable import/setup fragment prefixed to scenario bodies.
#[derive(Debug, Clone)]
pub struct Prelude {
    text: String,
}

impl Prelude {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Compose a full unit from this prelude and a scenario body.
    pub fn unit(&self, body: impl AsRef<str>) -> CheckableUnit {
        CheckableUnit::new(self, body.as_ref())
    }
}

/// The full source text submitted for type verification.
///
/// Immutable once built; owned solely by the calling test case. The text
/// may be arbitrarily broken code, the checker decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckableUnit {
    source: String,
}

impl CheckableUnit {
    /// Build a unit from a bare body with no prelude.
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            source: body.into(),
        }
    }

    /// Build a unit from a prelude and a body, separated by one blank line.
    pub fn new(prelude: &Prelude, body: &str) -> Self {
        let head = prelude.text.trim_end_matches(['\n', '\r', ' ', '\t']);
        let tail = body.trim_start_matches(['\n', '\r']);
        Self {
            source: format!("{head}\n\n{tail}"),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for CheckableUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
