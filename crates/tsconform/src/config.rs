//! Checker configuration: compiler options and the rejection policy.

use serde_json::{Value, json};

/// How a clean exit with error-stream output is classified.
///
/// The two entry modes of the harness historically used different
/// predicates; the policy is explicit so callers can align them instead of
/// inheriting the asymmetry silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RejectionPolicy {
    /// Only the process's own exit signal rejects. A clean exit is
    /// Accepted even if the error stream is non-empty. Snippet-mode default.
    #[default]
    ExitStatusOnly,

    /// A clean exit with any error-stream output is still Rejected.
    /// Config-file-mode default, for checkers that report problems on
    /// stderr without failing the run.
    ExitStatusOrErrorOutput,
}

/// Compiler options passed to the external checker.
///
/// Process-wide constant in practice: built once, never mutated between
/// invocations. The defaults match the strictest commonly portable setup:
/// es6 target, strict mode, strict null checks, no persistent cache.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Target ECMAScript version (default: "es6").
    pub target: String,

    /// Enable strict mode type checking.
    /// Default: true
    pub strict: bool,

    /// Enable strict null checks.
    /// Default: true
    pub strict_null_checks: bool,

    /// Disable the checker's on-disk compilation cache so invocations
    /// cannot interfere with each other.
    /// Default: true
    pub no_cache: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            target: "es6".to_string(),
            strict: true,
            strict_null_checks: true,
            no_cache: true,
        }
    }
}

impl CheckerConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target ECMAScript version.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set strict null checks.
    pub fn with_strict_null_checks(mut self, strict: bool) -> Self {
        self.strict_null_checks = strict;
        self
    }

    /// Set whether the checker's cache is disabled.
    pub fn with_no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    /// Convert to the checker's `--compilerOptions` JSON.
    pub fn to_compiler_options(&self) -> Value {
        json!({
            "target": self.target,
            "strict": self.strict,
            "strictNullChecks": self.strict_null_checks,
        })
    }

    /// Build the snippet-mode argument list: cache off, compiler options,
    /// type-check-only mode, and the unit source as an inline project body.
    pub fn to_snippet_args(&self, source: &str) -> Vec<String> {
        let mut args = Vec::new();
        if self.no_cache {
            args.push("--no-cache".to_string());
        }
        args.push("--compilerOptions".to_string());
        args.push(self.to_compiler_options().to_string());
        args.push("--type-check".to_string());
        args.push("-p".to_string());
        args.push(source.to_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CheckerConfig::default();
        assert_eq!(config.target, "es6");
        assert!(config.strict);
        assert!(config.strict_null_checks);
        assert!(config.no_cache);
    }

    #[test]
    fn test_config_builder() {
        let config = CheckerConfig::new()
            .with_target("es2020")
            .with_strict(false)
            .with_no_cache(false);

        assert_eq!(config.target, "es2020");
        assert!(!config.strict);
        assert!(config.strict_null_checks);
        assert!(!config.no_cache);
    }

    #[test]
    fn test_config_to_compiler_options() {
        let opts = CheckerConfig::default().to_compiler_options();

        assert_eq!(opts["target"], "es6");
        assert_eq!(opts["strict"], true);
        assert_eq!(opts["strictNullChecks"], true);
    }

    #[test]
    fn test_snippet_args_shape() {
        let args = CheckerConfig::default().to_snippet_args("console.log(1)");

        assert_eq!(args[0], "--no-cache");
        assert_eq!(args[1], "--compilerOptions");
        assert!(args[2].contains("\"strict\":true"));
        assert_eq!(args[3], "--type-check");
        assert_eq!(args[4], "-p");
        assert_eq!(args[5], "console.log(1)");
    }

    #[test]
    fn test_snippet_args_without_no_cache() {
        let config = CheckerConfig::new().with_no_cache(false);
        let args = config.to_snippet_args("x");
        assert_eq!(args[0], "--compilerOptions");
    }

    #[test]
    fn test_policy_default_is_exit_status_only() {
        assert_eq!(RejectionPolicy::default(), RejectionPolicy::ExitStatusOnly);
    }
}
