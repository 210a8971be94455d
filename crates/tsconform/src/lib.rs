//! Typings conformance harness.
//!
//! Verifies that a library's TypeScript declarations accept valid usage and
//! reject invalid usage by feeding source snippets to an external
//! type-checker and classifying the result.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Checker                           │
//! │   CheckableUnit ──► ts-node --type-check -p <source>     │
//! │   tsconfig path ──► tsc --p <path>                       │
//! │                       │                                  │
//! │        stdout/stderr capture + exit status               │
//! │                       ▼                                  │
//! │          Verdict::Accepted / Verdict::Rejected           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tsconform::{CheckableUnit, Checker, Prelude};
//!
//! async fn check_typings() {
//!     let prelude = Prelude::new("import { create, DatabaseCreator } from 'mydb';");
//!     let unit = prelude.unit(r#"
//!         const creator: DatabaseCreator = {
//!             name: 'mydb',
//!             adapter: 'memory',
//!         };
//!     "#);
//!
//!     let verdict = Checker::new().check_unit(&unit).await;
//!     assert!(verdict.is_accepted());
//! }
//! ```

pub mod binary;
mod checker;
mod config;
mod error;
mod unit;
mod verdict;

pub use checker::{Checker, check_project, check_source, check_unit};
pub use config::{CheckerConfig, RejectionPolicy};
pub use error::{CheckResult, RejectCause, Rejection};
pub use unit::{CheckableUnit, Prelude};
pub use verdict::Verdict;
