//! RISC-V simulator test-suite compiler.
//!
//! This crate turns a declarative catalog of simulator test cases into Makefile rules. It provides:
//! 1. **Catalog:** Test descriptors built from static group tables, defaults, and per-case overrides.
//! 2. **Emission:** One build rule per descriptor invoking the simulator with derived arguments.
//! 3. **Aggregation:** A report rule and an in-process pass counter over the `PASS` artifacts.
//! 4. **Targets:** Composite `test-all`, `test-clean`, and `test-run` rules.
//! 5. **Configuration:** Serde-backed defaults for paths, symbols, and group selection.

/// Common types and constants (error taxonomy, artifact names).
pub mod common;
/// Generator configuration (defaults, per-category options, group selection).
pub mod config;
/// Test descriptors, group tables, and the catalog builder.
pub mod catalog;
/// Simulator command construction, rule emission, and rule file assembly.
pub mod emit;
/// Result aggregation (report rule and in-process pass counting).
pub mod report;
/// Composite top-level targets.
pub mod targets;

/// Immutable ordered collection of test descriptors.
pub use crate::catalog::Catalog;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Error type returned by every fallible generator operation.
pub use crate::common::{GenError, Result};
