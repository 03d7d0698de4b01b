//! Names shared between the rule emitter, the aggregator, and the top-level targets.

/// File the simulator creates in a test's output directory when the test passes.
pub const PASS_ARTIFACT: &str = "PASS";

/// Make variable holding the total number of tests.
pub const TESTS_COUNT_VAR: &str = "TESTS_COUNT";

/// Per-test report target.
pub const TARGET_REPORT: &str = "test-report";

/// Target depending on every test artifact.
pub const TARGET_ALL: &str = "test-all";

/// Target removing every output directory.
pub const TARGET_CLEAN: &str = "test-clean";

/// Target running every test, then the report.
pub const TARGET_RUN: &str = "test-run";

/// Header written at the top of every generated rule file.
pub const GENERATED_HEADER: &str = "# Generated by testgen. Do not edit; regenerate instead.";
