
/// Per-test build rules.
pub mod rule;

/// Whole rule file layout and determinism.
pub mod rule_file;
