//! Composite top-level targets.
//!
//! `test-all` depends on every `PASS` artifact, `test-clean` removes every
//! output directory, and `test-run` attempts all tests before reporting so the
//! aggregate never counts artifacts of tests that are still running.

use crate::catalog::Catalog;
use crate::common::constants::{TARGET_ALL, TARGET_CLEAN, TARGET_REPORT, TARGET_RUN};
use crate::emit::command::escape;
use crate::emit::makefile::Rule;

/// `test-all: <every artifact>`.
pub fn all_rule(catalog: &Catalog) -> Rule {
    Rule::new(TARGET_ALL).prerequisites(catalog.pass_artifacts())
}

/// `test-clean`: `rm -rf` over every output directory.
///
/// `rm -rf` ignores missing paths, so the rule can run any number of times.
pub fn clean_rule(catalog: &Catalog) -> Rule {
    let rule = Rule::new(TARGET_CLEAN);
    if catalog.is_empty() {
        return rule;
    }
    let dirs: Vec<String> = catalog
        .output_dirs()
        .into_iter()
        .map(|d| escape(d).into_owned())
        .collect();
    rule.line(format!("rm -rf {}", dirs.join(" ")))
}

/// `test-run`: every test with `-k` and failures ignored, then the report.
///
/// The two steps run sequentially in one recipe, which orders the report
/// strictly after every test rule has been attempted.
pub fn run_rule() -> Rule {
    Rule::new(TARGET_RUN)
        .line(format!("-@$(MAKE) --no-print-directory -k {TARGET_ALL}"))
        .line(format!("@$(MAKE) --no-print-directory {TARGET_REPORT}"))
}

/// `.PHONY` declaration for every composite target.
pub fn phony_rule() -> Rule {
    Rule::new(".PHONY").prerequisites([TARGET_REPORT, TARGET_ALL, TARGET_CLEAN, TARGET_RUN])
}
