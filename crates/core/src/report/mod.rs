//! Result aggregation.
//!
//! This module reads the catalog and reports on `PASS` artifacts. It provides:
//! 1. **Count variable:** `TESTS_COUNT=<N>` for the generated file.
//! 2. **Report rule:** `test-report`, which checks every artifact when it runs, never at generation time.
//! 3. **In-process evaluation:** [`Aggregator::evaluate`] against any [`ArtifactProbe`].

/// Artifact existence checks.
pub mod probe;
/// Pass-count summary.
pub mod summary;

pub use probe::{ArtifactProbe, FsProbe};
pub use summary::{PassSummary, TestOutcome};

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::common::constants::{TARGET_REPORT, TESTS_COUNT_VAR};
use crate::emit::command::escape;
use crate::emit::makefile::{self, Rule};

/// Emits and evaluates pass/fail aggregates over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Aggregator<'a> {
    /// Aggregator over `catalog`.
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// `TESTS_COUNT=<N>` assignment.
    pub fn count_variable(&self) -> String {
        makefile::assignment(TESTS_COUNT_VAR, &self.catalog.len().to_string())
    }

    /// The `test-report` rule.
    ///
    /// One line per test prints whether its artifact exists, then the last line
    /// counts the existing artifacts and prints `<passed>/$(TESTS_COUNT) passed`.
    /// The count uses the same regular-file test as the per-test lines, so a
    /// missing artifact or a directory named `PASS` never counts as a pass.
    pub fn report_rule(&self) -> Rule {
        let artifacts: Vec<String> = self
            .catalog
            .pass_artifacts()
            .iter()
            .map(|a| escape(a).into_owned())
            .collect();

        let mut rule = Rule::new(TARGET_REPORT);
        for artifact in &artifacts {
            rule = rule.line(format!(
                "@[ -f {artifact} ] && echo {artifact} passed || echo {artifact} \"didn't pass\""
            ));
        }

        let count = if artifacts.is_empty() {
            "PASSED=0".to_string()
        } else {
            format!(
                "PASSED=$$(find {} -maxdepth 0 -type f 2>/dev/null | wc -l | tr -d ' ')",
                artifacts.join(" ")
            )
        };
        rule.line(format!(
            "@{count} && echo $$PASSED/$({TESTS_COUNT_VAR}) passed"
        ))
    }

    /// Checks every artifact now, through `probe`.
    pub fn evaluate<P: ArtifactProbe + ?Sized>(&self, probe: &P) -> PassSummary {
        let outcomes = self
            .catalog
            .iter()
            .map(|test| {
                let artifact = test.pass_artifact();
                let passed = probe.exists(&artifact);
                if !passed {
                    debug!(test = test.name(), %artifact, "artifact missing");
                }
                TestOutcome {
                    name: test.name().to_string(),
                    artifact,
                    passed,
                }
            })
            .collect();

        let summary = PassSummary { outcomes };
        info!(
            passed = summary.passed(),
            total = summary.total(),
            "evaluated pass artifacts"
        );
        summary
    }
}
