//! Pass-count summary.

use std::fmt;

use serde::Serialize;

/// Outcome of one test as seen through its artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    /// Test name.
    pub name: String,
    /// `PASS` artifact path.
    pub artifact: String,
    /// Whether the artifact exists.
    pub passed: bool,
}

/// Aggregate result over a whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    /// Per-test outcomes in catalog order.
    pub outcomes: Vec<TestOutcome>,
}

impl PassSummary {
    /// Number of tests whose artifact exists.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of tests in the catalog.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns true if every test passed. An empty catalog counts as passing.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Tests whose artifact is missing.
    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

impl fmt::Display for PassSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} passed", self.passed(), self.total())
    }
}
