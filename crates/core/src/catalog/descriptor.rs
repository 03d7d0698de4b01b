//! Test descriptors and the options that parameterize them.
//!
//! A [`TestDescriptor`] is created once by the catalog builder and never
//! mutated afterwards; its output directory is derived from the category and
//! the test name and is therefore fixed at construction.

use serde::{Deserialize, Serialize};

use crate::common::constants::PASS_ARTIFACT;
use crate::common::path;
use crate::config::OutputConfig;

/// Built-in default values for each category.
mod defaults {
    /// Image template for ISA tests; riscv-tests binaries are named after the test.
    pub const ISA_IMAGE: &str = "riscv-tests/{name}";

    /// Image template for workloads built with the regular baremetal layout.
    pub const WORKLOAD_IMAGE: &str = "baremetal/{name}/build/{arch}/{name}.elf";

    /// riscv-tests start polling after the first test case has set up state.
    pub const ISA_START: &str = "test_2";

    /// Workloads are observed from their ELF entry point.
    pub const WORKLOAD_START: &str = "_start";

    /// Symbol whose execution marks a passing run.
    pub const PASS: &str = "pass";

    /// Symbol whose execution marks a failing run.
    pub const FAIL: &str = "fail";

    /// Step budget for ISA tests before the run is declared hung.
    pub const ISA_TIMEOUT: u64 = 10_000;
}

/// Test namespace. Each category owns its own output directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// ISA compliance tests (riscv-tests).
    Isa,
    /// Firmware and software workloads (baremetal programs, RTOS demos, benchmarks).
    Workload,
}

impl Category {
    /// Built-in option defaults for the category, before any configuration layer.
    pub fn builtin_options(self) -> TestOptions {
        match self {
            Self::Isa => TestOptions {
                image: defaults::ISA_IMAGE.to_string(),
                start_symbol: defaults::ISA_START.to_string(),
                pass_symbol: defaults::PASS.to_string(),
                fail_symbol: defaults::FAIL.to_string(),
                timeout: Some(defaults::ISA_TIMEOUT),
            },
            Self::Workload => TestOptions {
                image: defaults::WORKLOAD_IMAGE.to_string(),
                start_symbol: defaults::WORKLOAD_START.to_string(),
                pass_symbol: defaults::PASS.to_string(),
                fail_symbol: defaults::FAIL.to_string(),
                timeout: None,
            },
        }
    }

    /// Output directory for a test of this category.
    ///
    /// Pure function of the layout, the category, and the name.
    pub fn output_dir(self, layout: &OutputConfig, name: &str) -> String {
        path::join(&[&layout.root, layout.category_dir(self), name])
    }

    /// Lowercase name used in listings and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Isa => "isa",
            Self::Workload => "workload",
        }
    }
}

/// Every option a test recognizes, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOptions {
    /// Image path template relative to the asset root.
    pub image: String,
    /// Symbol at which the simulator starts observing.
    pub start_symbol: String,
    /// Symbol signalling success.
    pub pass_symbol: String,
    /// Symbol signalling failure.
    pub fail_symbol: String,
    /// Step budget, or `None` to rely on the simulator's own default.
    pub timeout: Option<u64>,
}

impl TestOptions {
    /// Applies a partial override; fields the override leaves unset keep their current value.
    #[must_use]
    pub fn merge(&self, overrides: &TestOverrides) -> Self {
        Self {
            image: overrides.image.clone().unwrap_or_else(|| self.image.clone()),
            start_symbol: overrides
                .start_symbol
                .clone()
                .unwrap_or_else(|| self.start_symbol.clone()),
            pass_symbol: overrides
                .pass_symbol
                .clone()
                .unwrap_or_else(|| self.pass_symbol.clone()),
            fail_symbol: overrides
                .fail_symbol
                .clone()
                .unwrap_or_else(|| self.fail_symbol.clone()),
            timeout: overrides.timeout.or(self.timeout),
        }
    }
}

/// A partial set of options. Unset fields defer to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestOverrides {
    /// Alternate image path template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Alternate start symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_symbol: Option<String>,
    /// Alternate pass symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_symbol: Option<String>,
    /// Alternate fail symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_symbol: Option<String>,
    /// Alternate step budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl TestOverrides {
    /// Overrides the image template.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Overrides the start symbol.
    #[must_use]
    pub fn start_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.start_symbol = Some(symbol.into());
        self
    }

    /// Overrides the pass symbol.
    #[must_use]
    pub fn pass_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.pass_symbol = Some(symbol.into());
        self
    }

    /// Overrides the fail symbol.
    #[must_use]
    pub fn fail_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.fail_symbol = Some(symbol.into());
        self
    }

    /// Overrides the step budget.
    #[must_use]
    pub fn timeout(mut self, steps: u64) -> Self {
        self.timeout = Some(steps);
        self
    }
}

/// One test case, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestDescriptor {
    name: String,
    group: String,
    category: Category,
    binary_path: String,
    start_symbol: String,
    pass_symbol: String,
    fail_symbol: String,
    timeout: Option<u64>,
    output_dir: String,
}

impl TestDescriptor {
    /// Assembles a descriptor from resolved options.
    ///
    /// `binary_path` must already have its template placeholders substituted.
    pub(crate) fn new(
        name: String,
        group: String,
        category: Category,
        binary_path: String,
        options: TestOptions,
        layout: &OutputConfig,
    ) -> Self {
        let output_dir = category.output_dir(layout, &name);
        Self {
            name,
            group,
            category,
            binary_path,
            start_symbol: options.start_symbol,
            pass_symbol: options.pass_symbol,
            fail_symbol: options.fail_symbol,
            timeout: options.timeout,
            output_dir,
        }
    }

    /// Unique test name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the group this test came from.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Output namespace.
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Image path relative to the asset root.
    pub fn binary_path(&self) -> &str {
        &self.binary_path
    }

    /// Symbol at which observation starts.
    pub fn start_symbol(&self) -> &str {
        &self.start_symbol
    }

    /// Symbol signalling success.
    pub fn pass_symbol(&self) -> &str {
        &self.pass_symbol
    }

    /// Symbol signalling failure.
    pub fn fail_symbol(&self) -> &str {
        &self.fail_symbol
    }

    /// Step budget, if the test passes one to the simulator.
    pub const fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    /// Directory the simulator writes this test's results into.
    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    /// Path of the artifact whose existence means the test passed.
    pub fn pass_artifact(&self) -> String {
        path::join(&[&self.output_dir, PASS_ARTIFACT])
    }
}
