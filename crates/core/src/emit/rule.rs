//! Per-test build rules.
//!
//! Each descriptor maps to exactly one [`BuildRule`] whose target is the
//! test's `PASS` artifact. Because the catalog guarantees distinct output
//! directories, targets are distinct as well.

use tracing::trace;

use super::command::SimCommand;
use super::makefile::Rule;
use crate::catalog::{Catalog, TestDescriptor};
use crate::common::path;
use crate::config::SimulatorConfig;

/// Target plus the simulator invocation that produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRule {
    /// `PASS` artifact path.
    pub target: String,
    /// Simulator invocation.
    pub command: SimCommand,
}

impl BuildRule {
    /// Renders the rule as Makefile text.
    pub fn render(&self) -> String {
        Rule::new(self.target.as_str())
            .line(self.command.render())
            .render()
    }
}

/// Maps descriptors to build rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleEmitter<'a> {
    simulator: &'a SimulatorConfig,
}

impl<'a> RuleEmitter<'a> {
    /// Emitter invoking the configured simulator.
    pub const fn new(simulator: &'a SimulatorConfig) -> Self {
        Self { simulator }
    }

    /// Builds the rule for one test.
    ///
    /// Flags follow the simulator's expected order; `--timeout` is present only
    /// when the test carries a step budget, and the extra-arguments variable always comes last.
    pub fn emit(&self, test: &TestDescriptor) -> BuildRule {
        let image = path::join(&[&self.simulator.asset_root, test.binary_path()]);
        let command = SimCommand::new(self.simulator.binary.as_str())
            .flag("name", test.name())
            .flag("output-dir", test.output_dir())
            .flag("load-elf", image)
            .flag("start-symbol", test.start_symbol())
            .flag("pass-symbol", test.pass_symbol())
            .flag("fail-symbol", test.fail_symbol())
            .flag_opt("timeout", test.timeout().map(|t| t.to_string()))
            .var(self.simulator.extra_args_var.as_str());

        trace!(test = test.name(), "emitted rule");
        BuildRule {
            target: test.pass_artifact(),
            command,
        }
    }

    /// Builds one rule per test, in catalog order.
    pub fn emit_all(&self, catalog: &Catalog) -> Vec<BuildRule> {
        catalog.iter().map(|test| self.emit(test)).collect()
    }
}
