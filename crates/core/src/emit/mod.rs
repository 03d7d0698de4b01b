//! Rule file emission.
//!
//! This module renders the catalog into a Makefile fragment. It performs:
//! 1. **Command construction:** A structured simulator command per test ([`command`]).
//! 2. **Rule emission:** One `PASS`-targeted rule per test ([`rule`]).
//! 3. **Assembly:** Test rules, `TESTS_COUNT`, `test-report`, and the composite targets, in a fixed order.
//! 4. **Writing:** The whole file is rendered in memory and written in one call.
//!
//! Rendering is deterministic: the same configuration yields byte-identical text.

use std::fs;
use std::path::Path;

use tracing::info;

/// Structured simulator command line and quoting.
pub mod command;
/// Makefile rule and assignment syntax.
pub mod makefile;
/// Per-test build rules.
pub mod rule;

pub use command::SimCommand;
pub use rule::{BuildRule, RuleEmitter};

use crate::catalog::Catalog;
use crate::common::constants::GENERATED_HEADER;
use crate::common::{GenError, Result};
use crate::config::Config;
use crate::report::Aggregator;
use crate::targets;

/// Renders the complete rule file for `catalog`.
pub fn render(config: &Config, catalog: &Catalog) -> String {
    let emitter = RuleEmitter::new(&config.simulator);
    let aggregator = Aggregator::new(catalog);

    let mut blocks = vec![format!("{GENERATED_HEADER}\n")];
    blocks.extend(emitter.emit_all(catalog).iter().map(BuildRule::render));
    blocks.push(aggregator.count_variable());
    blocks.push(aggregator.report_rule().render());
    blocks.push(targets::all_rule(catalog).render());
    blocks.push(targets::clean_rule(catalog).render());
    blocks.push(targets::run_rule().render());
    blocks.push(targets::phony_rule().render());
    blocks.join("\n")
}

/// Writes rendered rule text to `path`.
///
/// # Errors
///
/// Returns [`GenError::Io`] if the file cannot be written.
pub fn write_rule_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the catalog, renders it, and writes it to `path`.
///
/// Nothing is written unless the catalog builds cleanly.
///
/// # Errors
///
/// Returns any catalog construction error, or [`GenError::Io`] if writing fails.
pub fn generate(config: &Config, path: &Path) -> Result<Catalog> {
    let catalog = Catalog::from_config(config)?;
    let text = render(config, &catalog);
    write_rule_file(path, &text)?;
    info!(path = %path.display(), tests = catalog.len(), "wrote rule file");
    Ok(catalog)
}
