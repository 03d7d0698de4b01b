//! Configuration system for the test generator.
//!
//! This module defines every knob the generator reads. It provides:
//! 1. **Defaults:** Baseline paths and symbols matching the stock NaxRiscv test setup.
//! 2. **Structures:** Simulator invocation, output layout, per-category options, group selection.
//! 3. **Loading:** JSON deserialization where every field is optional and falls back to its default.
//!
//! Option precedence for a single test is: category built-in defaults, then the
//! category layer from this configuration (`isa` / `workload`), then the case's own overrides.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{Category, GroupId, GroupSpec, TestOptions, TestOverrides};
use crate::common::{GenError, Result};

/// Default configuration constants for the generator.
mod defaults {
    /// Simulator executable, relative to the directory `make` runs in.
    pub const SIMULATOR: &str = "obj_dir/VNaxRiscv";

    /// Root that every `--load-elf` image path is resolved against.
    pub const ASSET_ROOT: &str = "../../../../ext/NaxSoftware";

    /// Make variable appended verbatim to every recipe.
    pub const EXTRA_ARGS_VAR: &str = "ARGS";

    /// Directory holding every per-test output directory.
    pub const OUTPUT_ROOT: &str = "output";

    /// Output namespace for ISA compliance tests.
    pub const ISA_DIR: &str = "riscv_tests";

    /// Output namespace for firmware and software workloads.
    pub const WORKLOAD_DIR: &str = "nax";

    /// Architecture tag substituted into workload path templates.
    pub const ARCH: &str = "rv32im";
}

/// Root configuration structure.
///
/// All fields are optional when deserializing; missing fields take the defaults
/// of the stock suite.
///
/// # Examples
///
/// ```
/// use rvtestgen_core::config::Config;
///
/// let json = r#"{ "arch": "rv32imac", "isa": { "timeout": 50000 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.arch, "rv32imac");
/// assert_eq!(config.simulator.binary, "obj_dir/VNaxRiscv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How the simulator is invoked.
    #[serde(default)]
    pub simulator: SimulatorConfig,
    /// Where test output directories live.
    #[serde(default)]
    pub output: OutputConfig,
    /// Architecture tag substituted for `{arch}` in path templates.
    #[serde(default = "Config::default_arch")]
    pub arch: String,
    /// Options layered over the ISA category defaults.
    #[serde(default)]
    pub isa: TestOverrides,
    /// Options layered over the workload category defaults.
    #[serde(default)]
    pub workload: TestOverrides,
    /// Built-in groups to include, in emission order.
    #[serde(default = "GroupId::default_selection")]
    pub groups: Vec<GroupId>,
    /// Additional groups appended after the built-in ones.
    #[serde(default)]
    pub custom_groups: Vec<GroupSpec>,
}

impl Config {
    fn default_arch() -> String {
        defaults::ARCH.to_string()
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::ConfigParse`] if the text is not valid JSON or names
    /// an unknown field or group.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] if the file cannot be read, or
    /// [`GenError::ConfigParse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Effective options for a category: built-in defaults with this configuration's layer applied.
    pub fn options_for(&self, category: Category) -> TestOptions {
        let layer = match category {
            Category::Isa => &self.isa,
            Category::Workload => &self.workload,
        };
        category.builtin_options().merge(layer)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulator: SimulatorConfig::default(),
            output: OutputConfig::default(),
            arch: Self::default_arch(),
            isa: TestOverrides::default(),
            workload: TestOverrides::default(),
            groups: GroupId::default_selection(),
            custom_groups: Vec::new(),
        }
    }
}

/// Simulator invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Simulator executable.
    #[serde(default = "SimulatorConfig::default_binary")]
    pub binary: String,
    /// Prefix joined in front of every image path.
    #[serde(default = "SimulatorConfig::default_asset_root")]
    pub asset_root: String,
    /// Name of the make variable referenced at the end of every recipe.
    #[serde(default = "SimulatorConfig::default_extra_args_var")]
    pub extra_args_var: String,
}

impl SimulatorConfig {
    fn default_binary() -> String {
        defaults::SIMULATOR.to_string()
    }

    fn default_asset_root() -> String {
        defaults::ASSET_ROOT.to_string()
    }

    fn default_extra_args_var() -> String {
        defaults::EXTRA_ARGS_VAR.to_string()
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            binary: Self::default_binary(),
            asset_root: Self::default_asset_root(),
            extra_args_var: Self::default_extra_args_var(),
        }
    }
}

/// Output directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory containing both category namespaces.
    #[serde(default = "OutputConfig::default_root")]
    pub root: String,
    /// Namespace for ISA compliance tests.
    #[serde(default = "OutputConfig::default_isa_dir")]
    pub isa_dir: String,
    /// Namespace for workload tests.
    #[serde(default = "OutputConfig::default_workload_dir")]
    pub workload_dir: String,
}

impl OutputConfig {
    fn default_root() -> String {
        defaults::OUTPUT_ROOT.to_string()
    }

    fn default_isa_dir() -> String {
        defaults::ISA_DIR.to_string()
    }

    fn default_workload_dir() -> String {
        defaults::WORKLOAD_DIR.to_string()
    }

    /// Namespace directory for a category.
    pub fn category_dir(&self, category: Category) -> &str {
        match category {
            Category::Isa => &self.isa_dir,
            Category::Workload => &self.workload_dir,
        }
    }

    /// Checks that every component can be written unquoted as part of a make target.
    ///
    /// Make splits targets on whitespace and treats `:`, `%`, `#`, `$` and
    /// quotes specially, so those never reach the rule file.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidLayout`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("output.root", &self.root),
            ("output.isa_dir", &self.isa_dir),
            ("output.workload_dir", &self.workload_dir),
        ] {
            if !value.chars().all(is_target_char) {
                return Err(GenError::InvalidLayout {
                    field,
                    value: value.clone(),
                    reason: "only ASCII letters, digits, '-', '_', '.', '+', and '/' are allowed",
                });
            }
        }
        Ok(())
    }
}

const fn is_target_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+' | '/')
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            isa_dir: Self::default_isa_dir(),
            workload_dir: Self::default_workload_dir(),
        }
    }
}
