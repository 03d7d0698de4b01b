//! Catalog construction.
//!
//! The builder merges three option layers per case (category built-ins, the
//! configuration's category layer, the case's own overrides), resolves the
//! image template, and rejects anything that would make two rules collide.
//! Construction either yields a complete catalog or an error; there is no
//! partial result.

use std::collections::HashMap;

use tracing::{debug, info};

use super::descriptor::TestDescriptor;
use super::groups::GroupSpec;
use super::template::{self, TemplateVars};
use super::{Catalog, GroupSlice};
use crate::common::{GenError, Result};
use crate::config::Config;

/// Assembles a [`Catalog`] from group definitions.
#[derive(Debug)]
pub struct CatalogBuilder<'a> {
    config: &'a Config,
    groups: Vec<GroupSpec>,
}

impl<'a> CatalogBuilder<'a> {
    /// Starts from the groups the configuration selects: built-in ones first, then custom ones.
    pub fn new(config: &'a Config) -> Self {
        let groups = config
            .groups
            .iter()
            .map(|id| id.spec())
            .chain(config.custom_groups.iter().cloned())
            .collect();
        Self { config, groups }
    }

    /// Starts with no groups; only the configuration's defaults and layout are used.
    pub const fn empty(config: &'a Config) -> Self {
        Self {
            config,
            groups: Vec::new(),
        }
    }

    /// Appends a group after those already added.
    #[must_use]
    pub fn group(mut self, spec: GroupSpec) -> Self {
        self.groups.push(spec);
        self
    }

    /// Resolves every case into a descriptor.
    ///
    /// # Errors
    ///
    /// - [`GenError::InvalidLayout`] if the output layout cannot appear in a make target.
    /// - [`GenError::InvalidName`] if a name cannot be used as a directory leaf.
    /// - [`GenError::UnresolvedTemplate`] if an image template keeps a placeholder.
    /// - [`GenError::DuplicateOutputDir`] if two cases map to the same output directory.
    pub fn build(self) -> Result<Catalog> {
        self.config.output.validate()?;

        let mut descriptors = Vec::new();
        let mut slices = Vec::with_capacity(self.groups.len());
        let mut claimed: HashMap<String, String> = HashMap::new();

        for group in self.groups {
            let defaults = self.config.options_for(group.category);
            let start = descriptors.len();

            for case in group.cases {
                validate_name(&case.name, &group.name)?;

                let options = defaults.merge(&case.overrides);
                let binary_path = template::resolve(
                    &options.image,
                    TemplateVars {
                        name: &case.name,
                        arch: &self.config.arch,
                    },
                )?;
                let descriptor = TestDescriptor::new(
                    case.name,
                    group.name.clone(),
                    group.category,
                    binary_path,
                    options,
                    &self.config.output,
                );

                let owner = format!("{}/{}", group.name, descriptor.name());
                if let Some(first) = claimed.insert(descriptor.output_dir().to_string(), owner) {
                    return Err(GenError::DuplicateOutputDir {
                        output_dir: descriptor.output_dir().to_string(),
                        first,
                        second: format!("{}/{}", group.name, descriptor.name()),
                    });
                }
                descriptors.push(descriptor);
            }

            debug!(
                group = %group.name,
                category = group.category.as_str(),
                tests = descriptors.len() - start,
                "resolved group"
            );
            slices.push(GroupSlice {
                name: group.name,
                range: start..descriptors.len(),
            });
        }

        info!(
            tests = descriptors.len(),
            groups = slices.len(),
            "catalog built"
        );
        Ok(Catalog::from_parts(descriptors, slices))
    }
}

/// Names become directory leaves and unquoted make targets.
fn validate_name(name: &str, group: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name is a relative directory reference")
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+'))
    {
        Some("only ASCII letters, digits, '-', '_', '.', and '+' are allowed")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(GenError::InvalidName {
            name: name.to_string(),
            group: group.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
