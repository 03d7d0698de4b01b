//! Test catalog.
//!
//! This module turns static group tables into the immutable, ordered set of
//! tests a run covers. It provides:
//! 1. **Descriptors:** [`TestDescriptor`] with its option layers ([`TestOptions`], [`TestOverrides`]).
//! 2. **Groups:** The built-in riscv-tests and workload tables ([`GroupId`]) and custom [`GroupSpec`]s.
//! 3. **Templates:** `{name}` / `{arch}` image path substitution.
//! 4. **Builder:** [`CatalogBuilder`], which validates and resolves everything up front.

use std::ops::Range;

/// Catalog construction.
pub mod builder;
/// Test descriptors and option layers.
pub mod descriptor;
/// Built-in group tables.
pub mod groups;
/// Image path templates.
pub mod template;

pub use builder::CatalogBuilder;
pub use descriptor::{Category, TestDescriptor, TestOptions, TestOverrides};
pub use groups::{CaseSpec, GroupId, GroupSpec};

use crate::common::Result;
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupSlice {
    name: String,
    range: Range<usize>,
}

/// Immutable ordered collection of test descriptors.
///
/// Output directories, and therefore `PASS` artifact paths, are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    descriptors: Vec<TestDescriptor>,
    groups: Vec<GroupSlice>,
}

impl Catalog {
    /// Builds the catalog the configuration describes.
    ///
    /// # Errors
    ///
    /// Propagates any configuration defect found by [`CatalogBuilder::build`].
    pub fn from_config(config: &Config) -> Result<Self> {
        CatalogBuilder::new(config).build()
    }

    const fn from_parts(descriptors: Vec<TestDescriptor>, groups: Vec<GroupSlice>) -> Self {
        Self {
            descriptors,
            groups,
        }
    }

    /// Number of tests.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if no test was selected.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors in emission order.
    pub fn descriptors(&self) -> &[TestDescriptor] {
        &self.descriptors
    }

    /// Iterates descriptors in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestDescriptor> {
        self.descriptors.iter()
    }

    /// Looks a test up by name.
    pub fn get(&self, name: &str) -> Option<&TestDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// Group names paired with their descriptors, in emission order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[TestDescriptor])> {
        self.groups
            .iter()
            .map(|g| (g.name.as_str(), &self.descriptors[g.range.clone()]))
    }

    /// Every `PASS` artifact path, in emission order.
    pub fn pass_artifacts(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .map(TestDescriptor::pass_artifact)
            .collect()
    }

    /// Every output directory, in emission order.
    pub fn output_dirs(&self) -> Vec<&str> {
        self.descriptors
            .iter()
            .map(TestDescriptor::output_dir)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TestDescriptor;
    type IntoIter = std::slice::Iter<'a, TestDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
