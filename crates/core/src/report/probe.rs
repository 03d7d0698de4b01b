//! Artifact existence checks.

use std::path::{Path, PathBuf};

/// Answers whether a `PASS` artifact is present.
///
/// Only existence matters; the artifact's contents are never read.
pub trait ArtifactProbe {
    /// Returns true if the artifact at `path` (as written in the rule file) exists.
    fn exists(&self, path: &str) -> bool;
}

/// Probe resolving artifact paths against a directory on disk.
///
/// The root is normally the directory `make` runs the generated rules from.
#[derive(Debug, Clone)]
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    /// Probe rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory artifact paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactProbe for FsProbe {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}

impl<P: ArtifactProbe + ?Sized> ArtifactProbe for &P {
    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }
}
