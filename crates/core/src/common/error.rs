//! Generator error definitions.
//!
//! Every error here is a configuration defect or an I/O failure surfaced before
//! any rule text is written. Test failures are never errors: they are facts the
//! generated report picks up at execution time.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the catalog or writing the rule file.
#[derive(Debug, Error)]
pub enum GenError {
    /// A path template still contains a placeholder after substitution.
    ///
    /// The associated values are the template text and the leftover fragment.
    #[error("unresolved placeholder `{fragment}` in path template `{template}`")]
    UnresolvedTemplate {
        /// Template as written in the group table or configuration.
        template: String,
        /// First unresolved `{...}` fragment.
        fragment: String,
    },

    /// A test name is empty or cannot be used as a directory leaf.
    #[error("invalid test name `{name}` in group `{group}`: {reason}")]
    InvalidName {
        /// Offending name.
        name: String,
        /// Group the entry came from.
        group: String,
        /// Why the name was rejected.
        reason: &'static str,
    },

    /// An output layout component cannot appear in a make target.
    #[error("invalid output layout `{field}` = `{value}`: {reason}")]
    InvalidLayout {
        /// Configuration field, e.g. `output.root`.
        field: &'static str,
        /// Value as configured.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Two descriptors resolved to the same output directory.
    #[error("output directory `{output_dir}` claimed by both `{first}` and `{second}`")]
    DuplicateOutputDir {
        /// Colliding directory.
        output_dir: String,
        /// Group of the descriptor that claimed it first.
        first: String,
        /// Group of the descriptor that collided.
        second: String,
    },

    /// A group name given on the command line or in a config file is not known.
    #[error("unknown test group `{0}`")]
    UnknownGroup(String),

    /// A JSON configuration could not be deserialized.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Reading a configuration or writing the rule file failed.
    #[error("I/O error on `{}`: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

/// Result alias used across the generator.
pub type Result<T> = std::result::Result<T, GenError>;
