//! Common types shared by every stage of the generator.
//!
//! This module provides:
//! 1. **Error Handling:** The `GenError` taxonomy for configuration defects and I/O.
//! 2. **Constants:** Artifact names and phony target names used across emitters.
//! 3. **Paths:** Deterministic `/`-joined paths independent of the host separator.

/// Generator-wide constants.
pub mod constants;

/// Error types.
pub mod error;

/// Slash-separated path joining for rule text.
pub mod path;

pub use error::{GenError, Result};
