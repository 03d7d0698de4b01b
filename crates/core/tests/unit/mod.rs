//! # Unit Components
//!
//! Tests grouped by generator module, plus catalog-wide properties.




/// Command rendering, per-test rules, and full rule file assembly.
pub mod emit;


/// Composite top-level targets.
pub mod targets;
