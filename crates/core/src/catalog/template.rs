//! Image path templates.
//!
//! Templates are plain paths with `{name}` and `{arch}` placeholders, e.g.
//! `baremetal/{name}/build/{arch}/{name}.elf`. Any other brace left after
//! substitution is a configuration defect and fails the whole generation.

use crate::common::{GenError, Result};

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    /// Test name, substituted for `{name}`.
    pub name: &'a str,
    /// Architecture tag, substituted for `{arch}`.
    pub arch: &'a str,
}

/// Substitutes `{name}` and `{arch}` in `template`.
///
/// # Errors
///
/// Returns [`GenError::UnresolvedTemplate`] if a `{` or `}` remains after
/// substitution (an unknown placeholder or an unbalanced brace).
///
/// # Examples
///
/// ```
/// use rvtestgen_core::catalog::template::{resolve, TemplateVars};
///
/// let vars = TemplateVars { name: "dhrystone", arch: "rv32im" };
/// let path = resolve("baremetal/{name}/build/{arch}/{name}.elf", vars).unwrap();
/// assert_eq!(path, "baremetal/dhrystone/build/rv32im/dhrystone.elf");
/// ```
pub fn resolve(template: &str, vars: TemplateVars<'_>) -> Result<String> {
    let resolved = template
        .replace("{name}", vars.name)
        .replace("{arch}", vars.arch);

    if let Some(start) = resolved.find(['{', '}']) {
        let rest = &resolved[start..];
        let end = rest.find('}').map_or(rest.len(), |i| i + 1);
        return Err(GenError::UnresolvedTemplate {
            template: template.to_string(),
            fragment: rest[..end].to_string(),
        });
    }
    Ok(resolved)
}
