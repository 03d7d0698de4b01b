//! Path joining for generated rule text.
//!
//! Rule files are consumed by `make` and a POSIX shell, so paths are always
//! joined with `/` regardless of the host platform. Empty components are
//! skipped and redundant separators at the joins are collapsed.

/// Joins path components with `/`.
///
/// # Examples
///
/// ```
/// use rvtestgen_core::common::path::join;
///
/// assert_eq!(join(&["output/", "riscv_tests", "rv32ui-p-add"]), "output/riscv_tests/rv32ui-p-add");
/// assert_eq!(join(&["", "nax", "dhrystone"]), "nax/dhrystone");
/// ```
pub fn join(parts: &[&str]) -> String {
    let mut out = String::new();
    for part in parts.iter().filter(|p| !p.is_empty()) {
        if out.is_empty() {
            out.push_str(part.trim_end_matches('/'));
            if out.is_empty() {
                // Component was only slashes: keep the filesystem root.
                out.push('/');
            }
            continue;
        }
        let part = part.trim_matches('/');
        if part.is_empty() {
            continue;
        }
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(part);
    }
    out
}
