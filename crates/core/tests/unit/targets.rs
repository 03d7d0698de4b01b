//! # Top-Level Target Tests

use pretty_assertions::assert_eq;
use rvtestgen_core::catalog::Catalog;
use rvtestgen_core::targets;

use crate::common::{add_sub_catalog, empty_config};

#[test]
fn all_depends_on_exactly_every_artifact() {
    let catalog = add_sub_catalog();
    let rule = targets::all_rule(&catalog);
    assert_eq!(rule.target(), "test-all");
    assert_eq!(
        rule.prerequisite_list(),
        [
            "output/riscv_tests/rv32ui-p-add/PASS".to_string(),
            "output/riscv_tests/rv32ui-p-sub/PASS".to_string(),
        ]
    );
    assert!(rule.recipe().is_empty());
}

#[test]
fn clean_removes_every_output_dir() {
    let rule = targets::clean_rule(&add_sub_catalog());
    assert_eq!(
        rule.render(),
        "test-clean:\n\trm -rf output/riscv_tests/rv32ui-p-add output/riscv_tests/rv32ui-p-sub\n"
    );
}

#[test]
fn empty_catalog_targets() {
    let catalog = Catalog::from_config(&empty_config()).unwrap();
    assert_eq!(targets::all_rule(&catalog).render(), "test-all:\n");
    assert_eq!(targets::clean_rule(&catalog).render(), "test-clean:\n");
}

#[test]
fn run_attempts_everything_then_reports() {
    let rule = targets::run_rule();
    assert_eq!(
        rule.recipe(),
        [
            "-@$(MAKE) --no-print-directory -k test-all".to_string(),
            "@$(MAKE) --no-print-directory test-report".to_string(),
        ]
    );
}

#[test]
fn phony_lists_composite_targets() {
    assert_eq!(
        targets::phony_rule().render(),
        ".PHONY: test-report test-all test-clean test-run\n"
    );
}

#[cfg(unix)]
#[test]
fn clean_is_idempotent() {
    use crate::common::{run_recipe, touch};

    let catalog = add_sub_catalog();
    let rule = targets::clean_rule(&catalog);
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "output/riscv_tests/rv32ui-p-add/PASS");
    touch(dir.path(), "output/riscv_tests/rv32ui-p-sub/trace.log");
    touch(dir.path(), "output/nax/keep/PASS");

    assert!(run_recipe(&rule, dir.path(), catalog.len()).success);
    assert!(!dir.path().join("output/riscv_tests/rv32ui-p-add").exists());
    assert!(!dir.path().join("output/riscv_tests/rv32ui-p-sub").exists());
    assert!(dir.path().join("output/nax/keep/PASS").exists());

    let again = run_recipe(&rule, dir.path(), catalog.len());
    assert!(again.success, "second clean failed: {again:?}");
    assert!(!dir.path().join("output/riscv_tests/rv32ui-p-add").exists());
    assert!(dir.path().join("output/nax/keep/PASS").exists());
}
