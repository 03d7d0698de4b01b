//! # Rule File Tests
//!
//! Block order, determinism, and all-or-nothing writing.

use pretty_assertions::assert_eq;
use rvtestgen_core::catalog::{Catalog, GroupId};
use rvtestgen_core::emit;
use rvtestgen_core::{Config, GenError};

use crate::common::{add_sub_catalog, add_sub_config, init_tracing};

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn two_test_file_layout() {
    let config = add_sub_config();
    let text = emit::render(&config, &add_sub_catalog());
    let lines = lines(&text);

    assert_eq!(
        lines[0],
        "# Generated by testgen. Do not edit; regenerate instead."
    );
    assert_eq!(lines[2], "output/riscv_tests/rv32ui-p-add/PASS:");
    assert_eq!(lines[5], "output/riscv_tests/rv32ui-p-sub/PASS:");
    assert_eq!(lines[8], "TESTS_COUNT=2");
    assert_eq!(lines[10], "test-report:");
    assert!(text.contains(
        "\ntest-all: output/riscv_tests/rv32ui-p-add/PASS output/riscv_tests/rv32ui-p-sub/PASS\n"
    ));
    assert!(text.contains(
        "\ntest-clean:\n\trm -rf output/riscv_tests/rv32ui-p-add output/riscv_tests/rv32ui-p-sub\n"
    ));
    assert!(text.contains("\ntest-run:\n"));
    assert!(text.ends_with(".PHONY: test-report test-all test-clean test-run\n"));
}

#[test]
fn blocks_appear_in_fixed_order() {
    let config = Config::default();
    let catalog = Catalog::from_config(&config).unwrap();
    let text = emit::render(&config, &catalog);

    let positions: Vec<usize> = [
        "output/riscv_tests/rv32ui-p-lui/PASS:",
        "output/nax/test1/PASS:",
        "TESTS_COUNT=75",
        "test-report:",
        "test-all:",
        "test-clean:",
        "test-run:",
        ".PHONY:",
    ]
    .iter()
    .map(|needle| text.find(needle).unwrap())
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn rule_count_matches_catalog() {
    let config = Config::default();
    let catalog = Catalog::from_config(&config).unwrap();
    let text = emit::render(&config, &catalog);

    let rule_heads = text
        .lines()
        .filter(|l| l.ends_with("/PASS:"))
        .count();
    let recipes = text
        .lines()
        .filter(|l| l.starts_with("\tobj_dir/VNaxRiscv "))
        .count();
    assert_eq!(rule_heads, catalog.len());
    assert_eq!(recipes, catalog.len());
    assert_eq!(
        text.lines().filter(|l| l.contains("--timeout")).count(),
        54
    );
}

#[test]
fn every_recipe_references_extra_args() {
    let config = Config::default();
    let catalog = Catalog::from_config(&config).unwrap();
    let text = emit::render(&config, &catalog);
    for recipe in text.lines().filter(|l| l.starts_with("\tobj_dir/")) {
        assert!(recipe.ends_with(" ${ARGS}"), "{recipe}");
    }
}

#[test]
fn rendering_is_deterministic() {
    let config = Config::default();
    let first = emit::render(&config, &Catalog::from_config(&config).unwrap());
    let second = emit::render(&config, &Catalog::from_config(&config).unwrap());
    assert_eq!(first, second);
}

#[test]
fn generate_writes_rendered_text() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tests.mk");
    let config = add_sub_config();

    let catalog = emit::generate(&config, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, emit::render(&config, &catalog));
}

#[test]
fn generate_writes_nothing_on_defect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tests.mk");
    let config = Config {
        groups: vec![GroupId::Base, GroupId::Base],
        ..Config::default()
    };

    let err = emit::generate(&config, &path).unwrap_err();
    assert!(matches!(err, GenError::DuplicateOutputDir { .. }));
    assert!(!path.exists());
}

#[test]
fn generate_rejects_output_root_with_space() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tests.mk");
    let mut config = add_sub_config();
    config.output.root = "build out".to_string();

    let err = emit::generate(&config, &path).unwrap_err();
    assert!(matches!(err, GenError::InvalidLayout { field: "output.root", .. }));
    assert!(!path.exists());
}

#[test]
fn generate_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("tests.mk");
    let err = emit::generate(&add_sub_config(), &path).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }));
}
