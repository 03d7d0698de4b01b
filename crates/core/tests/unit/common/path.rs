//! # Path Joining Tests

use rstest::rstest;
use rvtestgen_core::common::path::join;

#[rstest]
#[case(&["output", "riscv_tests", "rv32ui-p-add"], "output/riscv_tests/rv32ui-p-add")]
#[case(&["output/", "/nax/", "dhrystone"], "output/nax/dhrystone")]
#[case(&["", "nax", "lsu"], "nax/lsu")]
#[case(&["../../../../ext/NaxSoftware", "riscv-tests/rv32ua-p-lrsc"], "../../../../ext/NaxSoftware/riscv-tests/rv32ua-p-lrsc")]
#[case(&["/", "tmp", "PASS"], "/tmp/PASS")]
#[case(&["out", "", "PASS"], "out/PASS")]
fn joins_components(#[case] parts: &[&str], #[case] expected: &str) {
    assert_eq!(join(parts), expected);
}

#[test]
fn empty_input_gives_empty_path() {
    assert_eq!(join(&[]), "");
    assert_eq!(join(&["", ""]), "");
}
