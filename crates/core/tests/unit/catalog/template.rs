//! # Template Tests

use rstest::rstest;
use rvtestgen_core::GenError;
use rvtestgen_core::catalog::template::{TemplateVars, resolve};

const VARS: TemplateVars<'static> = TemplateVars {
    name: "blocktim",
    arch: "rv32im",
};

#[rstest]
#[case("riscv-tests/{name}", "riscv-tests/blocktim")]
#[case(
    "baremetal/freertosDemo/build/{name}/{arch}/freertosDemo.elf",
    "baremetal/freertosDemo/build/blocktim/rv32im/freertosDemo.elf"
)]
#[case("baremetal/coremark/coremark_{arch}.elf", "baremetal/coremark/coremark_rv32im.elf")]
#[case("baremetal/lsu/build/lsu.elf", "baremetal/lsu/build/lsu.elf")]
fn resolves_known_placeholders(#[case] template: &str, #[case] expected: &str) {
    assert_eq!(resolve(template, VARS).unwrap(), expected);
}

#[rstest]
#[case("baremetal/{target}/x.elf", "{target}")]
#[case("baremetal/{arch/x.elf", "{arch/x.elf")]
#[case("baremetal/arch}/x.elf", "}")]
fn rejects_leftover_braces(#[case] template: &str, #[case] fragment: &str) {
    match resolve(template, VARS) {
        Err(GenError::UnresolvedTemplate {
            template: t,
            fragment: f,
        }) => {
            assert_eq!(t, template);
            assert_eq!(f, fragment);
        }
        other => panic!("expected UnresolvedTemplate, got {other:?}"),
    }
}
