//! # Rule Emitter Tests
//!
//! One rule per descriptor, exact simulator arguments, `--timeout` only when set.

use pretty_assertions::assert_eq;
use rvtestgen_core::catalog::{Catalog, GroupId};
use rvtestgen_core::config::SimulatorConfig;
use rvtestgen_core::emit::RuleEmitter;
use rvtestgen_core::Config;

use crate::common::add_sub_catalog;

#[test]
fn isa_rule_text_matches_simulator_interface() {
    let catalog = add_sub_catalog();
    let simulator = SimulatorConfig::default();
    let rule = RuleEmitter::new(&simulator).emit(&catalog.descriptors()[0]);

    assert_eq!(rule.target, "output/riscv_tests/rv32ui-p-add/PASS");
    assert_eq!(
        rule.render(),
        "output/riscv_tests/rv32ui-p-add/PASS:\n\
         \tobj_dir/VNaxRiscv --name rv32ui-p-add --output-dir output/riscv_tests/rv32ui-p-add \
         --load-elf ../../../../ext/NaxSoftware/riscv-tests/rv32ui-p-add --start-symbol test_2 \
         --pass-symbol pass --fail-symbol fail --timeout 10000 ${ARGS}\n"
    );
}

#[test]
fn workload_rule_has_no_timeout() {
    let config = Config {
        groups: vec![GroupId::Firmware],
        ..Config::default()
    };
    let catalog = Catalog::from_config(&config).unwrap();
    let rule = RuleEmitter::new(&config.simulator).emit(catalog.get("dhrystone").unwrap());

    assert_eq!(rule.command.value_of("timeout"), None);
    assert_eq!(rule.command.value_of("start-symbol"), Some("_start"));
    assert_eq!(
        rule.command.value_of("load-elf"),
        Some("../../../../ext/NaxSoftware/baremetal/dhrystone/build/rv32im/dhrystone.elf")
    );
    assert!(rule.command.render().ends_with("--fail-symbol fail ${ARGS}"));
}

#[test]
fn one_rule_per_descriptor_with_distinct_targets() {
    let catalog = Catalog::from_config(&Config::default()).unwrap();
    let simulator = SimulatorConfig::default();
    let rules = RuleEmitter::new(&simulator).emit_all(&catalog);

    assert_eq!(rules.len(), catalog.len());
    for (rule, test) in rules.iter().zip(catalog.iter()) {
        assert_eq!(rule.target, test.pass_artifact());
        assert_eq!(rule.command.value_of("name"), Some(test.name()));
    }
    let mut targets: Vec<&str> = rules.iter().map(|r| r.target.as_str()).collect();
    targets.sort_unstable();
    targets.dedup();
    assert_eq!(targets.len(), rules.len());
}

#[test]
fn shared_image_gives_two_rules() {
    let catalog = Catalog::from_config(&Config {
        groups: vec![GroupId::Atomic],
        ..Config::default()
    })
    .unwrap();
    let simulator = SimulatorConfig::default();
    let emitter = RuleEmitter::new(&simulator);
    let a = emitter.emit(catalog.get("rv32ua-p-lrsc_1234").unwrap());
    let b = emitter.emit(catalog.get("rv32ua-p-lrsc_6").unwrap());

    assert_ne!(a.target, b.target);
    assert_eq!(a.command.value_of("load-elf"), b.command.value_of("load-elf"));
    assert_eq!(a.command.value_of("pass-symbol"), Some("test_5"));
    assert_eq!(b.command.value_of("start-symbol"), Some("test_6"));
    assert_eq!(a.command.value_of("timeout"), Some("100000"));
}

#[test]
fn simulator_settings_are_honoured() {
    let catalog = add_sub_catalog();
    let simulator = SimulatorConfig {
        binary: "build/Vcore".to_string(),
        asset_root: "/opt/assets/".to_string(),
        extra_args_var: "SIM_FLAGS".to_string(),
    };
    let rule = RuleEmitter::new(&simulator).emit(&catalog.descriptors()[1]);
    let text = rule.command.render();
    assert!(text.starts_with("build/Vcore --name rv32ui-p-sub"));
    assert!(text.contains("--load-elf /opt/assets/riscv-tests/rv32ui-p-sub"));
    assert!(text.ends_with("${SIM_FLAGS}"));
}
