//! Built-in test groups.
//!
//! Each group is a named, ordered list of cases sharing a category. ISA groups
//! are bare riscv-tests names; workload groups are names plus an optional image
//! template parameterized by `{arch}`. Cases that need different symbols or a
//! longer step budget carry a [`TestOverrides`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::descriptor::{Category, TestOverrides};
use crate::common::GenError;

const BASE: &[&str] = &[
    "rv32ui-p-lui",
    "rv32ui-p-auipc",
    "rv32ui-p-jal",
    "rv32ui-p-jalr",
    "rv32ui-p-beq",
    "rv32ui-p-bge",
    "rv32ui-p-bgeu",
    "rv32ui-p-blt",
    "rv32ui-p-bltu",
    "rv32ui-p-bne",
    "rv32ui-p-add",
    "rv32ui-p-addi",
    "rv32ui-p-and",
    "rv32ui-p-andi",
    "rv32ui-p-or",
    "rv32ui-p-ori",
    "rv32ui-p-sll",
    "rv32ui-p-slli",
    "rv32ui-p-slt",
    "rv32ui-p-slti",
    "rv32ui-p-sra",
    "rv32ui-p-srai",
    "rv32ui-p-srl",
    "rv32ui-p-srli",
    "rv32ui-p-sub",
    "rv32ui-p-xor",
    "rv32ui-p-xori",
];

const MEMORY: &[&str] = &[
    "rv32ui-p-lb",
    "rv32ui-p-lbu",
    "rv32ui-p-lh",
    "rv32ui-p-lhu",
    "rv32ui-p-lw",
    "rv32ui-p-sb",
    "rv32ui-p-sh",
    "rv32ui-p-sw",
];

const MUL: &[&str] = &[
    "rv32um-p-mul",
    "rv32um-p-mulh",
    "rv32um-p-mulhsu",
    "rv32um-p-mulhu",
];

const DIV: &[&str] = &["rv32um-p-div", "rv32um-p-divu", "rv32um-p-rem", "rv32um-p-remu"];

const ATOMIC: &[&str] = &[
    "rv32ua-p-amoswap_w",
    "rv32ua-p-amoor_w",
    "rv32ua-p-amoand_w",
    "rv32ua-p-amoxor_w",
    "rv32ua-p-amoadd_w",
    "rv32ua-p-amomaxu_w",
    "rv32ua-p-amomax_w",
    "rv32ua-p-amominu_w",
    "rv32ua-p-amomin_w",
];

const FLOAT: &[&str] = &[
    "rv32uf-p-fmadd",
    "rv32uf-p-fadd",
    "rv32uf-p-fcmp",
    "rv32uf-p-fcvt_w",
    "rv32uf-p-ldst",
    "rv32uf-p-recoding",
    "rv32uf-p-fclass",
    "rv32uf-p-fcvt",
    "rv32uf-p-fdiv",
    "rv32uf-p-fmin",
    "rv32uf-p-move",
];

const DOUBLE: &[&str] = &[
    "rv32ud-p-fmadd",
    "rv32ud-p-fadd",
    "rv32ud-p-fcvt",
    "rv32ud-p-recoding",
    "rv32ud-p-fclass",
    "rv32ud-p-fcvt_w",
    "rv32ud-p-fmin",
    "rv32ud-p-fcmp",
    "rv32ud-p-fdiv",
    "rv32ud-p-ldst",
];

/// LR/SC image shared by the two split reservation tests.
const LRSC_IMAGE: &str = "riscv-tests/rv32ua-p-lrsc";

/// Step budget for the LR/SC tests; the reservation loops run long.
const LRSC_TIMEOUT: u64 = 100_000;

const FREERTOS: &[&str] = &[
    "blocktim",
    "countsem",
    "EventGroupsDemo",
    "flop",
    "integer",
    "QPeek",
    "QueueSet",
    "recmutex",
    "semtest",
    "TaskNotify",
    "dynamic",
    "GenQTest",
    "PollQ",
    "QueueOverwrite",
    "QueueSetPolling",
    "sp_flop",
    "test1",
];

/// Identifier of a built-in group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupId {
    /// RV32I arithmetic, logic, and control transfer.
    Base,
    /// RV32I loads and stores.
    Memory,
    /// RV32M multiplication.
    Mul,
    /// RV32M division and remainder.
    Div,
    /// RV32A atomics, including the split LR/SC cases.
    Atomic,
    /// RV32F single-precision float.
    Float,
    /// RV32D double-precision float.
    Double,
    /// Baremetal firmware and benchmarks.
    Firmware,
    /// FreeRTOS demo applications.
    Rtos,
}

impl GroupId {
    /// Every built-in group in canonical order.
    pub const ALL: [Self; 9] = [
        Self::Base,
        Self::Memory,
        Self::Mul,
        Self::Div,
        Self::Atomic,
        Self::Float,
        Self::Double,
        Self::Firmware,
        Self::Rtos,
    ];

    /// Groups emitted when the configuration does not choose.
    ///
    /// The float groups are left out: the default `rv32im` core has no FPU.
    pub fn default_selection() -> Vec<Self> {
        vec![
            Self::Base,
            Self::Memory,
            Self::Mul,
            Self::Div,
            Self::Atomic,
            Self::Firmware,
            Self::Rtos,
        ]
    }

    /// Kebab-case name used in configuration files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Memory => "memory",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Atomic => "atomic",
            Self::Float => "float",
            Self::Double => "double",
            Self::Firmware => "firmware",
            Self::Rtos => "rtos",
        }
    }

    /// Category shared by every case of this group.
    pub const fn category(self) -> Category {
        match self {
            Self::Firmware | Self::Rtos => Category::Workload,
            _ => Category::Isa,
        }
    }

    /// Full definition of the group.
    pub fn spec(self) -> GroupSpec {
        let cases = match self {
            Self::Base => bare(BASE),
            Self::Memory => bare(MEMORY),
            Self::Mul => bare(MUL),
            Self::Div => bare(DIV),
            Self::Float => bare(FLOAT),
            Self::Double => bare(DOUBLE),
            Self::Atomic => {
                let mut cases = bare(ATOMIC);
                cases.push(CaseSpec::with_overrides(
                    "rv32ua-p-lrsc_1234",
                    TestOverrides::default()
                        .image(LRSC_IMAGE)
                        .timeout(LRSC_TIMEOUT)
                        .pass_symbol("test_5"),
                ));
                cases.push(CaseSpec::with_overrides(
                    "rv32ua-p-lrsc_6",
                    TestOverrides::default()
                        .image(LRSC_IMAGE)
                        .timeout(LRSC_TIMEOUT)
                        .start_symbol("test_6"),
                ));
                cases
            }
            Self::Firmware => vec![
                CaseSpec::with_overrides(
                    "lsu",
                    TestOverrides::default().image("baremetal/lsu/build/lsu.elf"),
                ),
                CaseSpec::new("machine"),
                CaseSpec::new("dhrystone"),
                CaseSpec::with_overrides(
                    "coremark",
                    TestOverrides::default().image("baremetal/coremark/coremark_{arch}.elf"),
                ),
            ],
            Self::Rtos => FREERTOS
                .iter()
                .map(|&name| {
                    CaseSpec::with_overrides(
                        name,
                        TestOverrides::default()
                            .image("baremetal/freertosDemo/build/{name}/{arch}/freertosDemo.elf"),
                    )
                })
                .collect(),
        };

        GroupSpec {
            name: self.as_str().to_string(),
            category: self.category(),
            cases,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupId {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| GenError::UnknownGroup(s.to_string()))
    }
}

fn bare(names: &[&str]) -> Vec<CaseSpec> {
    names.iter().map(|&name| CaseSpec::new(name)).collect()
}

/// A named group of cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    /// Group name, used in logs, listings, and error messages.
    pub name: String,
    /// Category of every case in the group.
    pub category: Category,
    /// Cases in emission order.
    pub cases: Vec<CaseSpec>,
}

/// One entry of a group: a test name plus the options it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    /// Test name; also the output directory leaf.
    pub name: String,
    /// Options differing from the category defaults.
    #[serde(default)]
    pub overrides: TestOverrides,
}

impl CaseSpec {
    /// A case using every category default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: TestOverrides::default(),
        }
    }

    /// A case changing some options.
    pub fn with_overrides(name: impl Into<String>, overrides: TestOverrides) -> Self {
        Self {
            name: name.into(),
            overrides,
        }
    }
}
