// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end pipeline tests over a small slice of the upstream opcode
//! table: parse, validate, normalize once, emit every artifact kind.

use std::collections::BTreeSet;

use sm83_codegen::emit::{emit, Artifact};
use sm83_codegen::table::{Namespace, OpcodeTable};

// Records copied verbatim from the upstream document (bus-cycle counts,
// unsorted key order) so the pipeline is exercised the way a real run is.
const SAMPLE: &str = r#"{
    "unprefixed": {
        "0x80": {
            "mnemonic": "ADD", "length": 1, "cycles": [4],
            "flags": ["Z", "0", "H", "C"], "addr": "0x80",
            "group": "x8/alu", "operand1": "A", "operand2": "B"
        },
        "0x00": {
            "mnemonic": "NOP", "length": 1, "cycles": [4],
            "flags": ["-", "-", "-", "-"], "addr": "0x00",
            "group": "control/misc"
        },
        "0x20": {
            "mnemonic": "JR", "length": 2, "cycles": [12, 8],
            "flags": ["-", "-", "-", "-"], "addr": "0x20",
            "group": "control/br", "operand1": "NZ", "operand2": "r8"
        },
        "0x01": {
            "mnemonic": "LD", "length": 3, "cycles": [12],
            "flags": ["-", "-", "-", "-"], "addr": "0x01",
            "group": "x16/lsm", "operand1": "BC", "operand2": "d16"
        }
    },
    "cbprefixed": {
        "0x11": {
            "mnemonic": "RL", "length": 2, "cycles": [8],
            "flags": ["Z", "0", "0", "C"], "addr": "0x11",
            "group": "x8/rsb", "operand1": "C"
        },
        "0x00": {
            "mnemonic": "RLC", "length": 2, "cycles": [8],
            "flags": ["Z", "0", "0", "C"], "addr": "0x00",
            "group": "x8/rsb", "operand1": "B"
        }
    }
}"#;

fn sample_table() -> OpcodeTable {
    OpcodeTable::from_json(SAMPLE).expect("sample table is well-formed")
}

#[test]
fn decode_entries_come_out_normalized_and_in_byte_order() {
    let out = emit(&sample_table(), Namespace::Plain, Artifact::DecodeEntries);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"0x00 => Some(to_string(0x00, "NOP", 1, "[1]", "control/misc")),"#,
            r#"0x01 => Some(to_string(0x01, "LD BC d16", 3, "[3]", "x16/lsm")),"#,
            r#"0x20 => Some(to_string(0x20, "JR NZ r8", 2, "[3, 2]", "control/br")),"#,
            r#"0x80 => Some(to_string(0x80, "ADD A B", 1, "[1]", "x8/alu")),"#,
        ]
    );
}

#[test]
fn extended_decode_entries_use_prefixed_keys() {
    let out = emit(&sample_table(), Namespace::Extended, Artifact::DecodeEntries);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"0xcb00 => Some(to_string(0xcb00, "RLC B", 2, "[2]", "x8/rsb")),"#,
            r#"0xcb11 => Some(to_string(0xcb11, "RL C", 2, "[2]", "x8/rsb")),"#,
        ]
    );
}

#[test]
fn execute_entries_cover_the_exact_address_set() {
    let table = sample_table();
    let out = emit(&table, Namespace::Plain, Artifact::ExecuteEntries);
    let keys: BTreeSet<&str> = out
        .lines()
        .map(|l| l.split_once(" => ").expect("arm shape").0)
        .collect();
    let addresses: BTreeSet<&str> = table
        .records(Namespace::Plain)
        .iter()
        .map(|(_, r)| r.addr.as_str())
        .collect();
    assert_eq!(keys.len(), out.lines().count(), "duplicate dispatch keys");
    assert_eq!(keys, addresses);
}

#[test]
fn plain_and_extended_handlers_never_collide() {
    let table = sample_table();
    let plain = emit(&table, Namespace::Plain, Artifact::ExecuteEntries);
    let extended = emit(&table, Namespace::Extended, Artifact::ExecuteEntries);

    // Both namespaces contain byte 0x00; the handler names must differ.
    assert!(plain.contains("0x00 => execute_00(cpu),"));
    assert!(extended.contains("0x00 => execute_cb_00(cpu),"));
    assert!(!extended.contains("execute_00(cpu)"));
}

#[test]
fn stubs_follow_the_branch_dependent_cycle_rule() {
    let out = emit(&sample_table(), Namespace::Plain, Artifact::ExecuteStubs);
    let blocks: Vec<&str> = out.split("\n\n").collect();
    assert_eq!(blocks.len(), 4);

    let nop = blocks[0];
    assert!(nop.starts_with("fn execute_00(cpu: &mut Cpu) {"));
    assert!(nop.contains("cpu.advance_pc = 1;"));
    assert_eq!(nop.matches("cpu.cycles +=").count(), 1);
    assert!(nop.contains("cpu.cycles += 1;"));
    assert!(nop.ends_with("} // NOP [-/-/-/-]"));

    let jr = blocks[2];
    assert!(jr.starts_with("fn execute_20(cpu: &mut Cpu) {"));
    assert!(!jr.contains("cpu.cycles +="));
    assert!(jr.contains("// cycles: 3 if branch taken, else 2"));
    assert!(jr.ends_with("} // JR NZ r8 [-/-/-/-]"));

    let add = blocks[3];
    assert!(add.starts_with("fn execute_80(cpu: &mut Cpu) {"));
    assert!(add.trim_end().ends_with("} // ADD A B [Z/0/H/C]"));
}

#[test]
fn extended_stubs_carry_the_namespace_infix() {
    let out = emit(&sample_table(), Namespace::Extended, Artifact::ExecuteStubs);
    assert!(out.contains("fn execute_cb_00(cpu: &mut Cpu) {"));
    assert!(out.contains("} // RLC B [Z/0/0/C]"));
    assert!(out.contains("fn execute_cb_11(cpu: &mut Cpu) {"));
    assert!(out.contains("} // RL C [Z/0/0/C]"));
    assert!(out.contains("cpu.cycles += 2;"));
}
