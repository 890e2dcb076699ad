// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three artifact emitters.
//!
//! Each fragment is a total function of `(Namespace, record)`; all
//! validation happens during table construction, and no state is carried
//! across records. Fragments come out in the table's documented ascending
//! byte order.

use crate::table::{Namespace, OpcodeRecord, OpcodeTable};
use crate::text;

/// Which artifact kind to emit. Modes are mutually exclusive per run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Artifact {
    DecodeEntries,
    ExecuteEntries,
    ExecuteStubs,
}

/// Emits the selected artifact for every record of `ns`, in table order.
///
/// Dispatch entries are one line per record; stubs are blank-line separated
/// blocks.
#[must_use]
pub fn emit(table: &OpcodeTable, ns: Namespace, artifact: Artifact) -> String {
    let mut out = String::new();
    for (byte, record) in table.records(ns) {
        match artifact {
            Artifact::DecodeEntries => {
                out.push_str(&decode_entry(ns, *byte, record));
                out.push('\n');
            }
            Artifact::ExecuteEntries => {
                out.push_str(&execute_entry(ns, *byte));
                out.push('\n');
            }
            Artifact::ExecuteStubs => {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&execute_stub(ns, *byte, record));
            }
        }
    }
    out
}

/// Dispatch key for the decode match.
///
/// Extended keys use the prefixed two-byte form, so a plain opcode and an
/// extended opcode with the same secondary byte can never collide.
#[must_use]
pub fn dispatch_key(ns: Namespace, byte: u8) -> String {
    match ns {
        Namespace::Plain => format!("0x{byte:02x}"),
        Namespace::Extended => format!("0xcb{byte:02x}"),
    }
}

/// Handler identifier used by the execute match and the generated stubs.
///
/// The `0x` marker is stripped so the digits form a valid identifier
/// suffix; extended handlers carry a `cb_` infix so the two namespaces
/// never collide even for identical byte values.
#[must_use]
pub fn handler_name(ns: Namespace, byte: u8) -> String {
    match ns {
        Namespace::Plain => format!("execute_{byte:02x}"),
        Namespace::Extended => format!("execute_cb_{byte:02x}"),
    }
}

/// One decode match arm: opcode key to disassembly descriptor.
///
/// The key is passed through as the first argument as well, so the
/// generated descriptor can mention it without a second lookup.
#[must_use]
pub fn decode_entry(ns: Namespace, byte: u8, record: &OpcodeRecord) -> String {
    let key = dispatch_key(ns, byte);
    format!(
        "{key} => Some(to_string({key}, \"{}\", {}, \"{}\", \"{}\")),",
        text::instr_text(record),
        record.length,
        text::cycles_text(record),
        record.group
    )
}

/// One execute match arm: opcode key to handler invocation.
///
/// The extended execute match is nested under the 0xCB prefix dispatch in
/// the consumer, so the key stays the secondary byte; the handler name
/// carries the namespace disambiguation.
#[must_use]
pub fn execute_entry(ns: Namespace, byte: u8) -> String {
    format!("0x{byte:02x} => {}(cpu),", handler_name(ns, byte))
}

/// One placeholder handler definition.
///
/// Every stub starts out unimplemented on purpose: it calls the shared
/// `op_unimplemented` marker, advances the program counter by the
/// instruction length, and accounts cycles. Branch-dependent durations get
/// a comment naming both values instead of a direct increment; the real
/// branch-aware accounting belongs to the hand-written implementation.
/// The closing brace carries the trailing annotation (instruction text and
/// flag effects) for whoever fills the stub in.
#[must_use]
pub fn execute_stub(ns: Namespace, byte: u8, record: &OpcodeRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("fn {}(cpu: &mut Cpu) {{\n", handler_name(ns, byte)));
    out.push_str("    op_unimplemented(cpu);\n");
    out.push_str(&format!("    cpu.advance_pc = {};\n", record.length));
    match record.cycles.as_slice() {
        [n] => out.push_str(&format!("    cpu.cycles += {n};\n")),
        [taken, not_taken] => out.push_str(&format!(
            "    // cycles: {taken} if branch taken, else {not_taken}\n"
        )),
        other => unreachable!("cycle counts validated during table construction: {other:?}"),
    }
    out.push_str(&format!(
        "}} // {} {}\n",
        text::instr_text(record),
        text::flags_annotation(record)
    ));
    out
}
