// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instruction text assembly and the small formatting helpers shared by the
//! emitters.

use crate::table::OpcodeRecord;

/// Assembles the canonical human-readable instruction text.
///
/// Mnemonic, then each present operand preceded by a single space. Absent
/// operands are skipped entirely, never rendered as empty placeholders, so
/// the text carries no trailing separator.
#[must_use]
pub fn instr_text(record: &OpcodeRecord) -> String {
    let mut out = record.mnemonic.clone();
    if let Some(op1) = &record.operand1 {
        out.push(' ');
        out.push_str(op1);
    }
    if let Some(op2) = &record.operand2 {
        out.push(' ');
        out.push_str(op2);
    }
    out
}

/// Renders the four flag-effect descriptors, e.g. `[-/-/-/-]` or `[Z/0/1/C]`.
#[must_use]
pub fn flags_annotation(record: &OpcodeRecord) -> String {
    format!("[{}]", record.flags.join("/"))
}

/// Renders the machine-cycle list, e.g. `[1]` or `[3, 2]`.
#[must_use]
pub fn cycles_text(record: &OpcodeRecord) -> String {
    let parts: Vec<String> = record.cycles.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
