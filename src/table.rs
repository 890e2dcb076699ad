// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opcode table model: deserialization, validation, and ordering.
//!
//! The upstream JSON maps address keys to records with arbitrary iteration
//! order. The in-memory table replaces that with an explicit ordered
//! association sorted by the numeric opcode byte, so emission order is a
//! documented contract rather than a loader accident.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::cycles;

/// One opcode namespace.
///
/// Extended opcodes are reached through the reserved 0xCB prefix byte and
/// form a second 256-entry space, disjoint from the plain namespace even
/// where the secondary byte values coincide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Namespace {
    Plain,
    Extended,
}

/// One instruction definition from the opcode table.
#[derive(Deserialize, Clone, Debug)]
pub struct OpcodeRecord {
    /// Opcode key as a hex literal, e.g. `"0x20"`. Authoritative over the
    /// JSON map key the record was stored under.
    pub addr: String,
    pub mnemonic: String,
    #[serde(default)]
    pub operand1: Option<String>,
    #[serde(default)]
    pub operand2: Option<String>,
    /// Instruction length in bytes.
    pub length: u8,
    /// One entry for unconditional instructions, two (taken, not taken) for
    /// branch-dependent ones. Bus cycles in the source document; machine
    /// cycles after table construction.
    pub cycles: Vec<u32>,
    /// Exactly four flag-effect descriptors, positionally Z, N, H, C.
    pub flags: Vec<String>,
    /// Category tag used for disassembly grouping.
    pub group: String,
}

#[derive(Deserialize)]
struct RawTable {
    unprefixed: HashMap<String, OpcodeRecord>,
    cbprefixed: HashMap<String, OpcodeRecord>,
}

/// The full opcode table: validated, normalized to machine cycles, and
/// sorted by opcode byte within each namespace.
#[derive(Debug)]
pub struct OpcodeTable {
    plain: Vec<(u8, OpcodeRecord)>,
    extended: Vec<(u8, OpcodeRecord)>,
}

impl OpcodeTable {
    /// Parses and validates the upstream JSON document.
    ///
    /// The whole table is validated before anything is emitted, so a
    /// malformed record can never leave a truncated artifact set behind.
    /// Cycle counts are converted to machine cycles here, exactly once;
    /// emitters observe normalized values and never re-normalize.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(json).context("parse opcode table JSON")?;
        Ok(Self {
            plain: build_namespace(raw.unprefixed, Namespace::Plain)?,
            extended: build_namespace(raw.cbprefixed, Namespace::Extended)?,
        })
    }

    /// Records of one namespace in ascending opcode-byte order.
    #[must_use]
    pub fn records(&self, ns: Namespace) -> &[(u8, OpcodeRecord)] {
        match ns {
            Namespace::Plain => &self.plain,
            Namespace::Extended => &self.extended,
        }
    }
}

pub(crate) fn parse_u8_hex(s: &str) -> Result<u8> {
    let s = s.trim();
    let raw = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(raw, 16).with_context(|| format!("invalid opcode address '{s}'"))
}

fn build_namespace(
    records: HashMap<String, OpcodeRecord>,
    ns: Namespace,
) -> Result<Vec<(u8, OpcodeRecord)>> {
    let mut ops: Vec<(u8, OpcodeRecord)> = Vec::with_capacity(records.len());
    for mut record in records.into_values() {
        validate_record(&record, ns)?;
        let byte = parse_u8_hex(&record.addr)
            .with_context(|| format!("{ns:?} namespace record '{}'", record.mnemonic))?;
        cycles::to_machine_cycles(&mut record.cycles);
        ops.push((byte, record));
    }
    ops.sort_by(|(b0, _), (b1, _)| b0.cmp(b1));

    for w in ops.windows(2) {
        let (b0, r0) = &w[0];
        let (b1, r1) = &w[1];
        if b0 == b1 {
            bail!(
                "duplicate opcode address {} in {ns:?} namespace: {} and {}",
                r0.addr,
                r0.mnemonic,
                r1.mnemonic
            );
        }
    }
    Ok(ops)
}

fn validate_record(record: &OpcodeRecord, ns: Namespace) -> Result<()> {
    if record.mnemonic.is_empty() {
        bail!("opcode {} ({ns:?}) has an empty mnemonic", record.addr);
    }
    if record.length == 0 {
        bail!("opcode {} ({ns:?}) has zero length", record.addr);
    }
    if record.cycles.is_empty() || record.cycles.len() > 2 {
        bail!(
            "opcode {} ({ns:?}) has {} cycle counts (expected 1 or 2)",
            record.addr,
            record.cycles.len()
        );
    }
    if record.flags.len() != 4 {
        bail!(
            "opcode {} ({ns:?}) has {} flag descriptors (expected 4)",
            record.addr,
            record.flags.len()
        );
    }
    Ok(())
}
