// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Machine-cycle normalization.
//!
//! The upstream table states durations in bus cycles (4 MHz steps); the
//! emulator accounts in machine cycles (1 MHz steps). Both namespaces are
//! normalized by the same divisor.

/// Bus cycles per machine cycle on the SM83.
pub const BUS_CYCLES_PER_MACHINE_CYCLE: u32 = 4;

/// Converts raw bus-cycle counts to machine cycles, in place.
///
/// Runs exactly once per record, during table construction. Not idempotent:
/// a second application under-counts, so emitters must never call it.
pub fn to_machine_cycles(cycles: &mut [u32]) {
    for c in cycles.iter_mut() {
        *c /= BUS_CYCLES_PER_MACHINE_CYCLE;
    }
}
