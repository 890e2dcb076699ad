// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `sm83_codegen`: dispatch-table code generator for an SM83 (Game Boy) CPU
//! emulator.
//!
//! The generator consumes the upstream Game Boy opcode table (a JSON document
//! with `unprefixed` and `cbprefixed` sections) and renders three kinds of
//! source fragments for the emulator's instruction dispatcher:
//!
//! - decode entries, one match arm per opcode mapping the opcode key to a
//!   disassembly descriptor call,
//! - execute entries, one match arm per opcode mapping the opcode key to a
//!   handler invocation,
//! - execute stubs, placeholder handler bodies to be filled in by hand.
//!
//! Output is plain text on stdout, meant to be pasted into the dispatcher
//! source. This is a build-time tool; it never executes instructions.

pub mod cycles;
pub mod emit;
pub mod fetch;
pub mod table;
pub mod text;
