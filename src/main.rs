// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line driver.
//!
//! One artifact mode per run, an orthogonal namespace switch, and an
//! optional table path. Anything unrecognized prints usage and generates
//! nothing.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use sm83_codegen::emit::{self, Artifact};
use sm83_codegen::fetch;
use sm83_codegen::table::{Namespace, OpcodeTable};

const USAGE: &str = "\
usage: sm83_codegen <decode|execute|stubs> [--prefixed] [table.json]

  decode      emit decode match arms (opcode -> disassembly descriptor)
  execute     emit execute match arms (opcode -> handler invocation)
  stubs       emit placeholder execute handlers
  --prefixed  emit for the 0xCB-prefixed namespace instead of the plain one
  table.json  opcode table path (default: opcodes.json; fetched when absent)
";

fn artifact_from_arg(arg: &str) -> Option<Artifact> {
    match arg {
        "decode" => Some(Artifact::DecodeEntries),
        "execute" => Some(Artifact::ExecuteEntries),
        "stubs" => Some(Artifact::ExecuteStubs),
        _ => None,
    }
}

/// What a run was asked to do. Anything unrecognized collapses to `Usage`,
/// which generates nothing and exits cleanly.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Run {
        artifact: Artifact,
        ns: Namespace,
        path: PathBuf,
    },
    Usage,
}

fn parse_args(args: &[String]) -> Selection {
    let mut artifact: Option<Artifact> = None;
    let mut ns = Namespace::Plain;
    let mut path: Option<PathBuf> = None;

    for arg in args {
        if arg == "--prefixed" {
            ns = Namespace::Extended;
        } else if arg.starts_with('-') {
            return Selection::Usage;
        } else if artifact.is_none() {
            match artifact_from_arg(arg) {
                Some(a) => artifact = Some(a),
                None => return Selection::Usage,
            }
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Selection::Usage;
        }
    }
    match artifact {
        Some(artifact) => Selection::Run {
            artifact,
            ns,
            path: path.unwrap_or_else(|| PathBuf::from("opcodes.json")),
        },
        None => Selection::Usage,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Selection::Run { artifact, ns, path } = parse_args(&args) else {
        print!("{USAGE}");
        return Ok(());
    };
    let json = fetch::load_or_fetch(&path, fetch::OPCODES_URL)?;
    let table = OpcodeTable::from_json(&json)?;
    debug!(
        "table loaded: {} plain records, {} extended records",
        table.records(Namespace::Plain).len(),
        table.records(Namespace::Extended).len()
    );

    info!("emitting {artifact:?} for the {ns:?} namespace");
    print!("{}", emit::emit(&table, ns, artifact));
    Ok(())
}
