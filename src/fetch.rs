// Copyright 2026 the SM83 Codegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opcode table acquisition: fetch-if-absent with a local file cache.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

/// Upstream source of the opcode table.
pub const OPCODES_URL: &str =
    "https://raw.githubusercontent.com/lmmendes/game-boy-opcodes/master/opcodes.json";

/// Returns the opcode table JSON, downloading it first if `path` is absent.
///
/// One blocking fetch, no retry; a failed fetch aborts the run before any
/// record is processed.
pub fn load_or_fetch(path: &Path, url: &str) -> Result<String> {
    if path.exists() {
        return fs::read_to_string(path).with_context(|| format!("read {}", path.display()));
    }

    info!("no {} present, downloading the latest version", path.display());
    let response = reqwest::blocking::get(url).with_context(|| format!("fetch {url}"))?;
    if !response.status().is_success() {
        bail!("fetch {url}: HTTP {}", response.status());
    }
    let body = response
        .text()
        .with_context(|| format!("read body of {url}"))?;
    fs::write(path, &body).with_context(|| format!("write {}", path.display()))?;
    Ok(body)
}
