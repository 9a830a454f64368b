// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! `portfolio-openapi --out <path>` renders the contract document;
//! `portfolio-openapi --check <path>` fails when a committed copy is stale.

use bijux_portfolio_api::{openapi_drift, openapi_spec};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

enum Mode {
    Write(PathBuf),
    Check(PathBuf),
}

fn parse_mode(mut args: impl Iterator<Item = String>) -> Result<Mode, String> {
    let usage = "usage: portfolio-openapi (--out <path> | --check <path>)";
    let flag = args.next().ok_or(usage)?;
    let path = args.next().map(PathBuf::from).ok_or(usage)?;
    match flag.as_str() {
        "--out" => Ok(Mode::Write(path)),
        "--check" => Ok(Mode::Check(path)),
        other => Err(format!("unknown flag {other}; {usage}")),
    }
}

fn render() -> Result<Vec<u8>, String> {
    let mut bytes = serde_json::to_vec_pretty(&openapi_spec())
        .map_err(|e| format!("encode openapi document: {e}"))?;
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_document(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("create {}: {e}", parent.display()))?;
    }
    fs::write(path, render()?).map_err(|e| format!("write {}: {e}", path.display()))?;
    println!("openapi document rendered to {}", path.display());
    Ok(())
}

fn check_document(path: &Path) -> Result<(), String> {
    let raw = fs::read(path).map_err(|e| format!("read {}: {e}", path.display()))?;
    let committed: Value = serde_json::from_slice(&raw)
        .map_err(|e| format!("{} is not JSON: {e}", path.display()))?;
    let drift = openapi_drift(&committed, &openapi_spec());
    if drift.is_empty() {
        println!("{} matches the served contract", path.display());
        return Ok(());
    }
    Err(format!(
        "{} is stale; regenerate with --out:\n  {}",
        path.display(),
        drift.join("\n  ")
    ))
}

fn main() -> Result<(), String> {
    match parse_mode(std::env::args().skip(1))? {
        Mode::Write(path) => write_document(&path),
        Mode::Check(path) => check_document(&path),
    }
}
