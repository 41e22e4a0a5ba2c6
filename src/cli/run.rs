//! Command flow for the single check operation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::core::classify;
use crate::report;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let Some(file) = args.file else {
        eprintln!("Tell me which file to check.");
        return Ok(ExitStatus::Error);
    };

    let path = resolve_path(&file);
    if !path.exists() {
        eprintln!("File not exists: {}", path.display());
        return Ok(ExitStatus::Error);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let outcome = classify(&content);
    report::print_report(&outcome);

    Ok(ExitStatus::Success)
}

/// Resolve the file argument: an existing path (absolute or relative to the
/// working directory) is used as-is; anything else is looked up next to the
/// running executable.
fn resolve_path(file: &Path) -> PathBuf {
    if file.exists() {
        return file.to_path_buf();
    }

    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(file),
            None => file.to_path_buf(),
        },
        Err(_) => file.to_path_buf(),
    }
}
