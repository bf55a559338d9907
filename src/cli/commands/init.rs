use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Writes a default `.platerc.json` into the working directory.
///
/// An existing file is never overwritten.
pub fn init() -> Result<ExitStatus> {
    let path = Path::new(CONFIG_FILE_NAME);
    let content = default_config_json()?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            report::print_config_exists(path);
            return Ok(ExitStatus::Failure);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to create {}", path.display()));
        }
    };

    writeln!(file, "{}", content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote default config");

    report::print_created(path);
    Ok(ExitStatus::Success)
}
