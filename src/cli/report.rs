//! Report formatting and printing utilities.
//!
//! Separate from the library so that plate can be used without printing
//! side effects.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::error::{ErrorKind, PlateError};
use crate::loader::LoadWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print load warnings to stdout.
pub fn print_warnings(warnings: &[LoadWarning]) {
    print_warnings_to(warnings, &mut io::stdout().lock());
}

/// Print load warnings to a custom writer.
pub fn print_warnings_to<W: Write>(warnings: &[LoadWarning], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

/// Print a failed load or resolution to stderr.
pub fn print_error(err: &PlateError) {
    print_error_to(err, &mut io::stderr().lock());
}

/// Print an error, with a hint for the common cases, to a custom writer.
pub fn print_error_to<W: Write>(err: &PlateError, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), err);

    if let Some(hint) = hint(err) {
        write_hint(writer, hint);
    }
}

/// Print the refusal to overwrite an existing config file to stderr.
pub fn print_config_exists(path: &Path) {
    print_config_exists_to(path, &mut io::stderr().lock());
}

pub fn print_config_exists_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} already exists",
        "error:".bold().red(),
        path.display()
    );
    write_hint(writer, "edit the existing file, or delete it to start over");
}

/// Print the success line for a newly written config file.
pub fn print_created(path: &Path) {
    print_created_to(path, &mut io::stdout().lock());
}

pub fn print_created_to<W: Write>(path: &Path, writer: &mut W) {
    let summary = format!("Created {}", path.display());
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), summary.green());
}

fn write_hint<W: Write>(writer: &mut W, hint: &str) {
    let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
}

/// Print the outcome of a successful load.
pub fn print_loaded(locales: usize, phrases: usize, warnings: usize, root: &Path) {
    print_loaded_to(locales, phrases, warnings, root, &mut io::stdout().lock());
}

pub fn print_loaded_to<W: Write>(
    locales: usize,
    phrases: usize,
    warnings: usize,
    root: &Path,
    writer: &mut W,
) {
    let summary = format!(
        "Loaded {} {} with {} {} from {}",
        locales,
        if locales == 1 { "locale" } else { "locales" },
        phrases,
        if phrases == 1 { "phrase" } else { "phrases" },
        root.display()
    );

    if warnings == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), summary.green());
    } else {
        let _ = writeln!(
            writer,
            "\n{} {} ({} {})",
            SUCCESS_MARK.green(),
            summary,
            warnings,
            if warnings == 1 { "warning" } else { "warnings" }.yellow()
        );
    }
}

/// Print the failure line used when `--deny-warnings` rejects a load.
pub fn print_denied(warnings: usize) {
    print_denied_to(warnings, &mut io::stdout().lock());
}

pub fn print_denied_to<W: Write>(warnings: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "\n{} {} {} denied",
        FAILURE_MARK.red(),
        warnings,
        if warnings == 1 { "warning" } else { "warnings" }
    );
}

fn hint(err: &PlateError) -> Option<&'static str> {
    match err.kind() {
        ErrorKind::KeySetMismatch => {
            Some("every locale file must contain exactly the keys of the fallback locale")
        }
        ErrorKind::UnknownEmojiShortcode => Some("shortcodes are written as :UPPER_CASE_NAME:"),
        ErrorKind::PluralIndexOutOfRange => {
            Some("plural phrases need one form per count 0, 1 and 2 or more")
        }
        _ => None,
    }
}
