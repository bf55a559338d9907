use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::resolve_config;
use crate::Plate;

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let config = resolve_config(&cmd.common)?;
    let root = config.root.clone();

    let plate = match Plate::with_config(config) {
        Ok(plate) => plate,
        Err(err) => {
            report::print_error(&err);
            return Ok(ExitStatus::Failure);
        }
    };

    let warnings = plate.warnings();
    report::print_warnings(warnings);
    report::print_loaded(
        plate.locales().count(),
        plate.phrase_count(),
        warnings.len(),
        &root,
    );

    let status = ExitStatus::for_loaded(warnings.len(), cmd.deny_warnings);
    if status == ExitStatus::Failure {
        report::print_denied(warnings.len());
    }

    Ok(status)
}
