use anyhow::Result;

use super::super::args::LocalesCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::resolve_config;
use crate::{Plate, languages};

pub fn locales(cmd: LocalesCommand) -> Result<ExitStatus> {
    if cmd.all {
        print_locales(languages::all());
        return Ok(ExitStatus::Success);
    }

    let config = resolve_config(&cmd.common)?;
    match Plate::with_config(config) {
        Ok(plate) => {
            print_locales(plate.locales());
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            report::print_error(&err);
            Ok(ExitStatus::Failure)
        }
    }
}

fn print_locales<'a>(locales: impl Iterator<Item = (&'a str, &'a str)>) {
    for (code, name) in locales {
        println!("{:<7} {}", code, name);
    }
}
