use anyhow::Result;

use super::super::args::TranslateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use super::resolve_config;
use crate::{Args, Plate};

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let config = resolve_config(&cmd.common)?;
    let args: Args = cmd.args.into_iter().collect();

    let result = Plate::with_config(config)
        .and_then(|plate| plate.translate(&cmd.key, cmd.target.as_deref(), cmd.count, &args));

    match result {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            report::print_error(&err);
            Ok(ExitStatus::Failure)
        }
    }
}
