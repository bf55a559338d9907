//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: One handler per subcommand
//! - `exit_status`: Process exit status
//! - `report`: Colored output for warnings and errors

mod args;
mod commands;
mod exit_status;
mod report;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use args::{Arguments, CheckCommand, Command, CommonArgs, LocalesCommand, TranslateCommand};
pub use exit_status::ExitStatus;

pub const LOG_ENV: &str = "PLATE_LOG";

/// Install the stderr log subscriber.
///
/// Load warnings are already printed by the report, so logging is off
/// unless `PLATE_LOG` asks for it or `--verbose` is set.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "plate=debug" } else { "off" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose());

    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Check(cmd)) => commands::check::check(cmd),
        Some(Command::Translate(cmd)) => commands::translate::translate(cmd),
        Some(Command::Locales(cmd)) => commands::locales::locales(cmd),
        Some(Command::Init) => commands::init::init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
