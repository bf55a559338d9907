//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Load a locale directory and report warnings and errors
//! - `translate`: Resolve a single phrase
//! - `locales`: List loaded (or all supported) locales
//! - `init`: Initialize a plate configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all loading commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locale directory (overrides config file)
    #[arg(long, env = "PLATE_ROOT")]
    pub root: Option<PathBuf>,

    /// Default locale (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Fallback locale (overrides config file)
    #[arg(long)]
    pub fallback: Option<String>,

    /// Plural form separator (overrides config file)
    #[arg(long)]
    pub separator: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(fallback) = &self.fallback {
            config.fallback = Some(fallback.clone());
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        config
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit with a failure status when loading produced warnings
    #[arg(long)]
    pub deny_warnings: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Phrase key to translate
    pub key: String,

    /// Target locale (default: the configured locale)
    #[arg(long = "in", value_name = "LOCALE")]
    pub target: Option<String>,

    /// Count used to pick a plural form
    #[arg(long)]
    pub count: Option<u64>,

    /// Interpolation value, can be specified multiple times: --arg name=Ann
    #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    /// List every supported locale, not only the loaded ones
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the locale files and report problems
    Check(CheckCommand),
    /// Translate a phrase key
    Translate(TranslateCommand),
    /// List locales
    Locales(LocalesCommand),
    /// Initialize a new .platerc.json configuration file
    Init,
}

fn parse_key_value(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got \"{}\"", value)),
    }
}
