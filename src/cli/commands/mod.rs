pub mod check;
pub mod init;
pub mod locales;
pub mod translate;

use std::env;

use anyhow::Result;

use super::args::CommonArgs;
use crate::config::{Config, load_config};

/// Load `.platerc.json` from the working directory upwards and apply the
/// command-line overrides.
pub fn resolve_config(common: &CommonArgs) -> Result<Config> {
    let start_dir = env::current_dir()?;
    let loaded = load_config(&start_dir)?;
    if loaded.from_file {
        tracing::debug!(root = %loaded.config.root.display(), "using config file");
    }

    let config = common.apply(loaded.config);
    config.validate()?;
    Ok(config)
}
