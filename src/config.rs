use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{PlateError, Result};

pub const CONFIG_FILE_NAME: &str = ".platerc.json";

/// Construction parameters of a [`Plate`](crate::Plate).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one `<locale>.json` file per locale.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Default locale used when a call names none.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Locale whose key set is canonical. Defaults to `locale`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Delimiter between plural forms.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_root() -> PathBuf {
    PathBuf::from("locales")
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_separator() -> String {
    "|".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            locale: default_locale(),
            fallback: None,
            separator: default_separator(),
        }
    }
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The effective fallback locale: `fallback` if set, `locale` otherwise.
    pub fn fallback_locale(&self) -> &str {
        self.fallback.as_deref().unwrap_or(&self.locale)
    }

    /// Validate configuration values.
    ///
    /// Locale codes are checked later, against the loaded locales.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(PlateError::InvalidConfig(
                "'separator' must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

pub fn default_config_json() -> anyhow::Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load the nearest `.platerc.json`, falling back to defaults.
///
/// A relative `root` in the file is resolved against the file's directory.
pub fn load_config(start_dir: &Path) -> anyhow::Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let mut config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            if config.root.is_relative()
                && let Some(dir) = path.parent()
            {
                config.root = dir.join(&config.root);
            }
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
