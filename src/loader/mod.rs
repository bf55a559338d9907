//! Locale loading pipeline.
//!
//! Loading runs once, when a [`Plate`](crate::Plate) is built:
//!
//! 1. Scan the locale directory for `<code>.json` files (other files are
//!    skipped with a warning).
//! 2. Parse each file, join fragment lists and substitute emoji shortcodes.
//! 3. Drop supported locales that have no file.
//! 4. Check every locale's key set against the fallback locale.
//!
//! Any error aborts the whole load; warnings are collected and also logged.
//!
//! ## Module Structure
//!
//! - `json`: Phrase file parsing
//! - `emoji`: `:NAME:` shortcode substitution
//! - `validate`: Key-set checks against the fallback locale

pub mod emoji;
pub mod json;
pub mod validate;

use std::{collections::BTreeMap, fmt, fs, path::Path};

use crate::error::{PlateError, Result};
use crate::languages;
use crate::store::{LocaleEntry, LocaleStore, PhraseTable};

pub use emoji::substitute_emoji;
pub use json::{RawPhrase, extract_locale, parse_json_file, parse_phrases};
pub use validate::check_key_sets;

const PHRASE_FILE_EXTENSION: &str = ".json";

/// A non-fatal problem found while loading locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A file in the locale directory without the `.json` extension.
    SkippedFile { file: String },
    /// A shortcode that is not written in upper case.
    LowercaseEmoji {
        shortcode: String,
        key: String,
        locale: String,
    },
    EmptyPhrase { key: String, locale: String },
}

impl LoadWarning {
    pub fn skipped_file(file: &str) -> Self {
        tracing::warn!(file, "skipping unknown file");
        LoadWarning::SkippedFile {
            file: file.to_string(),
        }
    }

    pub fn lowercase_emoji(shortcode: &str, key: &str, locale: &str) -> Self {
        tracing::warn!(shortcode, key, locale, "emoji shortcode should be upper case");
        LoadWarning::LowercaseEmoji {
            shortcode: shortcode.to_string(),
            key: key.to_string(),
            locale: locale.to_string(),
        }
    }

    pub fn empty_phrase(key: &str, locale: &str) -> Self {
        tracing::warn!(key, locale, "empty translation phrase");
        LoadWarning::EmptyPhrase {
            key: key.to_string(),
            locale: locale.to_string(),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::SkippedFile { file } => write!(f, "Skipping unknown file \"{}\"", file),
            LoadWarning::LowercaseEmoji {
                shortcode,
                key,
                locale,
            } => write!(
                f,
                "Emoji \"{}\" from \"{}\" in \"{}\" should be in upper case: \"{}\"",
                shortcode,
                key,
                locale,
                shortcode.to_uppercase()
            ),
            LoadWarning::EmptyPhrase { key, locale } => write!(
                f,
                "Empty translation phrase for key \"{}\" in \"{}\"",
                key, locale
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadResult {
    pub store: LocaleStore,
    pub warnings: Vec<LoadWarning>,
}

/// Loads every phrase file under `root` and validates the result against
/// the `fallback` locale.
pub fn load_locales(root: impl AsRef<Path>, fallback: &str) -> Result<LoadResult> {
    let root = root.as_ref();

    if !languages::is_supported(fallback) {
        return Err(PlateError::invalid_locale(fallback, languages::all()));
    }

    let mut warnings = Vec::new();
    let mut tables = scan_locale_files(root, &mut warnings)?;

    let mut store = LocaleStore::new();
    for (code, name) in languages::all() {
        match tables.remove(code) {
            Some(phrases) => store.insert(code, LocaleEntry::new(name, phrases)),
            None => tracing::debug!(locale = code, "no phrase file, locale unsupported"),
        }
    }

    check_key_sets(&store, fallback, root, &mut warnings)?;

    tracing::debug!(
        root = %root.display(),
        locales = store.len(),
        warnings = warnings.len(),
        "locales loaded"
    );

    Ok(LoadResult { store, warnings })
}

/// Parses every phrase file directly under `root`, in file-name order.
fn scan_locale_files(
    root: &Path,
    warnings: &mut Vec<LoadWarning>,
) -> Result<BTreeMap<String, PhraseTable>> {
    if !root.exists() {
        return Err(PlateError::RootNotFound(root.to_path_buf()));
    }

    if !root.is_dir() {
        return Err(PlateError::RootNotDirectory(root.to_path_buf()));
    }

    let read_error = |source| PlateError::Io {
        path: root.to_path_buf(),
        source,
    };
    let mut paths = fs::read_dir(root)
        .map_err(read_error)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_error)?;
    paths.sort();

    let mut tables = BTreeMap::new();
    for path in paths {
        let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
            continue;
        };

        if !file_name.ends_with(PHRASE_FILE_EXTENSION) {
            warnings.push(LoadWarning::skipped_file(&file_name));
            continue;
        }

        let locale = extract_locale(&file_name);
        if !languages::is_supported(locale) {
            return Err(PlateError::invalid_locale(locale, languages::all()));
        }

        let mut phrases = parse_json_file(&path)?;
        for (key, value) in phrases.iter_mut() {
            *value = substitute_emoji(value, key, locale, warnings)?;
        }

        tracing::debug!(locale, phrases = phrases.len(), "loaded phrase file");
        tables.insert(locale.to_string(), phrases);
    }

    Ok(tables)
}
