use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::error::{PlateError, Result};
use crate::store::PhraseTable;

/// A phrase value as written in a locale file.
///
/// Long phrases may be split into a list of fragments, which are joined
/// with no separator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawPhrase {
    Text(String),
    Fragments(Vec<String>),
}

impl RawPhrase {
    pub fn into_text(self) -> String {
        match self {
            RawPhrase::Text(text) => text,
            RawPhrase::Fragments(fragments) => fragments.concat(),
        }
    }
}

/// Parses a flat `key -> phrase` JSON document.
///
/// `file_name` only appears in error messages. Content that is not valid
/// UTF-8 is a parse error like any other malformed document.
pub fn parse_phrases(content: impl AsRef<[u8]>, file_name: &str) -> Result<PhraseTable> {
    let raw: BTreeMap<String, RawPhrase> =
        serde_json::from_slice(content.as_ref()).map_err(|source| PlateError::Parse {
            file: file_name.to_string(),
            source,
        })?;

    Ok(raw
        .into_iter()
        .map(|(key, phrase)| (key, phrase.into_text()))
        .collect())
}

pub fn parse_json_file(path: &Path) -> Result<PhraseTable> {
    let content = fs::read(path).map_err(|source| PlateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_phrases(content, &file_name)
}

/// Extracts the locale code from a phrase file name: everything before the
/// first `.`.
///
/// Examples:
/// - "en_US.json" -> "en_US"
/// - "it_IT.old.json" -> "it_IT"
pub fn extract_locale(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
