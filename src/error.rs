//! Error types for loading locales and resolving phrases.
//!
//! Every failure is a [`PlateError`] variant. Callers that only care about
//! the broad class of a failure can match on [`PlateError::kind`] instead of
//! the individual variants.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = PlateError> = std::result::Result<T, E>;

/// Broad classification of a [`PlateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLocale,
    LoadParseError,
    UnknownEmojiShortcode,
    KeySetMismatch,
    MissingPhraseKey,
    PluralIndexOutOfRange,
    MissingInterpolationValue,
    FormatSyntax,
    Io,
    Config,
}

#[derive(Error, Debug)]
pub enum PlateError {
    /// `choices` is the pre-rendered list of acceptable codes.
    #[error("Invalid locale code \"{code}\". Possible values are: {choices}")]
    InvalidLocale { code: String, choices: String },

    #[error("Error in file \"{file}\": {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("\"{key}\" in \"{locale}\" contains unknown emoji \"{shortcode}\"")]
    UnknownEmoji {
        key: String,
        locale: String,
        shortcode: String,
    },

    #[error("Missing translation key \"{key}\" from \"{locale}\"")]
    MissingTranslationKey { key: String, locale: String },

    #[error("The key \"{key}\" from \"{locale}\" does not exist in fallback locale \"{fallback}\"")]
    UnknownTranslationKey {
        key: String,
        locale: String,
        fallback: String,
    },

    #[error("Fallback locale \"{fallback}\" has no phrase file in \"{}\"", .root.display())]
    FallbackNotLoaded { fallback: String, root: PathBuf },

    #[error("Phrase key \"{key}\" does not exist")]
    MissingPhrase { key: String },

    #[error(
        "Phrase \"{key}\" has {available} plural form(s), but count {count} selects form {index}"
    )]
    PluralIndexOutOfRange {
        key: String,
        count: u64,
        index: usize,
        available: usize,
    },

    #[error("Missing interpolation value for key \"{name}\"")]
    MissingInterpolationValue { name: String },

    #[error("Malformed placeholder in phrase \"{key}\": {reason}")]
    FormatSyntax { key: String, reason: String },

    #[error("Locale directory \"{}\" does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("\"{}\" is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Failed to read \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PlateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlateError::InvalidLocale { .. } => ErrorKind::InvalidLocale,
            PlateError::Parse { .. } => ErrorKind::LoadParseError,
            PlateError::UnknownEmoji { .. } => ErrorKind::UnknownEmojiShortcode,
            PlateError::MissingTranslationKey { .. }
            | PlateError::UnknownTranslationKey { .. }
            | PlateError::FallbackNotLoaded { .. } => ErrorKind::KeySetMismatch,
            PlateError::MissingPhrase { .. } => ErrorKind::MissingPhraseKey,
            PlateError::PluralIndexOutOfRange { .. } => ErrorKind::PluralIndexOutOfRange,
            PlateError::MissingInterpolationValue { .. } => ErrorKind::MissingInterpolationValue,
            PlateError::FormatSyntax { .. } => ErrorKind::FormatSyntax,
            PlateError::RootNotFound(_)
            | PlateError::RootNotDirectory(_)
            | PlateError::Io { .. } => ErrorKind::Io,
            PlateError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    /// Builds an [`PlateError::InvalidLocale`] listing `choices` as
    /// `"code" (Display Name)` pairs.
    pub(crate) fn invalid_locale<'a>(
        code: &str,
        choices: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let choices = choices
            .into_iter()
            .map(|(code, name)| format!("\"{}\" ({})", code, name))
            .collect::<Vec<_>>()
            .join(", ");
        PlateError::InvalidLocale {
            code: code.to_string(),
            choices,
        }
    }
}
