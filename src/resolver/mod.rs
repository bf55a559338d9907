//! Phrase resolution: locale fallback, pluralization and interpolation.
//!
//! Resolution is read-only. A [`PhraseResolver`] can be shared between
//! threads and every call with the same arguments returns the same result.

pub mod args;
pub mod interpolate;
pub mod plural;

use crate::error::{PlateError, Result};
use crate::store::LocaleStore;

pub use args::Args;
pub use interpolate::interpolate;
pub use plural::{plural_index, select_plural_form};

#[derive(Debug, Clone)]
pub struct PhraseResolver {
    store: LocaleStore,
    fallback: String,
    separator: String,
}

impl PhraseResolver {
    /// `store` must already have passed the key-set checks against `fallback`.
    pub fn new(store: LocaleStore, fallback: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            store,
            fallback: fallback.into(),
            separator: separator.into(),
        }
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Fails with `InvalidLocale` unless `locale` was loaded.
    pub fn check_locale(&self, locale: &str) -> Result<()> {
        self.store.entry(locale).map(|_| ())
    }

    /// Returns the raw phrase for `key` in `locale`, falling back to the
    /// fallback locale when it is absent or empty.
    pub fn phrase(&self, key: &str, locale: &str) -> Result<&str> {
        let entry = self.store.entry(locale)?;

        match entry.get(key) {
            Some(phrase) if !phrase.is_empty() => Ok(phrase),
            _ => self
                .store
                .get(&self.fallback)
                .and_then(|fallback| fallback.get(key))
                .ok_or_else(|| PlateError::MissingPhrase {
                    key: key.to_string(),
                }),
        }
    }

    /// Resolves `key` in `locale` into its final text.
    ///
    /// With a `count`, the phrase is split into plural forms and the form
    /// picked by [`plural_index`] is used, with `{count}` bound to `count`.
    pub fn resolve(&self, key: &str, locale: &str, count: Option<u64>, args: &Args) -> Result<String> {
        let phrase = self.phrase(key, locale)?;

        let template = match count {
            Some(count) => select_plural_form(phrase, &self.separator, key, count)?,
            None => phrase,
        };

        interpolate(template, key, args, count)
    }
}
