//! In-memory phrase tables, keyed by locale code.
//!
//! A [`LocaleStore`] is produced once by the loader and never mutated
//! afterwards; every locale it holds has a phrase table.

use std::collections::BTreeMap;

use crate::error::PlateError;

/// Phrase key to final phrase text (fragments joined, emoji substituted).
pub type PhraseTable = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub name: &'static str,
    pub phrases: PhraseTable,
}

impl LocaleEntry {
    pub fn new(name: &'static str, phrases: PhraseTable) -> Self {
        Self { name, phrases }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStore {
    locales: BTreeMap<String, LocaleEntry>,
}

impl LocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, entry: LocaleEntry) {
        self.locales.insert(code.into(), entry);
    }

    pub fn get(&self, code: &str) -> Option<&LocaleEntry> {
        self.locales.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Returns the entry for `code`, or an `InvalidLocale` error listing the
    /// loaded locales.
    pub fn entry(&self, code: &str) -> Result<&LocaleEntry, PlateError> {
        self.get(code)
            .ok_or_else(|| PlateError::invalid_locale(code, self.names()))
    }

    /// Iterates over `(code, display name)` pairs in code order.
    pub fn names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.locales
            .iter()
            .map(|(code, entry)| (code.as_str(), entry.name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleEntry)> {
        self.locales.iter().map(|(code, entry)| (code.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
