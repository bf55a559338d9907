//! The [`Plate`] entry point and locale-bound [`Translator`]s.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::loader::{LoadWarning, load_locales};
use crate::resolver::{Args, PhraseResolver};

/// Loaded phrase tables plus a current default locale.
///
/// # Examples
///
/// ```no_run
/// use plate::{Args, Config, Plate};
///
/// let mut plate = Plate::with_config(Config::new("locales").with_locale("en_US"))?;
/// let hello = plate.translate("hello", None, None, &Args::new().with("name", "Ann"))?;
///
/// plate.set_locale("it_IT")?;
/// let items = plate.translate("items", None, Some(3), &Args::new())?;
/// # Ok::<(), plate::PlateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Plate {
    resolver: Arc<PhraseResolver>,
    locale: String,
    warnings: Vec<LoadWarning>,
}

impl Plate {
    /// Loads `locales/` with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let fallback = config.fallback_locale().to_string();
        let result = load_locales(&config.root, &fallback)?;
        let resolver = PhraseResolver::new(result.store, fallback, config.separator);
        resolver.check_locale(&config.locale)?;

        Ok(Self {
            resolver: Arc::new(resolver),
            locale: config.locale,
            warnings: result.warnings,
        })
    }

    /// The current default locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback(&self) -> &str {
        self.resolver.fallback()
    }

    pub fn separator(&self) -> &str {
        self.resolver.separator()
    }

    /// Loaded locales as `(code, display name)`, in code order.
    pub fn locales(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resolver.store().names()
    }

    /// Number of phrase keys, which every loaded locale shares.
    pub fn phrase_count(&self) -> usize {
        self.resolver
            .store()
            .get(self.fallback())
            .map_or(0, |entry| entry.len())
    }

    /// Whether `key` is part of the fallback locale's key set.
    pub fn contains(&self, key: &str) -> bool {
        self.resolver
            .store()
            .get(self.fallback())
            .is_some_and(|entry| entry.get(key).is_some())
    }

    /// Warnings collected while loading the locale files.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Changes the default locale. An unknown code leaves it unchanged.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        self.resolver.check_locale(locale)?;
        self.locale = locale.to_string();
        Ok(())
    }

    /// Returns a translator fixed to `locale`.
    ///
    /// The translator is independent of later [`Plate::set_locale`] calls.
    pub fn translator(&self, locale: &str) -> Result<Translator> {
        self.resolver.check_locale(locale)?;
        Ok(Translator {
            resolver: Arc::clone(&self.resolver),
            locale: locale.to_string(),
        })
    }

    /// Translates `key` into `locale`, or into the default locale when
    /// `locale` is `None`.
    pub fn translate(
        &self,
        key: &str,
        locale: Option<&str>,
        count: Option<u64>,
        args: &Args,
    ) -> Result<String> {
        let locale = locale.unwrap_or(self.locale.as_str());
        self.resolver.resolve(key, locale, count, args)
    }
}

/// A translator bound to one locale, see [`Plate::translator`].
#[derive(Debug, Clone)]
pub struct Translator {
    resolver: Arc<PhraseResolver>,
    locale: String,
}

impl Translator {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn translate(&self, key: &str, count: Option<u64>, args: &Args) -> Result<String> {
        self.resolver.resolve(key, &self.locale, count, args)
    }
}
