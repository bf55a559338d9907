//! Plate - JSON phrase files with fallback, interpolation and pluralization
//!
//! Plate loads one `<locale>.json` file per locale from a directory, checks
//! that every locale has exactly the keys of the fallback locale, and
//! resolves phrases by key. Phrases may contain `{name}` placeholders,
//! `|`-separated plural forms and `:EMOJI_NAME:` shortcodes (substituted at
//! load time).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Construction parameters and `.platerc.json` loading
//! - `emojipedia`: Shortcode to emoji glyph table
//! - `error`: Error type and classification
//! - `languages`: Supported locale codes and display names
//! - `loader`: Locale directory scanning and validation
//! - `resolver`: Fallback, pluralization and interpolation
//! - `store`: Loaded phrase tables
//! - `translator`: The `Plate` facade and bound translators

pub mod cli;
pub mod config;
pub mod emojipedia;
pub mod error;
pub mod languages;
pub mod loader;
pub mod resolver;
pub mod store;
pub mod translator;

pub use config::Config;
pub use error::{ErrorKind, PlateError, Result};
pub use loader::LoadWarning;
pub use resolver::Args;
pub use translator::{Plate, Translator};
