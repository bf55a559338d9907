use std::sync::LazyLock;

use regex::Regex;

use super::LoadWarning;
use crate::emojipedia;
use crate::error::{PlateError, Result};

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\w+):").expect("shortcode regex is valid"));

/// Replaces every `:NAME:` shortcode in `value` with its glyph.
///
/// Names are looked up upper-cased; a name written in any other case is
/// still substituted but produces a [`LoadWarning::LowercaseEmoji`]. Each
/// spelling is replaced on its own, so `:fire:` and `:FIRE:` in the same
/// value are two substitutions.
pub fn substitute_emoji(
    value: &str,
    key: &str,
    locale: &str,
    warnings: &mut Vec<LoadWarning>,
) -> Result<String> {
    // Spellings in order of first appearance
    let mut shortcodes: Vec<&str> = Vec::new();
    for captures in SHORTCODE_REGEX.captures_iter(value) {
        let name = captures.get(1).map_or("", |m| m.as_str());
        if !shortcodes.contains(&name) {
            shortcodes.push(name);
        }
    }

    let mut result = value.to_string();
    for name in shortcodes {
        let upper = name.to_uppercase();

        if name != upper {
            warnings.push(LoadWarning::lowercase_emoji(name, key, locale));
        }

        let Some(glyph) = emojipedia::glyph(&upper) else {
            return Err(PlateError::UnknownEmoji {
                key: key.to_string(),
                locale: locale.to_string(),
                shortcode: name.to_string(),
            });
        };

        result = result.replace(&format!(":{}:", name), glyph);
    }

    Ok(result)
}
