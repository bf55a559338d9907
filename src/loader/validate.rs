use std::path::Path;

use super::LoadWarning;
use crate::error::{PlateError, Result};
use crate::store::LocaleStore;

/// Checks every loaded locale against the fallback locale's key set.
///
/// A key missing from a locale, or present in a locale but not in the
/// fallback, is fatal. Empty phrases are reported as warnings. The first
/// offending key aborts the check.
pub fn check_key_sets(
    store: &LocaleStore,
    fallback: &str,
    root: &Path,
    warnings: &mut Vec<LoadWarning>,
) -> Result<()> {
    let Some(canonical) = store.get(fallback) else {
        return Err(PlateError::FallbackNotLoaded {
            fallback: fallback.to_string(),
            root: root.to_path_buf(),
        });
    };

    for (locale, entry) in store.iter() {
        for key in canonical.phrases.keys() {
            match entry.get(key) {
                None => {
                    return Err(PlateError::MissingTranslationKey {
                        key: key.clone(),
                        locale: locale.to_string(),
                    });
                }
                Some("") => warnings.push(LoadWarning::empty_phrase(key, locale)),
                Some(_) => {}
            }
        }

        if let Some(key) = entry
            .phrases
            .keys()
            .find(|key| !canonical.phrases.contains_key(*key))
        {
            return Err(PlateError::UnknownTranslationKey {
                key: key.clone(),
                locale: locale.to_string(),
                fallback: fallback.to_string(),
            });
        }
    }

    Ok(())
}
