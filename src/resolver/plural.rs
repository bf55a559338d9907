use crate::error::{PlateError, Result};

/// Index of the plural form used for `count`.
///
/// Forms are positional: 0, 1 and 2 pick the form of the same index, any
/// larger count picks form 2. There are no per-locale plural rules.
pub fn plural_index(count: u64) -> usize {
    if count < 3 { count as usize } else { 2 }
}

/// Splits `phrase` on `separator` and returns the trimmed form for `count`.
pub fn select_plural_form<'a>(
    phrase: &'a str,
    separator: &str,
    key: &str,
    count: u64,
) -> Result<&'a str> {
    let forms: Vec<&str> = phrase.split(separator).map(str::trim).collect();
    let index = plural_index(count);

    forms
        .get(index)
        .copied()
        .ok_or_else(|| PlateError::PluralIndexOutOfRange {
            key: key.to_string(),
            count,
            index,
            available: forms.len(),
        })
}
