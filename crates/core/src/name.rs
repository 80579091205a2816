//! Color name normalization.
//!
//! Catalog keys are lowercase with `_` as the word separator. User input may
//! use spaces (or any mix of whitespace) instead; both spellings resolve to
//! the same key.

/// Number of brightness variants generated per principal hue.
pub const SHADE_COUNT: u8 = 5;

/// Shade registered both as `<hue>_3` and as the bare `<hue>` name.
pub const BASE_SHADE: u8 = 3;

/// Normalizes a color name to catalog key form.
///
/// Trims, lowercases, and collapses each run of whitespace or underscores
/// into a single `_`.
pub fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Builds the shade-qualified key `<hue>_<shade>`.
pub fn shade_key(hue: &str, shade: u8) -> String {
    format!("{hue}_{shade}")
}

/// Splits a normalized key of the form `<base>_<digit>` with digit in
/// `1..=SHADE_COUNT` into `(base, shade)`.
pub fn split_shade(key: &str) -> Option<(&str, u8)> {
    let (base, suffix) = key.rsplit_once('_')?;
    let shade: u8 = match suffix.as_bytes() {
        [d @ b'1'..=b'9'] => *d - b'0',
        _ => return None,
    };
    (!base.is_empty() && shade <= SHADE_COUNT).then_some((base, shade))
}

/// Human-readable form: underscores become spaces and each word is capitalized.
pub fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
