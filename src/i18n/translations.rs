//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> template string.
pub type TranslationMap = HashMap<String, String>;

/// Named template parameters: placeholder name -> replacement value.
pub type Params = HashMap<String, String>;

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "dashboard.welcome")
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<&str>` borrowing the template, or None if not found
#[must_use]
pub fn translate<'a>(key: &str, translations: &'a TranslationMap) -> Option<&'a str> {
    translations.get(key).map(String::as_str)
}

/// What: Find a template in the primary map, then in the fallback map.
///
/// Output:
/// - Borrowed template, or `None` when neither map has `key`
#[must_use]
pub fn lookup_with_fallback<'a>(
    key: &str,
    translations: &'a TranslationMap,
    fallback_translations: &'a TranslationMap,
) -> Option<&'a str> {
    if let Some(translation) = translate(key, translations) {
        return Some(translation);
    }
    let translation = translate(key, fallback_translations);
    if translation.is_some() {
        tracing::debug!(key, "Translation key not found in active locale, using fallback");
    } else {
        tracing::debug!(
            key,
            "Missing translation key. Returning key as-is. Please add this key to config/locales/en.yml."
        );
    }
    translation
}

/// What: Look up translation with fallback to English.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Primary translation map (active language)
/// - `fallback_translations`: Fallback translation map (English)
///
/// Output:
/// - Template from primary or fallback, or the key itself if both miss
///
/// Details:
/// - Never fails; a missing key is not an error
/// - Misses are logged at debug level only
#[must_use]
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    lookup_with_fallback(key, translations, fallback_translations)
        .unwrap_or(key)
        .to_string()
}

/// What: Substitute `{name}` placeholders in a template.
///
/// Inputs:
/// - `template`: Template text, possibly containing `{name}` placeholders
/// - `params`: Values keyed by placeholder name
///
/// Output:
/// - Template with every occurrence of each supplied placeholder replaced
///
/// Details:
/// - Placeholders without a matching parameter are left intact
/// - Replacement values are inserted verbatim and never re-scanned for placeholders
#[must_use]
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) if after_open[..close].contains('{') => {
                // Stray `{`; the placeholder starts later.
                out.push('{');
                rest = after_open;
            }
            Some(close) => {
                let name = &after_open[..close];
                if let Some(value) = params.get(name) {
                    out.push_str(value);
                } else {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
                rest = &after_open[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// What: Build a `Params` map from borrowed pairs.
///
/// Inputs:
/// - `pairs`: `(name, value)` pairs
///
/// Output:
/// - Owned parameter map; later duplicates win
#[must_use]
pub fn params_from_pairs(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
