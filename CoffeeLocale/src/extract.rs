//! Display-name extraction from a resolved LDML document

use crate::error::Result;
use crate::formats::i18n::{DisplayEntry, I18nResource};
use crate::formats::ldml::{LdmlDocument, LdmlElement};

/// Element path of language display names.
pub const LANGUAGES_PATH: &str = "/ldml/localeDisplayNames/languages/language";

/// Element path of territory display names.
pub const TERRITORIES_PATH: &str = "/ldml/localeDisplayNames/territories/territory";

/// Short territory names at or below this length (in UTF-16 code units) are
/// too terse to use, e.g. "US".
pub const MIN_SHORT_NAME_LEN: usize = 4;

/// Extract language display names in document order, skipping `alt` variants
///
/// # Errors
/// Returns a malformed-data error if a language has no `type` attribute or
/// no direct text.
pub fn extract_language_names(document: &LdmlDocument) -> Result<I18nResource> {
    let mut resource = I18nResource::new();

    for node in document.select(LANGUAGES_PATH) {
        if node.has_attribute("alt") {
            continue;
        }
        resource.entries.push(canonical_entry(node)?);
    }

    tracing::debug!("Extracted {} language names", resource.len());
    Ok(resource)
}

/// Extract territory display names in document order.
///
/// `alt` variants are skipped as entries, but an `alt="short"` variant for the
/// same code replaces the canonical name when it is longer than
/// [`MIN_SHORT_NAME_LEN`]: "United States" wins over "United States of
/// America", while "US" never replaces anything.
///
/// # Errors
/// Returns a malformed-data error if a territory (or its short variant) has no
/// `type` attribute or no direct text.
pub fn extract_territory_names(document: &LdmlDocument) -> Result<I18nResource> {
    let territories = document.select(TERRITORIES_PATH);
    let mut resource = I18nResource::new();

    for node in &territories {
        if node.has_attribute("alt") {
            continue;
        }

        let mut entry = canonical_entry(node)?;
        if let Some(short) = find_short_variant(&territories, &entry.code) {
            let short_text = short.direct_text()?;
            if utf16_len(short_text) > MIN_SHORT_NAME_LEN {
                entry.text = short_text.to_string();
            }
        }
        resource.entries.push(entry);
    }

    tracing::debug!("Extracted {} territory names", resource.len());
    Ok(resource)
}

fn canonical_entry(node: &LdmlElement) -> Result<DisplayEntry> {
    let code = node.require_attribute("type")?;
    let text = node.direct_text()?;
    Ok(DisplayEntry::new(code, text))
}

/// First `territory[@type=code][@alt='short']` in document order.
fn find_short_variant<'a>(territories: &[&'a LdmlElement], code: &str) -> Option<&'a LdmlElement> {
    territories
        .iter()
        .copied()
        .find(|t| t.attribute("type") == Some(code) && t.attribute("alt") == Some("short"))
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
