//! CLDR to `.i18n` conversion

use std::path::PathBuf;

use super::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::config::{COUNTRY_NAMES_FILE, LANGUAGE_NAMES_FILE, ScraperConfig};
use crate::error::Result;
use crate::extract::{extract_language_names, extract_territory_names};
use crate::formats::i18n::write_i18n;
use crate::locale::resolve_locale_document;

/// What a conversion run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// CLDR identifier that was converted.
    pub locale_name: String,
    /// Base language merged into it, if any.
    pub base_locale: Option<String>,
    pub language_file: PathBuf,
    pub language_count: usize,
    pub country_file: PathBuf,
    pub country_count: usize,
}

/// Convert the configured CLDR locale into `language_names.i18n` and
/// `country_names.i18n` inside the language folder.
///
/// # Errors
/// Returns an error if a CLDR file is missing or malformed, or if writing fails.
pub fn convert_cldr_to_i18n(config: &ScraperConfig) -> Result<ConversionSummary> {
    convert_cldr_to_i18n_with_progress(config, &|_| {})
}

/// Convert with a progress callback
///
/// The language file is written before territories are extracted, so a
/// territory failure leaves it in place.
///
/// # Errors
/// Returns an error if a CLDR file is missing or malformed, or if writing fails.
pub fn convert_cldr_to_i18n_with_progress(
    config: &ScraperConfig,
    progress: ConvertProgressCallback,
) -> Result<ConversionSummary> {
    tracing::info!(
        "Converting CLDR→i18n: {:?} → {:?}",
        config.cldr_path,
        config.language_path
    );

    progress(&ConvertProgress::with_message(
        ConvertPhase::ResolvingLocale,
        1,
        3,
        format!("Resolving CLDR locale {}...", config.locale_name()),
    ));
    let resolved = resolve_locale_document(config)?;
    let document = &resolved.document;

    let languages = extract_language_names(document)?;
    let language_file = config.output_path(LANGUAGE_NAMES_FILE);
    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingLanguages,
        2,
        3,
        format!("Writing {} language names...", languages.len()),
    ));
    write_i18n(&language_file, &languages)?;

    let countries = extract_territory_names(document)?;
    let country_file = config.output_path(COUNTRY_NAMES_FILE);
    progress(&ConvertProgress::with_message(
        ConvertPhase::WritingCountries,
        3,
        3,
        format!("Writing {} country names...", countries.len()),
    ));
    write_i18n(&country_file, &countries)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");

    Ok(ConversionSummary {
        locale_name: resolved.locale_name,
        base_locale: resolved.base_locale,
        language_file,
        language_count: languages.len(),
        country_file,
        country_count: countries.len(),
    })
}
