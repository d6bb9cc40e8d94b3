//! Resolver for loading and merging CLDR locale documents

use crate::config::ScraperConfig;
use crate::error::{Error, Result};
use crate::formats::ldml::{LdmlDocument, read_ldml};

/// A locale document ready for extraction
#[derive(Debug, Clone)]
pub struct ResolvedLocale {
    /// The CLDR identifier that was requested (e.g. `en_US`).
    pub locale_name: String,
    /// The identity language merged in, when it differed from `locale_name`.
    pub base_locale: Option<String>,
    /// The requested document, with base elements appended after its own.
    pub document: LdmlDocument,
}

/// Load `{cldr_path}/common/main/{locale_name}.xml`
///
/// # Errors
/// Returns [`Error::SourceNotFound`] if the file does not exist, or a parse
/// error if it is not valid XML.
pub fn load_cldr_document(config: &ScraperConfig, locale_name: &str) -> Result<LdmlDocument> {
    let path = config.cldr_xml_path(locale_name);
    if !path.is_file() {
        return Err(Error::SourceNotFound { path });
    }

    tracing::debug!("Loading CLDR file {}", path.display());
    read_ldml(&path)
}

/// Resolve the configured locale into a single document.
///
/// If the loaded file declares an identity language other than the requested
/// name (for example `en_US.xml` declaring `en`), the base language file is
/// loaded and its root elements appended. Only one level is merged, and the
/// rule applies whether the name was inferred or given manually.
///
/// # Errors
/// Returns [`Error::SourceNotFound`] if either file is missing, and a
/// malformed-data error if the identity language cannot be read.
pub fn resolve_locale_document(config: &ScraperConfig) -> Result<ResolvedLocale> {
    let locale_name = config.locale_name();
    let mut document = load_cldr_document(config, &locale_name)?;

    let identity = document.identity_language()?.to_string();
    let base_locale = if identity == locale_name {
        None
    } else {
        tracing::info!("Merging base language {identity} into {locale_name}");
        let base = load_cldr_document(config, &identity)?;
        document.append_root_elements(base);
        Some(identity)
    };

    Ok(ResolvedLocale {
        locale_name,
        base_locale,
        document,
    })
}
