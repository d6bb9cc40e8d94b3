//! Run configuration
//!
//! Built once from the parsed command line and passed by reference to the
//! resolver and converter.

use std::path::{Path, PathBuf};

use crate::formats::i18n::I18N_EXTENSION;
use crate::utils::last_path_segment;

/// Output file stem for language display names.
pub const LANGUAGE_NAMES_FILE: &str = "language_names";

/// Output file stem for territory (country) display names.
pub const COUNTRY_NAMES_FILE: &str = "country_names";

/// Immutable configuration for one scraper run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Destination folder; its last segment names the locale (e.g. `en-US`).
    pub language_path: PathBuf,
    /// CLDR checkout root containing `common/main/*.xml`.
    pub cldr_path: PathBuf,
    /// Explicit CLDR locale identifier, used verbatim when set.
    pub cldr_manual_name: Option<String>,
}

impl ScraperConfig {
    pub fn new(language_path: impl Into<PathBuf>, cldr_path: impl Into<PathBuf>) -> Self {
        Self {
            language_path: language_path.into(),
            cldr_path: cldr_path.into(),
            cldr_manual_name: None,
        }
    }

    /// Use `name` as the CLDR locale identifier instead of inferring it.
    #[must_use]
    pub fn with_manual_name(mut self, name: impl Into<String>) -> Self {
        self.cldr_manual_name = Some(name.into());
        self
    }

    /// The CLDR locale identifier for this run.
    pub fn locale_name(&self) -> String {
        match &self.cldr_manual_name {
            Some(name) => name.clone(),
            None => infer_locale_name(&self.language_path),
        }
    }

    /// `{cldr_path}/common/main/{locale_name}.xml`
    ///
    /// The name is appended as text, so a name starting with `/` stays under
    /// `common/main` instead of replacing the CLDR root.
    pub fn cldr_xml_path(&self, locale_name: &str) -> PathBuf {
        let mut path = self.cldr_path.join("common").join("main").into_os_string();
        path.push("/");
        path.push(locale_name);
        path.push(".xml");
        PathBuf::from(path)
    }

    /// `{language_path}/{endpoint}.i18n`
    pub fn output_path(&self, endpoint: &str) -> PathBuf {
        self.language_path
            .join(format!("{endpoint}.{I18N_EXTENSION}"))
    }
}

/// Infer a CLDR locale identifier from a language folder path.
///
/// `CoffeeTranslation` folders use hyphens (`en-US`), CLDR files use
/// underscores (`en_US`).
pub fn infer_locale_name<P: AsRef<Path>>(language_path: P) -> String {
    last_path_segment(language_path).replace('-', "_")
}
