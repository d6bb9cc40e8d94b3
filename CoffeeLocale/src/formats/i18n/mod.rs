//! `.i18n` `CoffeeTranslation` string file format
//!
//! Line-oriented `key: "value"` text with a fixed CLDR attribution header.
//! Only writing is supported.

mod writer;

pub use writer::{format_string_literal, serialize_i18n, write_i18n};

/// Header lines written at the top of every generated file.
pub const HEADER_LINES: [&str; 2] = [
    "# Sourced from the Unicode Common Locale Data Repository (CLDR).",
    "# https://cldr.unicode.org/index",
];

/// File extension of `CoffeeTranslation` string files (without the dot).
pub const I18N_EXTENSION: &str = "i18n";

/// A single display name for a language or territory code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    /// CLDR code (e.g. "de", "US", "419")
    pub code: String,
    /// Human-readable name in the target locale
    pub text: String,
}

impl DisplayEntry {
    pub fn new(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }
}

/// An ordered collection of display entries, written as one `.i18n` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nResource {
    pub entries: Vec<DisplayEntry>,
}

impl I18nResource {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<DisplayEntry>> for I18nResource {
    fn from(entries: Vec<DisplayEntry>) -> Self {
        Self { entries }
    }
}
