//! Format conversion utilities
//!
//! CLDR locale XML → `CoffeeTranslation` `.i18n` string files.

mod cldr_to_i18n;

pub use cldr_to_i18n::{
    ConversionSummary, convert_cldr_to_i18n, convert_cldr_to_i18n_with_progress,
};

/// Stage of a conversion run, reported to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Locating, parsing and merging the CLDR source files.
    ResolvingLocale,
    /// Extracting and writing language display names.
    WritingLanguages,
    /// Extracting and writing territory display names.
    WritingCountries,
    /// All output files written.
    Complete,
}

impl ConvertPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ConvertPhase::ResolvingLocale => "Resolving locale",
            ConvertPhase::WritingLanguages => "Writing language names",
            ConvertPhase::WritingCountries => "Writing country names",
            ConvertPhase::Complete => "Complete",
        }
    }
}

/// Progress update for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    pub phase: ConvertPhase,
    pub current: usize,
    pub total: usize,
    pub message: Option<String>,
}

impl ConvertProgress {
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            message: Some(message.into()),
        }
    }
}

/// Progress callback type for conversion operations.
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);
