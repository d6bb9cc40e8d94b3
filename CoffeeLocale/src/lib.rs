//! # `CoffeeLocale`
//!
//! Converts Unicode CLDR locale data into `CoffeeTranslation` `.i18n` string
//! files for Rehike.
//!
//! For one locale the scraper produces:
//!
//! - **`language_names.i18n`** - display names of languages
//! - **`country_names.i18n`** - display names of territories, preferring
//!   CLDR's short forms when they are not bare abbreviations
//!
//! ## Quick Start
//!
//! ```no_run
//! use coffeelocale::config::ScraperConfig;
//! use coffeelocale::converter::convert_cldr_to_i18n;
//!
//! // Reads cldr/common/main/en_US.xml (plus en.xml, which it derives from)
//! let config = ScraperConfig::new("lang/en-US", "cldr");
//! let summary = convert_cldr_to_i18n(&config)?;
//! println!("{} languages, {} countries", summary.language_count, summary.country_count);
//! # Ok::<(), coffeelocale::Error>(())
//! ```
//!
//! ## Working with the Pieces
//!
//! ```
//! use coffeelocale::prelude::*;
//!
//! let doc = parse_ldml(r#"<ldml><localeDisplayNames><territories>
//!     <territory type="US">United States of America</territory>
//!     <territory type="US" alt="short">United States</territory>
//! </territories></localeDisplayNames></ldml>"#)?;
//!
//! let countries = extract_territory_names(&doc)?;
//! assert_eq!(countries.entries[0].text, "United States");
//! assert_eq!(format_string_literal("d'Ivoire"), r#""d\'Ivoire""#);
//! # Ok::<(), coffeelocale::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `coffee-locale-scraper` command-line binary

pub mod error;
pub mod config;
pub mod formats;
pub mod locale;
pub mod extract;
pub mod converter;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::config::ScraperConfig;
    pub use crate::formats::ldml::{LdmlDocument, LdmlElement, LdmlNode, parse_ldml, read_ldml};
    pub use crate::formats::i18n::{DisplayEntry, I18nResource, format_string_literal, write_i18n};
    pub use crate::locale::{ResolvedLocale, resolve_locale_document};
    pub use crate::extract::{extract_language_names, extract_territory_names};
    pub use crate::converter::{ConversionSummary, convert_cldr_to_i18n};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
