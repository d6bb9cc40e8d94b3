//! File format handlers
//!
//! - `ldml` - CLDR locale XML (read)
//! - `i18n` - `CoffeeTranslation` string files (write)

pub mod ldml;
pub mod i18n;

// Re-export main document types
pub use ldml::{LdmlDocument, LdmlElement, LdmlNode, LdmlAttribute, read_ldml, parse_ldml};
pub use i18n::{DisplayEntry, I18nResource, format_string_literal, write_i18n};
