//! CLDR locale resolution
//!
//! Turns a [`ScraperConfig`](crate::config::ScraperConfig) into a single
//! [`LdmlDocument`](crate::formats::ldml::LdmlDocument), merging in the base
//! language when the requested file is only a regional variant.

mod resolver;

pub use resolver::{ResolvedLocale, load_cldr_document, resolve_locale_document};
