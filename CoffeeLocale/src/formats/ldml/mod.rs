//! LDML (CLDR XML) format module

mod document;
mod reader;

pub use document::{LdmlDocument, LdmlElement, LdmlNode, LdmlAttribute};
pub use reader::{read_ldml, parse_ldml};
