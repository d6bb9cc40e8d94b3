//! Error types for `CoffeeLocale`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `CoffeeLocale` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== CLDR Source Errors ====================
    /// The CLDR XML file for a locale does not exist.
    #[error("File {} does not exist.", .path.display())]
    SourceNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    // ==================== Malformed CLDR Data ====================
    /// No element exists at a path the pipeline requires.
    #[error("malformed CLDR data: no element at {path}")]
    MissingElement {
        /// Slash-separated element path, e.g. `/ldml/identity/language`.
        path: String,
    },

    /// An element is missing an attribute the pipeline requires.
    #[error("malformed CLDR data: <{element}> has no '{attribute}' attribute")]
    MissingAttribute {
        /// Name of the element.
        element: String,
        /// Name of the missing attribute.
        attribute: String,
    },

    /// An element's first child is not a text node.
    #[error("malformed CLDR data: <{element}{}> has no direct text content", describe_type(.code.as_deref()))]
    MissingText {
        /// Name of the element.
        element: String,
        /// The element's `type` attribute, when it has one.
        code: Option<String>,
    },

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// The document has no root element.
    #[error("XML document has no root element")]
    EmptyDocument,

    /// The document ended while elements were still open.
    #[error("unexpected end of file inside <{0}>")]
    UnexpectedEof(String),
}

fn describe_type(code: Option<&str>) -> String {
    code.map(|c| format!(" type=\"{c}\"")).unwrap_or_default()
}

impl Error {
    /// Whether this error means the CLDR data itself is malformed (as opposed
    /// to missing or unreadable).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::MissingElement { .. }
                | Error::MissingAttribute { .. }
                | Error::MissingText { .. }
                | Error::XmlError(_)
                | Error::XmlAttrError(_)
                | Error::EmptyDocument
                | Error::UnexpectedEof(_)
        )
    }
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

/// A specialized Result type for `CoffeeLocale` operations.
pub type Result<T> = std::result::Result<T, Error>;
