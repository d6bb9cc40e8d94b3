//! LDML document structures
//!
//! An owned XML tree with a small typed accessor layer. Lookups that may
//! legitimately come up empty return `Option`; lookups the scraper relies on
//! return [`Result`] so malformed CLDR data surfaces as an [`Error`] instead of
//! a silent default.

use crate::error::{Error, Result};

/// A parsed CLDR LDML document (one `common/main/*.xml` file, possibly with a
/// base locale merged in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdmlDocument {
    /// The root element, normally `<ldml>`.
    pub root: LdmlElement,
}

/// An element in an LDML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdmlElement {
    /// Element name (e.g. "territory").
    pub name: String,
    /// Attributes in source order.
    pub attributes: Vec<LdmlAttribute>,
    /// Child nodes in document order.
    pub children: Vec<LdmlNode>,
}

/// An attribute on an LDML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdmlAttribute {
    /// Attribute name (e.g. "type", "alt").
    pub name: String,
    /// Unescaped attribute value.
    pub value: String,
}

/// A child node of an LDML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LdmlNode {
    /// A nested element.
    Element(LdmlElement),
    /// Character data (plain text or CDATA), already unescaped.
    Text(String),
    /// An XML comment.
    Comment(String),
}

impl LdmlDocument {
    /// Creates a document around the given root element.
    #[must_use]
    pub fn new(root: LdmlElement) -> Self {
        LdmlDocument { root }
    }

    /// Select every element matching an absolute, slash-separated element
    /// path such as `/ldml/localeDisplayNames/territories/territory`.
    ///
    /// Every matching branch is followed, so a document with two
    /// `<localeDisplayNames>` blocks yields the entries of both, in document
    /// order.
    pub fn select(&self, path: &str) -> Vec<&LdmlElement> {
        let mut steps = path.trim_start_matches('/').split('/');

        match steps.next() {
            Some(first) if first == self.root.name => {}
            _ => return Vec::new(),
        }

        let mut current = vec![&self.root];
        for step in steps {
            current = current
                .into_iter()
                .flat_map(|element| element.child_elements_named(step))
                .collect();
        }
        current
    }

    /// First element matching `path` in document order, if any.
    pub fn select_first(&self, path: &str) -> Option<&LdmlElement> {
        self.select(path).into_iter().next()
    }

    /// First element matching `path`, or [`Error::MissingElement`].
    pub fn require(&self, path: &str) -> Result<&LdmlElement> {
        self.select_first(path).ok_or_else(|| Error::MissingElement {
            path: path.to_string(),
        })
    }

    /// The declared identity language, `/ldml/identity/language/@type`.
    pub fn identity_language(&self) -> Result<&str> {
        self.require("/ldml/identity/language")?
            .require_attribute("type")
    }

    /// Append every child element of `base`'s root to this document's root.
    ///
    /// Nothing is deduplicated: entries present in both documents appear
    /// twice, this document's first.
    pub fn append_root_elements(&mut self, base: LdmlDocument) {
        self.root.children.extend(
            base.root
                .children
                .into_iter()
                .filter(|node| matches!(node, LdmlNode::Element(_))),
        );
    }
}

impl LdmlElement {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        LdmlElement {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Whether the element carries the named attribute (with any value).
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    /// Value of the named attribute, or [`Error::MissingAttribute`].
    pub fn require_attribute(&self, name: &str) -> Result<&str> {
        self.attribute(name).ok_or_else(|| Error::MissingAttribute {
            element: self.name.clone(),
            attribute: name.to_string(),
        })
    }

    /// Direct text content: the value of the first child node, which must be
    /// a text node. Anything else (no children, a leading element or comment)
    /// is [`Error::MissingText`].
    pub fn direct_text(&self) -> Result<&str> {
        match self.children.first() {
            Some(LdmlNode::Text(text)) => Ok(text.as_str()),
            _ => Err(Error::MissingText {
                element: self.name.clone(),
                code: self.attribute("type").map(str::to_string),
            }),
        }
    }

    /// Child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &LdmlElement> {
        self.children.iter().filter_map(|node| match node {
            LdmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Child elements with the given name, in document order.
    pub fn child_elements_named<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a LdmlElement> {
        self.child_elements().filter(move |e| e.name == name)
    }
}

impl LdmlAttribute {
    /// Creates an attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        LdmlAttribute {
            name: name.into(),
            value: value.into(),
        }
    }
}
