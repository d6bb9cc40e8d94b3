//! LDML file reading

use super::document::{LdmlAttribute, LdmlDocument, LdmlElement, LdmlNode};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Read an LDML file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_ldml<P: AsRef<Path>>(path: P) -> Result<LdmlDocument> {
    let content = fs::read_to_string(&path)?;
    tracing::debug!("Read {} bytes from {:?}", content.len(), path.as_ref());
    parse_ldml(&content)
}

/// Parse LDML from an XML string
///
/// Whitespace-only text between elements is dropped; any other text is kept
/// verbatim (after entity unescaping and line-ending normalization) so display
/// names keep their spacing.
///
/// # Errors
/// Returns an error if the XML is malformed or has no root element.
pub fn parse_ldml(content: &str) -> Result<LdmlDocument> {
    let content = normalize_line_endings(content);
    let mut reader = Reader::from_str(&content);
    reader.trim_text(false);

    let mut node_stack: Vec<LdmlElement> = Vec::new();
    let mut root: Option<LdmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                node_stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e)?;
                attach_element(&mut node_stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                if let Some(completed) = node_stack.pop() {
                    attach_element(&mut node_stack, &mut root, completed);
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape()?;
                if !is_xml_whitespace(&text)
                    && let Some(parent) = node_stack.last_mut()
                {
                    parent.children.push(LdmlNode::Text(text.into_owned()));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(parent) = node_stack.last_mut() {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    parent.children.push(LdmlNode::Text(text));
                }
            }
            Ok(Event::Comment(e)) => {
                if let Some(parent) = node_stack.last_mut() {
                    let comment = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    parent.children.push(LdmlNode::Comment(comment));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            // Declaration, DOCTYPE and processing instructions carry nothing we read.
            _ => {}
        }
    }

    if let Some(open) = node_stack.last() {
        return Err(Error::UnexpectedEof(open.name.clone()));
    }

    root.map(LdmlDocument::new).ok_or(Error::EmptyDocument)
}

/// Only space, tab, CR and LF count as XML whitespace; U+00A0 and other
/// Unicode spaces are content.
fn is_xml_whitespace(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// XML end-of-line handling, applied to the raw input: `\r\n` and lone `\r`
/// become `\n`. A `&#13;` reference is not raw input and survives.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

fn element_from_start(e: &BytesStart<'_>) -> Result<LdmlElement> {
    let mut element = LdmlElement::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
    for attr in e.attributes() {
        let attr = attr?;
        element.attributes.push(LdmlAttribute::new(
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            attr.unescape_value()?.into_owned(),
        ));
    }
    Ok(element)
}

/// Attach a finished element to its parent, or make it the root.
fn attach_element(
    node_stack: &mut [LdmlElement],
    root: &mut Option<LdmlElement>,
    element: LdmlElement,
) {
    if let Some(parent) = node_stack.last_mut() {
        parent.children.push(LdmlNode::Element(element));
    } else if root.is_none() {
        *root = Some(element);
    }
}
