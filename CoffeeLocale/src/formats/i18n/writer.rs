//! `.i18n` file writing

use super::{HEADER_LINES, I18nResource};
use crate::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Quote a string as a `CoffeeTranslation` string literal.
///
/// Escapes are applied in a fixed order: backslashes first, so the
/// backslashes introduced by later steps are not doubled again.
pub fn format_string_literal(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\'', "\\'")
        .replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Serialize a resource to `.i18n` text: header, blank line, then one
/// `code: "text"` line per entry.
pub fn serialize_i18n(resource: &I18nResource) -> String {
    let mut output = String::new();
    for line in HEADER_LINES {
        output.push_str(line);
        output.push('\n');
    }
    output.push('\n');

    for entry in &resource.entries {
        // Writing into a String cannot fail.
        let _ = writeln!(
            output,
            "{}: {}",
            entry.code,
            format_string_literal(&entry.text)
        );
    }
    output
}

/// Write a `.i18n` file to disk, replacing any existing file
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_i18n<P: AsRef<Path>>(path: P, resource: &I18nResource) -> Result<()> {
    fs::write(&path, serialize_i18n(resource))?;
    tracing::debug!(
        "Wrote {} entries to {:?}",
        resource.entries.len(),
        path.as_ref()
    );
    Ok(())
}
