//! Path utilities

use std::path::Path;

/// Normalize path separators to forward slashes
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Final `/`-separated segment of a normalized path.
///
/// Unlike [`Path::file_name`], a trailing separator yields an empty segment
/// and `..` is returned as-is.
pub fn last_path_segment<P: AsRef<Path>>(path: P) -> String {
    let normalized = normalize_path(path);
    normalized
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
