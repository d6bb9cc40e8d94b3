//! Utility functions

pub mod path;

pub use path::{normalize_path, last_path_segment};
