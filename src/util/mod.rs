//! Utility functions shared across the application.

pub mod de;

use std::borrow::Cow;

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &str) -> Cow<'_, str> {
    shellexpand::tilde(path)
}

/// Append a `/` to a directory string unless it already ends with one,
/// so file names can be concatenated onto it.
pub fn with_trailing_separator(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}
