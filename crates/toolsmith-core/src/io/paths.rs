//! Syntactic path and file-name checks against the host's reserved
//! characters.
//!
//! On Unix only NUL is reserved in paths, and NUL plus `/` in file names.
//! On Windows paths additionally reject `"`, `<`, `>`, `|` and control
//! characters, and file names further reject `:`, `*`, `?`, `\` and `/`.

use std::path::Path;

use crate::error::Result;
use crate::validation::is_valid_text;

/// Longest accepted file name, in characters.
pub const MAX_FILE_NAME_LEN: usize = 255;

/// Returns whether `c` may not appear in a path.
#[cfg(windows)]
pub fn is_invalid_path_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|') || (c.is_ascii_control() && c != '\u{7f}')
}

/// Returns whether `c` may not appear in a path.
#[cfg(not(windows))]
pub fn is_invalid_path_char(c: char) -> bool {
    c == '\0'
}

/// Returns whether `c` may not appear in a file name.
#[cfg(windows)]
pub fn is_invalid_file_name_char(c: char) -> bool {
    is_invalid_path_char(c) || matches!(c, ':' | '*' | '?' | '\\' | '/')
}

/// Returns whether `c` may not appear in a file name.
#[cfg(not(windows))]
pub fn is_invalid_file_name_char(c: char) -> bool {
    c == '\0' || c == '/'
}

/// Characters reserved in paths on this host.
pub fn invalid_path_chars() -> Vec<char> {
    ascii().filter(|&c| is_invalid_path_char(c)).collect()
}

/// Characters reserved in file names on this host.
pub fn invalid_file_name_chars() -> Vec<char> {
    ascii().filter(|&c| is_invalid_file_name_char(c)).collect()
}

fn ascii() -> impl Iterator<Item = char> {
    (0_u8..=0x7f).map(char::from)
}

/// Returns whether `path` is non-blank and free of reserved characters.
pub fn is_valid_path(path: &str) -> bool {
    is_valid_text(path) && !path.chars().any(is_invalid_path_char)
}

/// Returns whether `name` is a usable file name: non-blank, at most
/// [`MAX_FILE_NAME_LEN`] characters, and free of reserved characters.
pub fn is_valid_file_name(name: &str) -> bool {
    is_valid_text(name)
        && name.chars().count() <= MAX_FILE_NAME_LEN
        && !name.chars().any(is_invalid_file_name_char)
}

/// Creates `path` and any missing parents.
///
/// Returns `Ok(false)` without touching the filesystem when `path` is not a
/// valid path, and `Ok(true)` once the directory exists.
pub fn create_directory(path: &str) -> Result<bool> {
    if !is_valid_path(path) {
        log::debug!("Refusing to create invalid path {path:?}");
        return Ok(false);
    }
    std::fs::create_dir_all(Path::new(path))?;
    log::debug!("Created directory {path}");
    Ok(true)
}
