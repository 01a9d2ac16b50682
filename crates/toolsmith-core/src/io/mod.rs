//! Filesystem helpers.
//!
//! # Modules
//!
//! - [`paths`]: Path and file-name validation, directory creation

pub mod paths;
