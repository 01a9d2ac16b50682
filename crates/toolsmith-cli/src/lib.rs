//! # toolsmith-cli
//!
//! Command-line front end for the toolsmith crates:
//! - Path and file-name validation, directory creation
//! - Value coercion and date formatting
//! - Deep copies of JSON documents through the graph cloner
//! - Configuration inspection

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use error::{Error, Result};
