//! Toolsmith Core: small conversion and filesystem helpers.
//!
//! # Modules
//!
//! - [`conversion`]: Coercion of dynamic values, enum parsing, dates, and
//!   property projection
//! - [`validation`]: Text and value presence checks
//! - [`io`]: Path and file-name validation, directory creation
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod conversion;
pub mod error;
pub mod io;
pub mod validation;


// Re-export key types at crate root for convenience
pub use conversion::date::{format_date_time, to_date_string};
pub use conversion::enums::{EnumVariants, parse_enum, to_enum};
pub use conversion::numeric::{
    Decimal, FromValue, change_type, to_decimal, to_f32, to_f64, to_i32, to_i64,
};
pub use conversion::projection::to_property_map;
pub use error::{Error, Result};
pub use io::paths::{create_directory, is_valid_file_name, is_valid_path};
pub use validation::is_valid_text;
