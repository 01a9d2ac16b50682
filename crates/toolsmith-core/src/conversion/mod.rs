//! Conversions from dynamic values.
//!
//! # Modules
//!
//! - [`numeric`]: Coercion to numbers, booleans, characters, and text
//! - [`enums`]: Enum lookup by variant name
//! - [`date`]: Date-time parsing and display formatting
//! - [`projection`]: Serializable values as ordered property maps

pub mod date;
pub mod enums;
pub mod numeric;
pub mod projection;
