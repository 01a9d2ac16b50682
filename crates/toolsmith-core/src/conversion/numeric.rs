//! Numeric and scalar coercion of dynamic values.
//!
//! Inputs are [`serde_json::Value`]s. The rules follow the usual loose
//! conversion semantics:
//!
//! - `null` converts to zero (or `false`, `'\0'`, the empty string)
//! - booleans convert to `1` / `0`
//! - floats convert to integers by rounding half to even
//! - text is trimmed and parsed
//! - arrays and objects never convert
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use toolsmith_core::conversion::numeric::{to_i32, to_f64};
//!
//! assert_eq!(to_i32(&json!(2.5)).unwrap(), 2);
//! assert_eq!(to_i32(&json!(" 42 ")).unwrap(), 42);
//! assert_eq!(to_f64(&json!(true)).unwrap(), 1.0);
//! ```

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Largest number of digits before the decimal point a [`Decimal`] holds.
pub const DECIMAL_MAX_INTEGER_DIGITS: usize = 29;

/// Largest number of digits after the decimal point a [`Decimal`] keeps.
pub const DECIMAL_MAX_SCALE: usize = 28;

/// Returns a short name for the kind of `value`.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Integers
// ============================================================================

/// Converts `value` to an `i64`.
pub fn to_i64(value: &Value) -> Result<i64> {
    match value {
        Value::Null => Ok(0),
        Value::Bool(flag) => Ok(i64::from(*flag)),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(int)
            } else if let Some(unsigned) = number.as_u64() {
                Err(Error::overflow(unsigned, "i64"))
            } else {
                let float = number
                    .as_f64()
                    .ok_or_else(|| Error::format(number.to_string(), "i64"))?;
                round_to_i64(float)
            }
        }
        Value::String(text) => parse_i64(text.trim()),
        other => Err(Error::invalid_cast(kind_name(other), "i64")),
    }
}

/// Converts `value` to an `i32`.
pub fn to_i32(value: &Value) -> Result<i32> {
    let wide = to_i64(value).map_err(|err| retarget(err, "i32"))?;
    i32::try_from(wide).map_err(|_| Error::overflow(wide, "i32"))
}

fn parse_i64(text: &str) -> Result<i64> {
    text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::overflow(text, "i64"),
        _ => Error::format(text, "i64"),
    })
}

fn round_to_i64(float: f64) -> Result<i64> {
    // i64::MAX is not representable; 2^63 is the first value out of range.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    let rounded = float.round_ties_even();
    if rounded.is_nan() || rounded < -UPPER || rounded >= UPPER {
        return Err(Error::overflow(float, "i64"));
    }
    Ok(rounded as i64)
}

fn retarget(err: Error, target: &'static str) -> Error {
    match err {
        Error::Overflow { value, .. } => Error::Overflow { value, target },
        Error::Format { input, .. } => Error::Format { input, target },
        Error::InvalidCast { from, .. } => Error::InvalidCast { from, target },
        other => other,
    }
}

// ============================================================================
// Floats
// ============================================================================

/// Converts `value` to an `f64`.
pub fn to_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Null => Ok(0.0),
        Value::Bool(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| Error::format(number.to_string(), "f64")),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<f64>().map_err(|_| Error::format(text, "f64"))
        }
        other => Err(Error::invalid_cast(kind_name(other), "f64")),
    }
}

/// Converts `value` to an `f32`. Magnitudes beyond `f32` become infinite.
pub fn to_f32(value: &Value) -> Result<f32> {
    match value {
        Value::String(text) => {
            let text = text.trim();
            text.parse::<f32>().map_err(|_| Error::format(text, "f32"))
        }
        other => to_f64(other)
            .map(|wide| wide as f32)
            .map_err(|err| retarget(err, "f32")),
    }
}

// ============================================================================
// Decimal
// ============================================================================

/// Exact base-10 number.
///
/// Stored in canonical text form: no leading zeros, no trailing fractional
/// zeros, no sign on zero. Equal numbers therefore compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    /// Zero.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Returns the canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the number is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Returns the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses `[+-]digits[.digits]`. Digits past the
    /// [`DECIMAL_MAX_SCALE`]th decimal place are dropped.
    fn from_str(input: &str) -> Result<Self> {
        let text = input.trim();
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !digits(integer) || !digits(fraction) {
            return Err(Error::format(text, "decimal"));
        }

        let integer = integer.trim_start_matches('0');
        if integer.len() > DECIMAL_MAX_INTEGER_DIGITS {
            return Err(Error::overflow(text, "decimal"));
        }
        let fraction = &fraction[..fraction.len().min(DECIMAL_MAX_SCALE)];
        let fraction = fraction.trim_end_matches('0');

        let mut canonical = String::with_capacity(integer.len() + fraction.len() + 3);
        let is_zero = integer.is_empty() && fraction.is_empty();
        if negative && !is_zero {
            canonical.push('-');
        }
        canonical.push_str(if integer.is_empty() { "0" } else { integer });
        if !fraction.is_empty() {
            canonical.push('.');
            canonical.push_str(fraction);
        }
        Ok(Self(canonical))
    }
}

/// Converts `value` to a [`Decimal`].
pub fn to_decimal(value: &Value) -> Result<Decimal> {
    match value {
        Value::Null => Ok(Decimal::zero()),
        Value::Bool(flag) => Ok(Decimal(String::from(if *flag { "1" } else { "0" }))),
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                number.to_string().parse()
            } else {
                let float = to_f64(value)?;
                if !float.is_finite() {
                    return Err(Error::overflow(float, "decimal"));
                }
                // `Display` for f64 never uses exponent notation.
                format!("{float}").parse()
            }
        }
        Value::String(text) => text.parse(),
        other => Err(Error::invalid_cast(kind_name(other), "decimal")),
    }
}

// ============================================================================
// Generic dispatch
// ============================================================================

/// Types a dynamic value can be coerced into.
pub trait FromValue: Sized {
    /// Coerces `value` into `Self`.
    fn from_value(value: &Value) -> Result<Self>;
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self> {
        to_i32(value)
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        to_i64(value)
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        to_f32(value)
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        to_f64(value)
    }
}

impl FromValue for Decimal {
    fn from_value(value: &Value) -> Result<Self> {
        to_decimal(value)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(flag) => Ok(*flag),
            Value::Number(_) => to_f64(value).map(|number| number != 0.0),
            Value::String(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(Error::format(text, "bool"))
                }
            }
            other => Err(Error::invalid_cast(kind_name(other), "bool")),
        }
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok('\0'),
            Value::String(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(only), None) => Ok(only),
                    _ => Err(Error::format(text.as_str(), "char")),
                }
            }
            Value::Number(number) if number.is_i64() || number.is_u64() => {
                let code = to_i64(value)?;
                u32::try_from(code)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| Error::overflow(code, "char"))
            }
            other => Err(Error::invalid_cast(kind_name(other), "char")),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(String::new()),
            Value::Bool(flag) => Ok(flag.to_string()),
            Value::Number(number) => Ok(number.to_string()),
            Value::String(text) => Ok(text.clone()),
            other => Err(Error::invalid_cast(kind_name(other), "string")),
        }
    }
}

/// Coerces `value` into `T`.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use toolsmith_core::conversion::numeric::change_type;
///
/// let n: i64 = change_type(&json!("17")).unwrap();
/// assert_eq!(n, 17);
/// let flag: bool = change_type(&json!(0)).unwrap();
/// assert!(!flag);
/// ```
pub fn change_type<T: FromValue>(value: &Value) -> Result<T> {
    T::from_value(value)
}
