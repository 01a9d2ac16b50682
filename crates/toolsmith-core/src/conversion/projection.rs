//! Projection of serializable values into ordered property maps.

use std::any::type_name;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Projects `model` into a map of property name to value.
///
/// Properties keep their declaration order. Values that do not serialize to
/// an object (absent values, scalars, sequences) are rejected with
/// [`Error::InvalidArgument`].
///
/// # Example
///
/// ```
/// use serde::Serialize;
/// use serde_json::json;
/// use toolsmith_core::conversion::projection::to_property_map;
///
/// #[derive(Serialize)]
/// struct Point {
///     y: i32,
///     x: i32,
/// }
///
/// let map = to_property_map(&Point { y: 2, x: 1 }).unwrap();
/// let keys: Vec<_> = map.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["y", "x"]);
/// assert_eq!(map["x"], json!(1));
/// ```
pub fn to_property_map<T: Serialize + ?Sized>(model: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(model)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::invalid_argument(format!(
            "{} not valid",
            short_type_name::<T>()
        ))),
    }
}

/// Returns the last path segment of `T`'s name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
