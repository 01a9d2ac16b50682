//! [`Reflect`] for JSON documents.
//!
//! Arrays and objects are containers whose elements are dynamically typed.
//! Array elements are offered as [`Slot::Index`] slots and object members as
//! [`Slot::Field`] slots keyed by member name, in document order.

use std::any::{Any, type_name};

use serde_json::{Map, Value};

use crate::descriptor::{TypeDescriptor, TypeKind, Typed};
use crate::error::{Error, Result};
use crate::reflect::{FillFn, Reflect, Slot, fill_slot};

impl Typed for Value {
    const KIND: TypeKind = TypeKind::Dynamic;
}

impl Reflect for Value {
    fn type_descriptor(&self) -> TypeDescriptor {
        let name = type_name::<Self>();
        match self {
            Value::Null => TypeDescriptor::leaf(name, TypeKind::Unit),
            Value::Bool(_) => TypeDescriptor::leaf(name, TypeKind::Bool),
            Value::Number(_) => TypeDescriptor::leaf(name, TypeKind::Float),
            Value::String(_) => TypeDescriptor::leaf(name, TypeKind::Text),
            Value::Array(_) => TypeDescriptor::container(name, TypeKind::Sequence, TypeKind::Dynamic),
            Value::Object(_) => TypeDescriptor::container(name, TypeKind::Map, TypeKind::Dynamic),
        }
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(self.clone()))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let copy = match self {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| fill_slot::<Value>(fill, Slot::Index(index), item))
                    .collect::<Result<Vec<Value>>>()?,
            ),
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, item)| {
                        let copy = fill_slot::<Value>(fill, Slot::Field(key.as_str()), item)?;
                        Ok::<_, Error>((key.clone(), copy))
                    })
                    .collect::<Result<Map<String, Value>>>()?,
            ),
            scalar => scalar.clone(),
        };
        Ok(Box::new(copy))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
