//! The reflection capability implemented by every clonable type.
//!
//! Rust offers no runtime field enumeration, so types opt in to deep copying
//! by implementing [`Reflect`]. The trait exposes exactly what the cloner
//! needs: a description of the concrete type, a plain duplicate for values
//! that are not walked, and a way to assemble a new value slot by slot.
//!
//! Assembly goes through a callback that receives each slot of the original
//! once. That keeps borrows of `RefCell`, `Mutex`, and `RwLock` contents
//! scoped to the copy, so interior-mutable graphs can be traversed without
//! unsafe code, and each node of a graph is built exactly once.

use std::any::{Any, type_name};
use std::fmt;

use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};

/// Address of a composite part inside a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// Named struct field.
    Field(&'a str),
    /// Element position in a container.
    Index(usize),
}

impl fmt::Display for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "`{name}`"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Callback that produces the copy of one slot.
///
/// It receives the slot's address and its value in the original.
pub type FillFn<'a> = dyn FnMut(Slot<'_>, &dyn Reflect) -> Result<Box<dyn Reflect>> + 'a;

/// Runtime introspection and duplication capability.
///
/// Implementations exist for primitives, text, and the std containers; user
/// structs normally get one from [`reflect_struct!`](crate::reflect_struct)
/// and field-less enums from [`reflect_leaf!`](crate::reflect_leaf).
pub trait Reflect: Any {
    /// Describes the concrete type of this value.
    fn type_descriptor(&self) -> TypeDescriptor;

    /// Produces a new value of the same concrete type holding the same
    /// contents, without going through a cloner.
    ///
    /// Shared handles are duplicated by sharing the pointee. Uniquely owned
    /// data has no second owner to share with, so it is copied in full.
    /// Fails with [`Error::ConstructionFailure`] when no duplicate can be
    /// made.
    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>>;

    /// Builds a new value of the same concrete type, taking the content of
    /// every slot from `fill`.
    ///
    /// `fill` is called once per slot, in declaration or iteration order,
    /// with the slot's current value. Values without slots return their
    /// shallow duplicate.
    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let _ = fill;
        self.shallow_duplicate()
    }

    /// Address of the shared allocation behind a handle, if this is one.
    fn identity(&self) -> Option<usize> {
        None
    }

    /// Upcasts to `Any` for downcasting by reference.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts a boxed value to `Any` for downcasting by value.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Unboxes a reflected value into its concrete type.
pub fn downcast<T: Reflect>(value: Box<dyn Reflect>) -> Result<T> {
    let found = (*value).type_descriptor().name;
    <dyn Reflect as Reflect>::into_any(value)
        .downcast::<T>()
        .map(|concrete| *concrete)
        .map_err(|_| Error::TypeMismatch {
            expected: type_name::<T>(),
            found,
        })
}

/// Shallow-duplicates a value of a statically known type.
pub fn duplicate<T: Reflect>(value: &T) -> Result<T> {
    downcast::<T>(value.shallow_duplicate()?)
}

/// Asks `fill` for the copy of `value` stored at `slot`.
pub fn fill_slot<T: Reflect>(fill: &mut FillFn<'_>, slot: Slot<'_>, value: &T) -> Result<T> {
    let value: &dyn Reflect = value;
    downcast::<T>(fill(slot, value)?)
}
