//! Toolsmith Clone: generic deep copying of object graphs.
//!
//! Types opt in through the [`Reflect`] capability. The
//! [`FieldIntrospector`] classifies a concrete type's instance fields as leaf
//! or composite, and the [`GraphCloner`] rebuilds a value in one pass, filling
//! every composite part with a recursive copy and every leaf with a plain
//! duplicate.
//!
//! # Modules
//!
//! - [`descriptor`]: Type and field metadata
//! - [`reflect`]: The `Reflect` capability and slot addressing
//! - [`introspect`]: Leaf policy and field classification
//! - [`cloner`]: The recursive deep-copy engine
//! - `json`: `Reflect` for `serde_json::Value` (feature `json`)
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod cloner;
pub mod descriptor;
pub mod error;
mod impls;
pub mod introspect;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod reflect;


// Re-export key types at crate root for convenience
pub use cloner::{CloneOptions, GraphCloner};
pub use descriptor::{FieldDescriptor, TypeDescriptor, TypeKind, Typed};
pub use error::{Error, Result};
pub use introspect::{ClassifiedField, FieldIntrospector, LeafPolicy, TypeIntrospector};
pub use reflect::{FillFn, Reflect, Slot, downcast, duplicate, fill_slot};

/// Deep-clones `value` with default options.
pub fn deep_clone<T: Reflect>(value: &T) -> Result<T> {
    GraphCloner::new().deep_clone(value)
}

/// Deep-clones a possibly absent value with default options.
pub fn deep_clone_opt<T: Reflect>(value: Option<&T>) -> Result<Option<T>> {
    GraphCloner::new().deep_clone_opt(value)
}
