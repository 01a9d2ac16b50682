//! Field enumeration and leaf/composite classification.
//!
//! The introspector answers one question for the cloner: which instance
//! fields of a concrete type need recursive copying? It never touches
//! values, only their [`TypeDescriptor`].

use serde::{Deserialize, Serialize};

use crate::descriptor::{TypeDescriptor, TypeKind};
use crate::reflect::Reflect;

/// Decides which kinds are copied by value without recursion.
///
/// Primitive kinds (numbers, booleans, characters, field-less enums, unit)
/// are always leaves. Text is a leaf unless `strings_as_leaves` is turned
/// off. Owned text has no shareable sub-objects, so both settings produce
/// equal copies; the setting only changes how much of the graph is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafPolicy {
    /// Treat text as a leaf.
    pub strings_as_leaves: bool,
}

impl Default for LeafPolicy {
    fn default() -> Self {
        Self {
            strings_as_leaves: true,
        }
    }
}

impl LeafPolicy {
    /// Returns whether values of `kind` are copied without recursion.
    pub fn is_leaf(&self, kind: TypeKind) -> bool {
        match kind {
            TypeKind::Text => self.strings_as_leaves,
            kind => kind.is_primitive(),
        }
    }
}

/// One instance field with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedField {
    /// Field name.
    pub name: &'static str,
    /// Declared type, as written in the source.
    pub type_name: &'static str,
    /// Kind of the declared type.
    pub kind: TypeKind,
    /// Whether the field needs recursive cloning.
    pub composite: bool,
}

/// Enumerates instance fields and classifies them as leaf or composite.
pub trait TypeIntrospector {
    /// Lists the instance fields of `descriptor` in declaration order.
    ///
    /// Static fields are excluded. Types without instance fields yield an
    /// empty list.
    fn classify(&self, descriptor: &TypeDescriptor) -> Vec<ClassifiedField>;

    /// Returns whether values of `kind` need recursive cloning.
    fn is_composite(&self, kind: TypeKind) -> bool;

    /// Classifies the concrete type of a living value.
    fn classify_value(&self, value: &dyn Reflect) -> Vec<ClassifiedField> {
        self.classify(&value.type_descriptor())
    }
}

/// Introspector backed by the field tables in [`TypeDescriptor`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldIntrospector {
    policy: LeafPolicy,
}

impl FieldIntrospector {
    /// Creates an introspector applying `policy`.
    pub fn new(policy: LeafPolicy) -> Self {
        Self { policy }
    }

    /// Returns the leaf policy in use.
    pub fn policy(&self) -> LeafPolicy {
        self.policy
    }
}

impl TypeIntrospector for FieldIntrospector {
    fn classify(&self, descriptor: &TypeDescriptor) -> Vec<ClassifiedField> {
        descriptor
            .fields
            .iter()
            .filter(|field| !field.is_static)
            .map(|field| ClassifiedField {
                name: field.name,
                type_name: field.type_name,
                kind: field.kind,
                composite: self.is_composite(field.kind),
            })
            .collect()
    }

    fn is_composite(&self, kind: TypeKind) -> bool {
        !self.policy.is_leaf(kind)
    }
}
