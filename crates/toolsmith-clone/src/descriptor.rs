//! Type metadata describing how a value is laid out.
//!
//! A [`TypeDescriptor`] is obtained from a living value through
//! [`Reflect::type_descriptor`](crate::Reflect::type_descriptor), so it always
//! describes the value's concrete runtime type. Struct descriptors list their
//! declared fields; container descriptors name the kind of their elements.

use std::fmt;

// ============================================================================
// TypeKind
// ============================================================================

/// Broad classification of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Signed or unsigned integer of any width.
    Integer,
    /// Floating-point number of any width.
    Float,
    /// Boolean.
    Bool,
    /// Unicode scalar value.
    Char,
    /// Field-less enumeration.
    Enum,
    /// The unit type.
    Unit,
    /// Owned text.
    Text,
    /// User-defined record with named fields.
    Struct,
    /// Ordered collection (`Vec`, `VecDeque`).
    Sequence,
    /// Keyed collection; keys are copied by value.
    Map,
    /// Possibly absent value.
    Optional,
    /// Uniquely owned heap allocation.
    Boxed,
    /// Reference-counted handle (`Rc`, `Arc`).
    Shared,
    /// Interior-mutability wrapper (`RefCell`, `Mutex`, `RwLock`).
    Cell,
    /// Trait object whose concrete type is only known at run time.
    Dynamic,
}

impl TypeKind {
    /// Returns whether this kind is a primitive value kind.
    ///
    /// Primitive kinds are always leaves regardless of policy.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::Bool | Self::Char | Self::Enum | Self::Unit
        )
    }

    /// Returns whether values of this kind expose indexed element slots.
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::Sequence | Self::Map | Self::Optional | Self::Boxed | Self::Shared | Self::Cell
        )
    }

    /// Returns the kind name as a string.
    pub fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Enum => "enum",
            Self::Unit => "unit",
            Self::Text => "text",
            Self::Struct => "struct",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Optional => "optional",
            Self::Boxed => "boxed",
            Self::Shared => "shared",
            Self::Cell => "cell",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Typed
// ============================================================================

/// Compile-time kind of a sized type.
///
/// Used when building static field tables, where the declared type of each
/// field is known but no value exists yet.
pub trait Typed {
    /// Kind of every value of this type.
    const KIND: TypeKind;
}

// ============================================================================
// Descriptors
// ============================================================================

/// Declared metadata for one field of a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: &'static str,
    /// Declared type, as written in the source.
    pub type_name: &'static str,
    /// Kind of the declared type.
    pub kind: TypeKind,
    /// Whether the field belongs to the type rather than to each instance.
    pub is_static: bool,
}

impl FieldDescriptor {
    /// Describes a per-instance field.
    pub const fn instance(name: &'static str, type_name: &'static str, kind: TypeKind) -> Self {
        Self {
            name,
            type_name,
            kind,
            is_static: false,
        }
    }

    /// Describes type-level state such as an associated static.
    pub const fn type_level(name: &'static str, type_name: &'static str, kind: TypeKind) -> Self {
        Self {
            name,
            type_name,
            kind,
            is_static: true,
        }
    }
}

/// Runtime description of a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Fully qualified type name.
    pub name: &'static str,
    /// Kind of the type itself.
    pub kind: TypeKind,
    /// Declared element kind, for containers.
    pub element: Option<TypeKind>,
    /// Declared fields in declaration order, for structs.
    pub fields: &'static [FieldDescriptor],
}

impl TypeDescriptor {
    /// Describes a leaf type.
    pub const fn leaf(name: &'static str, kind: TypeKind) -> Self {
        Self {
            name,
            kind,
            element: None,
            fields: &[],
        }
    }

    /// Describes a struct with the given field table.
    pub const fn structure(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            name,
            kind: TypeKind::Struct,
            element: None,
            fields,
        }
    }

    /// Describes a container whose elements are of `element` kind.
    pub const fn container(name: &'static str, kind: TypeKind, element: TypeKind) -> Self {
        Self {
            name,
            kind,
            element: Some(element),
            fields: &[],
        }
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
