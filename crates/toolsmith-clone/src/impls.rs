//! [`Reflect`] implementations for primitives and std containers.
//!
//! Containers expose their elements as [`Slot::Index`] slots in iteration
//! order. Maps copy keys by value and offer only their values as slots; the
//! rebuilt map is collected from the original's entries in a single pass.

use std::any::{Any, type_name};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::Hash;
use std::rc::Rc;
use std::sync::atomic::{
    AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize, AtomicU8, AtomicU16,
    AtomicU32, AtomicU64, AtomicUsize,
};
use std::sync::{Arc, Mutex, RwLock};

use crate::descriptor::{TypeDescriptor, TypeKind, Typed};
use crate::error::{Error, Result};
use crate::reflect::{FillFn, Reflect, Slot, duplicate, fill_slot};

// ============================================================================
// Leaves
// ============================================================================

crate::reflect_leaf!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
crate::reflect_leaf!(Float => f32, f64);
crate::reflect_leaf!(Bool => bool);
crate::reflect_leaf!(Char => char);
crate::reflect_leaf!(Unit => ());
crate::reflect_leaf!(Text => String, &'static str);

// Atomics only appear as type-level state, so they are described but not
// reflected.
macro_rules! typed_only {
    ($kind:ident => $($ty:ty),+) => {
        $(impl Typed for $ty {
            const KIND: TypeKind = TypeKind::$kind;
        })+
    };
}

typed_only!(Integer => AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize);
typed_only!(Integer => AtomicU8, AtomicU16, AtomicU32, AtomicU64, AtomicUsize);
typed_only!(Bool => AtomicBool);

// ============================================================================
// Optional and boxed values
// ============================================================================

impl<T: Typed> Typed for Option<T> {
    const KIND: TypeKind = TypeKind::Optional;
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Optional, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let copy = self.as_ref().map(duplicate).transpose()?;
        Ok(Box::new(copy))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let copy = match self {
            Some(value) => Some(fill_slot::<T>(fill, Slot::Index(0), value)?),
            None => None,
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

impl<T: Typed> Typed for Box<T> {
    const KIND: TypeKind = TypeKind::Boxed;
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Boxed, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Box::new(duplicate::<T>(self)?)))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Box::new(fill_slot::<T>(fill, Slot::Index(0), &**self)?)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Typed for Box<dyn Reflect> {
    const KIND: TypeKind = TypeKind::Boxed;
}

/// Trait-object fields are cloned according to the concrete type they hold
/// at run time.
impl Reflect for Box<dyn Reflect> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Boxed, TypeKind::Dynamic)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let inner: Box<dyn Reflect> = (**self).shallow_duplicate()?;
        Ok(Box::new(inner))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let inner: &dyn Reflect = &**self;
        let copy: Box<dyn Reflect> = fill(Slot::Index(0), inner)?;
        Ok(Box::new(copy))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ============================================================================
// Sequences
// ============================================================================

impl<T: Typed> Typed for Vec<T> {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Sequence, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let copy = self.iter().map(duplicate).collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let copy = self
            .iter()
            .enumerate()
            .map(|(index, value)| fill_slot::<T>(fill, Slot::Index(index), value))
            .collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<T: Typed> Typed for VecDeque<T> {
    const KIND: TypeKind = TypeKind::Sequence;
}

impl<T: Reflect + Typed> Reflect for VecDeque<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Sequence, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let copy = self.iter().map(duplicate).collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let copy = self
            .iter()
            .enumerate()
            .map(|(index, value)| fill_slot::<T>(fill, Slot::Index(index), value))
            .collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ============================================================================
// Maps
// ============================================================================

impl<K, V: Typed> Typed for BTreeMap<K, V> {
    const KIND: TypeKind = TypeKind::Map;
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Clone + Ord + 'static,
    V: Reflect + Typed,
{
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Map, V::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let copy = self
            .iter()
            .map(|(key, value)| Ok::<_, Error>((key.clone(), duplicate(value)?)))
            .collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let copy = self
            .iter()
            .enumerate()
            .map(|(index, (key, value))| {
                Ok::<_, Error>((key.clone(), fill_slot::<V>(fill, Slot::Index(index), value)?))
            })
            .collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<K, V: Typed> Typed for HashMap<K, V> {
    const KIND: TypeKind = TypeKind::Map;
}

impl<K, V> Reflect for HashMap<K, V>
where
    K: Clone + Eq + Hash + 'static,
    V: Reflect + Typed,
{
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Map, V::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let copy = self
            .iter()
            .map(|(key, value)| Ok::<_, Error>((key.clone(), duplicate(value)?)))
            .collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let copy = self
            .iter()
            .enumerate()
            .map(|(index, (key, value))| {
                Ok::<_, Error>((key.clone(), fill_slot::<V>(fill, Slot::Index(index), value)?))
            })
            .collect::<Result<Self>>()?;
        Ok(Box::new(copy))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ============================================================================
// Shared handles
// ============================================================================

impl<T: Typed> Typed for Rc<T> {
    const KIND: TypeKind = TypeKind::Shared;
}

impl<T: Reflect + Typed> Reflect for Rc<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Shared, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Rc::clone(self)))
    }

    fn identity(&self) -> Option<usize> {
        Some(Rc::as_ptr(self).cast::<()>() as usize)
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Rc::new(fill_slot::<T>(fill, Slot::Index(0), &**self)?)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<T: Typed> Typed for Arc<T> {
    const KIND: TypeKind = TypeKind::Shared;
}

impl<T: Reflect + Typed> Reflect for Arc<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Shared, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Arc::clone(self)))
    }

    fn identity(&self) -> Option<usize> {
        Some(Arc::as_ptr(self).cast::<()>() as usize)
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Arc::new(fill_slot::<T>(fill, Slot::Index(0), &**self)?)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ============================================================================
// Interior mutability
// ============================================================================

impl<T: Typed> Typed for RefCell<T> {
    const KIND: TypeKind = TypeKind::Cell;
}

impl<T: Reflect + Typed> Reflect for RefCell<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Cell, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let inner = self
            .try_borrow()
            .map_err(|e| Error::construction(type_name::<Self>(), e.to_string()))?;
        Ok(Box::new(RefCell::new(duplicate::<T>(&inner)?)))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let inner = self
            .try_borrow()
            .map_err(|e| Error::construction(type_name::<Self>(), e.to_string()))?;
        Ok(Box::new(RefCell::new(fill_slot::<T>(fill, Slot::Index(0), &*inner)?)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<T: Typed> Typed for Mutex<T> {
    const KIND: TypeKind = TypeKind::Cell;
}

/// Contents are read under a blocking `lock`. A mutex held by another thread
/// is waited for; one already held by the calling thread deadlocks or panics.
impl<T: Reflect + Typed> Reflect for Mutex<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Cell, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let inner = self
            .lock()
            .map_err(|e| Error::construction(type_name::<Self>(), e.to_string()))?;
        Ok(Box::new(Mutex::new(duplicate::<T>(&inner)?)))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let inner = self
            .lock()
            .map_err(|e| Error::construction(type_name::<Self>(), e.to_string()))?;
        Ok(Box::new(Mutex::new(fill_slot::<T>(fill, Slot::Index(0), &*inner)?)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<T: Typed> Typed for RwLock<T> {
    const KIND: TypeKind = TypeKind::Cell;
}

/// Contents are read under a blocking `read`, with the same waiting rules as
/// `Mutex`.
impl<T: Reflect + Typed> Reflect for RwLock<T> {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::container(type_name::<Self>(), TypeKind::Cell, T::KIND)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        let inner = self
            .read()
            .map_err(|e| Error::construction(type_name::<Self>(), e.to_string()))?;
        Ok(Box::new(RwLock::new(duplicate::<T>(&inner)?)))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        let inner = self
            .read()
            .map_err(|e| Error::construction(type_name::<Self>(), e.to_string()))?;
        Ok(Box::new(RwLock::new(fill_slot::<T>(fill, Slot::Index(0), &*inner)?)))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
