//! Error paths reachable through the public API.

use std::any::Any;

use toolsmith_clone::{
    Error, FieldDescriptor, FillFn, Reflect, Result, Slot, TypeDescriptor, TypeKind, downcast,
    fill_slot,
};

use crate::common::Marker;

/// Offers its only field under a name its descriptor does not list.
#[derive(Debug)]
struct Renamed {
    value: Vec<u8>,
}

const RENAMED_FIELDS: &[FieldDescriptor] =
    &[FieldDescriptor::instance("value", "Vec<u8>", TypeKind::Sequence)];

impl Reflect for Renamed {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::structure("Renamed", RENAMED_FIELDS)
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Renamed {
            value: self.value.clone(),
        }))
    }

    fn duplicate_with(&self, fill: &mut FillFn<'_>) -> Result<Box<dyn Reflect>> {
        Ok(Box::new(Renamed {
            value: fill_slot(fill, Slot::Field("bytes"), &self.value)?,
        }))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[test]
fn test_unknown_field_slot() {
    let err = toolsmith_clone::deep_clone(&Renamed { value: vec![1] }).unwrap_err();
    assert!(matches!(err, Error::UnknownSlot { .. }));
    assert_eq!(err.to_string(), "Renamed has no slot `bytes`");
}

#[test]
fn test_absent_option_never_fills() {
    let value: Option<String> = None;
    let copy = value
        .duplicate_with(&mut |slot: Slot<'_>, _: &dyn Reflect| {
            Err(Error::unknown_slot("Option", slot))
        })
        .unwrap();
    assert_eq!(downcast::<Option<String>>(copy).unwrap(), None);
}

#[test]
fn test_fill_with_wrong_type() {
    let values = vec![String::from("a")];
    let err = values
        .duplicate_with(&mut |_: Slot<'_>, _: &dyn Reflect| Ok(Box::new(5_i64)))
        .err().unwrap();
    assert_eq!(
        err,
        Error::TypeMismatch {
            expected: "alloc::string::String",
            found: "i64",
        }
    );
    assert_eq!(values, vec!["a".to_string()]);
}

#[test]
fn test_fill_error_propagates() {
    let values = vec![1_u32, 2, 3];
    let mut calls = 0;
    let err = values
        .duplicate_with(&mut |_: Slot<'_>, inner: &dyn Reflect| {
            calls += 1;
            if calls == 2 {
                return Err(Error::construction("u32", "refused"));
            }
            inner.shallow_duplicate()
        })
        .err().unwrap();
    assert!(matches!(err, Error::ConstructionFailure { .. }));
    assert_eq!(calls, 2);
}

#[test]
fn test_downcast_into_wrong_type() {
    let boxed: Box<dyn Reflect> = Box::new(Marker {});
    let err = downcast::<u8>(boxed).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: "u8", .. }));
}

#[test]
#[allow(clippy::panic)]
fn test_poisoned_mutex_is_construction_failure() {
    use std::sync::{Arc, Mutex};

    let shared = Arc::new(Mutex::new(vec![1_u8]));
    let poisoner = Arc::clone(&shared);
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.lock().unwrap();
        panic!("poison the lock");
    })
    .join();

    let err = toolsmith_clone::deep_clone(&shared).unwrap_err();
    assert!(matches!(err, Error::ConstructionFailure { .. }));
}
