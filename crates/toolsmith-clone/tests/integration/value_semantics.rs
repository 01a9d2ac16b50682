//! Integration tests for leaf copying, composite independence, and static
//! fields.

use std::rc::Rc;
use std::sync::atomic::Ordering;

use toolsmith_clone::{CloneOptions, Error, GraphCloner, LeafPolicy, deep_clone};

use crate::common::{Account, Connection, Marker, OPENED, Socket, Status};

#[test]
fn test_leaves_are_equal() {
    let original = Account::open(7, "ada");
    let copy = deep_clone(&original).unwrap();

    assert_eq!(copy.id, 7);
    assert_eq!(copy.owner, "ada");
    assert_eq!(copy.balance.to_bits(), original.balance.to_bits());
    assert_eq!(copy.status, Status::Active);
    assert_eq!(copy, original);
}

#[test]
fn test_composites_are_distinct() {
    let original = Account::open(8, "grace");
    let copy = deep_clone(&original).unwrap();

    assert!(!Rc::ptr_eq(&copy.profile, &original.profile));
    assert_eq!(copy.profile.email, "grace@example.com");
    assert_eq!(*copy.profile.score, 7);
    assert_ne!(copy.tags.as_ptr(), original.tags.as_ptr());
}

#[test]
fn test_static_fields_are_untouched() {
    let original = Account::open(9, "linus");
    let before = OPENED.load(Ordering::SeqCst);

    let _copy = deep_clone(&original).unwrap();

    assert_eq!(OPENED.load(Ordering::SeqCst), before);
}

#[test]
fn test_fieldless_struct() {
    let copy = deep_clone(&Marker {}).unwrap();
    assert_eq!(copy, Marker {});
}

#[test]
fn test_strings_as_composites_give_equal_copy() {
    let options = CloneOptions::default().with_leaf_policy(LeafPolicy {
        strings_as_leaves: false,
    });
    let original = Account::open(10, "barbara");
    let copy = GraphCloner::with_options(options)
        .deep_clone(&original)
        .unwrap();

    assert_eq!(copy, original);
}

#[test]
fn test_construction_failure_propagates() {
    let original = Connection {
        name: "db".into(),
        socket: Rc::new(Socket { fd: 3 }),
    };

    let err = deep_clone(&original).unwrap_err();
    assert_eq!(err, Error::construction("Socket", "handle cannot be copied"));
    assert!(!err.is_precondition_violation());
}

#[test]
fn test_cloner_is_reusable() {
    let cloner = GraphCloner::new();
    let first = Account::open(1, "a");
    let second = Account::open(2, "b");

    assert_eq!(cloner.deep_clone(&first).unwrap(), first);
    assert_eq!(cloner.deep_clone(&second).unwrap(), second);
    assert_eq!(cloner.deep_clone(&first).unwrap(), first);
}
