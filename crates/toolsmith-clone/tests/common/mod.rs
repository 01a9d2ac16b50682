//! Shared fixtures for toolsmith-clone tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::AtomicUsize;

use toolsmith_clone::{
    Error, Reflect, Result, TypeDescriptor, TypeKind, Typed, reflect_leaf, reflect_struct,
};

/// Linked node with a shared, mutable successor.
#[derive(Debug, PartialEq)]
pub struct Node {
    pub value: i64,
    pub next: Option<Rc<RefCell<Node>>>,
}

reflect_struct!(Node {
    value: i64,
    next: Option<Rc<RefCell<Node>>>,
});

/// Shared handle to a [`Node`].
pub type NodeRef = Rc<RefCell<Node>>;

/// Creates a detached node handle.
pub fn node(value: i64) -> NodeRef {
    Rc::new(RefCell::new(Node { value, next: None }))
}

/// Builds `n1 -> n2 -> ...` from `values` and returns every handle in order.
pub fn chain(values: &[i64]) -> Vec<NodeRef> {
    let handles: Vec<NodeRef> = values.iter().copied().map(node).collect();
    for pair in handles.windows(2) {
        pair[0].borrow_mut().next = Some(Rc::clone(&pair[1]));
    }
    handles
}

/// Field-less enum copied by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Retired,
}

reflect_leaf!(Enum => Status);

/// Number of `Account` values created through [`Account::open`].
pub static OPENED: AtomicUsize = AtomicUsize::new(0);

/// Mix of leaves, composites, and a type-level counter.
#[derive(Debug, PartialEq)]
pub struct Account {
    pub id: u64,
    pub owner: String,
    pub balance: f64,
    pub status: Status,
    pub tags: Vec<String>,
    pub profile: Rc<Profile>,
}

reflect_struct!(Account {
    id: u64,
    owner: String,
    balance: f64,
    status: Status,
    tags: Vec<String>,
    profile: Rc<Profile>,
} statics {
    OPENED: AtomicUsize,
});

impl Account {
    /// Opens an account and bumps [`OPENED`].
    pub fn open(id: u64, owner: &str) -> Self {
        OPENED.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Self {
            id,
            owner: owner.to_string(),
            balance: 12.5,
            status: Status::Active,
            tags: vec!["retail".into(), "eu".into()],
            profile: Rc::new(Profile {
                email: format!("{owner}@example.com"),
                score: Box::new(7),
            }),
        }
    }
}

/// Nested composite held by [`Account`].
#[derive(Debug, PartialEq)]
pub struct Profile {
    pub email: String,
    pub score: Box<u32>,
}

reflect_struct!(Profile {
    email: String,
    score: Box<u32>,
});

/// Struct without instance fields.
#[derive(Debug, PartialEq)]
pub struct Marker {}

reflect_struct!(Marker {});

/// Resource whose duplicate cannot be constructed.
#[derive(Debug, PartialEq)]
pub struct Socket {
    pub fd: i32,
}

impl Typed for Socket {
    const KIND: TypeKind = TypeKind::Struct;
}

impl Reflect for Socket {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::structure("Socket", &[])
    }

    fn shallow_duplicate(&self) -> Result<Box<dyn Reflect>> {
        Err(Error::construction("Socket", "handle cannot be copied"))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
        self
    }
}

/// Holds a [`Socket`] two levels down.
#[derive(Debug)]
pub struct Connection {
    pub name: String,
    pub socket: Rc<Socket>,
}

reflect_struct!(Connection {
    name: String,
    socket: Rc<Socket>,
});

thread_local! {
    /// Number of [`Tally`] copies made on the current thread.
    pub static TALLY_COPIES: Cell<usize> = const { Cell::new(0) };
}

/// Integer leaf that counts its copies.
#[derive(Debug, PartialEq)]
pub struct Tally(pub i64);

impl Clone for Tally {
    fn clone(&self) -> Self {
        TALLY_COPIES.with(|copies| copies.set(copies.get() + 1));
        Tally(self.0)
    }
}

reflect_leaf!(Integer => Tally);

/// Uniquely owned singly linked list node.
#[derive(Debug, PartialEq)]
pub struct Chain {
    pub tally: Tally,
    pub next: Option<Box<Chain>>,
}

reflect_struct!(Chain {
    tally: Tally,
    next: Option<Box<Chain>>,
});

impl Drop for Chain {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Builds an owned list holding `values` in order.
pub fn owned_chain(values: impl DoubleEndedIterator<Item = i64>) -> Option<Box<Chain>> {
    let mut head = None;
    for value in values.rev() {
        head = Some(Box::new(Chain {
            tally: Tally(value),
            next: head,
        }));
    }
    head
}

/// Reads the values of an owned list in order.
pub fn chain_values(head: &Option<Box<Chain>>) -> Vec<i64> {
    let mut values = Vec::new();
    let mut current = head.as_deref();
    while let Some(node) = current {
        values.push(node.tally.0);
        current = node.next.as_deref();
    }
    values
}
