//! The recursive deep-copy engine.
//!
//! [`GraphCloner`] copies a value by asking the introspector which parts of
//! the concrete type are composite, then assembling a new value of that type
//! whose composite parts are recursive clones of the original's and whose
//! leaf parts are plain duplicates. Each value on the path is built once.
//!
//! # Graph shape
//!
//! Every composite reachable from the root is copied fresh. Two fields that
//! share one handle before cloning hold two separate copies afterwards.
//!
//! The input graph must be acyclic and of finite depth. With cycle
//! detection on (the default), re-entering a shared handle that is still
//! being copied fails with [`Error::CyclicGraphDetected`]. With it off, a
//! cycle recurses until the stack is exhausted.
//!
//! # Locks
//!
//! `Mutex` and `RwLock` contents are read under a blocking lock. A lock held
//! by another thread makes the clone wait for it. A lock already held by the
//! calling thread, including one re-entered through a cycle, deadlocks or
//! panics as the std lock does. A `RefCell` that is mutably borrowed fails
//! with [`Error::ConstructionFailure`] instead.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::descriptor::{TypeDescriptor, TypeKind};
use crate::error::{Error, Result};
use crate::introspect::{FieldIntrospector, LeafPolicy, TypeIntrospector};
use crate::reflect::{Reflect, Slot, downcast};

// ============================================================================
// Options
// ============================================================================

/// Tuning knobs for [`GraphCloner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloneOptions {
    /// Fail on cycles through shared handles instead of recursing forever.
    pub detect_cycles: bool,
    /// Maximum number of nested values on one traversal path, wrappers
    /// included. Unlimited when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Leaf/composite classification policy.
    #[serde(flatten)]
    pub leaf_policy: LeafPolicy,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            detect_cycles: true,
            max_depth: None,
            leaf_policy: LeafPolicy::default(),
        }
    }
}

impl CloneOptions {
    /// Enables or disables cycle detection.
    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    /// Limits traversal depth.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Sets the leaf policy.
    pub fn with_leaf_policy(mut self, policy: LeafPolicy) -> Self {
        self.leaf_policy = policy;
        self
    }
}

// ============================================================================
// GraphCloner
// ============================================================================

/// Traversal state for one clone call.
#[derive(Debug, Default)]
struct Walk {
    /// Identities of shared handles on the current path.
    active: HashSet<usize>,
    /// Number of values on the current path.
    depth: usize,
    /// Number of values copied so far.
    visited: usize,
}

/// Produces independent deep copies of reflected values.
///
/// The cloner holds no state between calls; one instance can serve any
/// number of clones, from any number of threads when its introspector
/// allows it.
#[derive(Debug, Clone, Default)]
pub struct GraphCloner<I = FieldIntrospector> {
    introspector: I,
    options: CloneOptions,
}

impl GraphCloner {
    /// Creates a cloner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cloner with `options`, using the field-table introspector.
    pub fn with_options(options: CloneOptions) -> Self {
        Self {
            introspector: FieldIntrospector::new(options.leaf_policy),
            options,
        }
    }
}

impl<I: TypeIntrospector> GraphCloner<I> {
    /// Creates a cloner with a custom introspector.
    ///
    /// `options.leaf_policy` is ignored; classification is up to
    /// `introspector`.
    pub fn with_introspector(introspector: I, options: CloneOptions) -> Self {
        Self {
            introspector,
            options,
        }
    }

    /// Returns the active options.
    pub fn options(&self) -> &CloneOptions {
        &self.options
    }

    /// Returns the introspector.
    pub fn introspector(&self) -> &I {
        &self.introspector
    }

    /// Deep-clones a value of any reflected type.
    ///
    /// The result has the same concrete type as `value`.
    pub fn clone_value(&self, value: &dyn Reflect) -> Result<Box<dyn Reflect>> {
        let mut walk = Walk::default();
        let copy = self.visit(value, &mut walk)?;
        log::debug!(
            "Cloned {} ({} values copied)",
            value.type_descriptor().name,
            walk.visited
        );
        Ok(copy)
    }

    /// Deep-clones `value`.
    pub fn deep_clone<T: Reflect>(&self, value: &T) -> Result<T> {
        let copy = self.clone_value(value)?;
        downcast::<T>(copy)
    }

    /// Deep-clones a possibly absent value. Absent input yields absent
    /// output without allocating.
    pub fn deep_clone_opt<T: Reflect>(&self, value: Option<&T>) -> Result<Option<T>> {
        value.map(|value| self.deep_clone(value)).transpose()
    }

    fn visit(&self, value: &dyn Reflect, walk: &mut Walk) -> Result<Box<dyn Reflect>> {
        let descriptor = value.type_descriptor();

        if let Some(limit) = self.options.max_depth {
            if walk.depth >= limit {
                return Err(Error::DepthLimitExceeded { limit });
            }
        }

        let identity = if self.options.detect_cycles {
            value.identity()
        } else {
            None
        };
        if let Some(id) = identity {
            if !walk.active.insert(id) {
                return Err(Error::CyclicGraphDetected {
                    type_name: descriptor.name,
                });
            }
        }

        log::trace!(
            "Cloning {} ({}) at depth {}",
            descriptor.name,
            descriptor.kind,
            walk.depth
        );
        walk.depth += 1;
        walk.visited += 1;
        let result = self.rebuild(value, &descriptor, walk);
        walk.depth -= 1;
        if let Some(id) = identity {
            walk.active.remove(&id);
        }
        result
    }

    fn rebuild(
        &self,
        value: &dyn Reflect,
        descriptor: &TypeDescriptor,
        walk: &mut Walk,
    ) -> Result<Box<dyn Reflect>> {
        match descriptor.kind {
            TypeKind::Struct => {
                let fields = self.introspector.classify(descriptor);
                value.duplicate_with(&mut |slot: Slot<'_>, inner: &dyn Reflect| {
                    let field = match slot {
                        Slot::Field(name) => fields.iter().find(|field| field.name == name),
                        Slot::Index(_) => None,
                    };
                    match field {
                        Some(field) if field.composite => self.visit(inner, walk),
                        Some(_) => inner.shallow_duplicate(),
                        None => Err(Error::unknown_slot(descriptor.name, slot)),
                    }
                })
            }
            kind if kind.is_container() => {
                // A shared handle is always re-allocated, even around a leaf.
                let element = descriptor.element.unwrap_or(TypeKind::Dynamic);
                if kind == TypeKind::Shared || self.introspector.is_composite(element) {
                    value.duplicate_with(&mut |_: Slot<'_>, inner: &dyn Reflect| {
                        self.visit(inner, walk)
                    })
                } else {
                    value.shallow_duplicate()
                }
            }
            _ => value.shallow_duplicate(),
        }
    }
}
