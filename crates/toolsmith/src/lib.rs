//! Toolsmith umbrella crate.
//!
//! This crate re-exports all Toolsmith components for convenience.
//! Enable the `json` feature to clone `serde_json::Value` documents.

#![doc = include_str!("../README.md")]

pub use toolsmith_clone as clone;
pub use toolsmith_core as core;

pub use toolsmith_clone::{deep_clone, deep_clone_opt, reflect_leaf, reflect_struct};
