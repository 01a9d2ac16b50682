//! Uniquely owned recursive structures.

use toolsmith_clone::{CloneOptions, Error, GraphCloner, deep_clone};

use crate::common::{TALLY_COPIES, chain_values, owned_chain};

fn copies() -> usize {
    TALLY_COPIES.with(|copies| copies.get())
}

#[test]
fn test_owned_chain_copy_is_independent() {
    let original = owned_chain([1, 2, 3].into_iter());
    let mut copy = deep_clone(&original).unwrap();
    assert_eq!(chain_values(&copy), vec![1, 2, 3]);

    let second = copy.as_mut().unwrap().next.as_mut().unwrap();
    second.tally.0 = 99;

    assert_eq!(chain_values(&copy), vec![1, 99, 3]);
    assert_eq!(chain_values(&original), vec![1, 2, 3]);
}

#[test]
fn test_owned_chain_nodes_copied_once() {
    let original = owned_chain(0..64);
    let before = copies();
    let copy = deep_clone(&original).unwrap();

    assert_eq!(copies() - before, 64);
    assert_eq!(chain_values(&copy), (0..64).collect::<Vec<_>>());
}

#[test]
fn test_long_owned_chain_hits_depth_limit() {
    let original = owned_chain(0..100_000);
    let before = copies();
    let cloner = GraphCloner::with_options(CloneOptions::default().with_max_depth(32));

    let err = cloner.deep_clone(&original).unwrap_err();

    assert_eq!(err, Error::DepthLimitExceeded { limit: 32 });
    // Option, Box, and Chain each take a level, so the walk stops after
    // the tenth node.
    assert_eq!(copies() - before, 10);
}

#[test]
fn test_depth_limit_counts_owned_levels() {
    // The outer Option, the Box, the Chain, and its empty `next` each take
    // a level. The tally is a leaf and is not counted.
    let original = owned_chain([5].into_iter());
    let cloner = GraphCloner::with_options(CloneOptions::default().with_max_depth(3));
    assert!(cloner.deep_clone(&original).is_err());

    let cloner = GraphCloner::with_options(CloneOptions::default().with_max_depth(4));
    let copy = cloner.deep_clone(&original).unwrap();
    assert_eq!(chain_values(&copy), vec![5]);
}
