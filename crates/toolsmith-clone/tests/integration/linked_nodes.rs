//! Integration tests over linked node chains.

use std::rc::Rc;

use toolsmith_clone::{CloneOptions, Error, GraphCloner, deep_clone, deep_clone_opt};

use crate::common::{Node, NodeRef, chain, node};

fn walk(head: &NodeRef) -> Vec<NodeRef> {
    let mut out = vec![Rc::clone(head)];
    loop {
        let next = out.last().and_then(|n| n.borrow().next.clone());
        match next {
            Some(n) => out.push(n),
            None => return out,
        }
    }
}

#[test]
fn test_chain_copy_is_independent() {
    let nodes = chain(&[1, 2, 3]);
    let original = Node {
        value: 1,
        next: nodes[0].borrow().next.clone(),
    };

    let copy = deep_clone(&original).unwrap();
    assert_eq!(copy, original);

    let copied_second = copy.next.as_ref().unwrap();
    copied_second.borrow_mut().value = 99;

    assert_eq!(nodes[1].borrow().value, 2);
    assert_eq!(copied_second.borrow().value, 99);
}

#[test]
fn test_chain_copy_has_no_shared_nodes() {
    let nodes = chain(&[10, 20, 30, 40]);
    let copy = deep_clone(&nodes[0]).unwrap();

    let copied = walk(&copy);
    assert_eq!(copied.len(), nodes.len());
    for (a, b) in nodes.iter().zip(&copied) {
        assert_eq!(a.borrow().value, b.borrow().value);
        assert!(!Rc::ptr_eq(a, b));
    }
}

#[test]
fn test_mutating_original_does_not_reach_copy() {
    let nodes = chain(&[1, 2, 3]);
    let copy = deep_clone(&nodes[0]).unwrap();

    nodes[2].borrow_mut().value = -1;
    nodes[0].borrow_mut().next = None;

    let copied = walk(&copy);
    let values: Vec<i64> = copied.iter().map(|n| n.borrow().value).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_absent_root_yields_absent_copy() {
    let copy = deep_clone_opt::<NodeRef>(None).unwrap();
    assert!(copy.is_none());

    let single = node(4);
    let copy = deep_clone_opt(Some(&single)).unwrap().unwrap();
    assert_eq!(copy, single);
}

#[test]
fn test_cycle_is_reported() {
    let nodes = chain(&[1, 2, 3]);
    nodes[2].borrow_mut().next = Some(Rc::clone(&nodes[0]));

    let err = deep_clone(&nodes[0]).unwrap_err();
    assert!(matches!(err, Error::CyclicGraphDetected { .. }));
    assert!(err.is_precondition_violation());

    // Break the cycle so the nodes are freed.
    nodes[2].borrow_mut().next = None;
}

#[test]
fn test_self_loop_is_reported() {
    let single = node(1);
    single.borrow_mut().next = Some(Rc::clone(&single));

    let err = deep_clone(&single).unwrap_err();
    assert!(matches!(err, Error::CyclicGraphDetected { .. }));

    single.borrow_mut().next = None;
}

#[test]
fn test_long_chain_hits_depth_limit() {
    let nodes = chain(&(0..50).collect::<Vec<_>>());
    let cloner = GraphCloner::with_options(CloneOptions::default().with_max_depth(32));

    let err = cloner.deep_clone(&nodes[0]).unwrap_err();
    assert_eq!(err, Error::DepthLimitExceeded { limit: 32 });

    let short = chain(&[1, 2]);
    assert_eq!(cloner.deep_clone(&short[0]).unwrap(), short[0]);
}
