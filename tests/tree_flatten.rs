//! Tree-flattening construction tests
//!
//! Verifies pre-order materialization, pruning of non-node values and
//! independence from the source after construction.

use std::cell::Cell;

use seqwalk::{from_fn, ElementWalker, SequenceIterator, Traversal};
use test_helpers::*;

#[test]
fn test_root_with_two_leaves() {
    let root = Labelled::node(
        "root",
        vec![Labelled::node("child1", vec![]), Labelled::node("child2", vec![])],
    );
    let mut seq = SequenceIterator::from_tree(&labelled_source(), root);
    assert_eq!(labels(&mut seq), vec!["root", "child1", "child2"]);
}

#[test]
fn test_preorder_left_to_right() {
    let root = Labelled::node(
        "a",
        vec![
            Labelled::node("b", vec![Labelled::node("d", vec![]), Labelled::node("e", vec![])]),
            Labelled::node("c", vec![Labelled::node("f", vec![])]),
        ],
    );
    let mut seq = SequenceIterator::from_tree(&labelled_source(), root);
    assert_eq!(labels(&mut seq), vec!["a", "b", "d", "e", "c", "f"]);
}

#[test]
fn test_opaque_values_are_pruned_with_subtrees() {
    let root = Labelled::node(
        "a",
        vec![
            Labelled::opaque("text", vec![Labelled::node("hidden", vec![])]),
            Labelled::node("b", vec![]),
        ],
    );
    let mut seq = SequenceIterator::from_tree(&labelled_source(), root);
    assert_eq!(labels(&mut seq), vec!["a", "b"]);
}

#[test]
fn test_opaque_root_gives_empty_sequence() {
    let root = Labelled::opaque("text", vec![Labelled::node("child", vec![])]);
    let mut seq = SequenceIterator::from_tree(&labelled_source(), root);
    assert!(!seq.has_next());
    assert_eq!(seq.next(), None);
}

#[test]
fn test_materialization_happens_at_construction() {
    let calls = Cell::new(0usize);
    let source = from_fn(
        |n: &u8| *n < 4,
        |n: &u8| {
            calls.set(calls.get() + 1);
            vec![n + 1]
        },
    );

    let mut seq = SequenceIterator::from_tree(&source, 0);
    let after_build = calls.get();
    assert_eq!(after_build, 4);

    while seq.next().is_some() {}
    seq.reset();
    while seq.next().is_some() {}
    assert_eq!(calls.get(), after_build, "source must not be consulted again");
}

#[test]
fn test_document_walk_in_document_order() {
    let doc = sample_document();
    let mut walk = SequenceIterator::from_tree(&ElementWalker, &doc);
    assert_eq!(walk.total_len(), 6);

    let tags: Vec<_> = std::iter::from_fn(|| walk.next())
        .filter_map(|node| node.as_element())
        .map(|e| e.tag.as_str())
        .collect();
    assert_eq!(tags, vec!["html", "head", "title", "body", "h1", "p"]);
}

#[test]
fn test_elements_restart() {
    let doc = sample_document();
    let mut elements = doc.elements();
    let first: Vec<_> = elements.by_ref().map(|e| e.tag.clone()).collect();

    elements.reset();
    assert_eq!(elements.peek().map(|e| e.tag.as_str()), Some("html"));
    let second: Vec<_> = elements.map(|e| e.tag.clone()).collect();
    assert_eq!(first, second);

    let p = doc.elements().last().expect("p element");
    assert_eq!(p.attribute("class"), Some("intro"));
}
