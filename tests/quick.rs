use avl_tree::{AvlTree, Node};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use std::collections::BTreeSet;

/// The kinds of operations applied to a tree during a property test.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(u8),
    Remove(u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(u8::arbitrary(g))
        } else {
            Op::Remove(u8::arbitrary(g))
        }
    }
}

// Applies the same operations to the tree and to a `BTreeSet` model, asserting that both
// agree on the outcome of every individual operation.
fn apply(ops: &[Op]) -> (AvlTree<u8>, BTreeSet<u8>) {
    let mut tree = AvlTree::new();
    let mut model = BTreeSet::new();
    for op in ops {
        match *op {
            Op::Insert(value) => {
                assert_eq!(tree.try_insert(value), model.insert(value));
            },
            Op::Remove(value) => {
                assert_eq!(tree.try_remove(&value).is_some(), model.remove(&value));
            },
        }
    }
    (tree, model)
}

// Checks the cached-height and balance invariants for every node of the subtree.
fn well_formed(node: &Node<u8>) -> bool {
    let left_height = node.left().map_or(0, Node::height);
    let right_height = node.right().map_or(0, Node::height);
    node.height() == 1 + left_height.max(right_height)
        && (left_height as i64 - right_height as i64).abs() <= 1
        && node.left().map_or(true, well_formed)
        && node.right().map_or(true, well_formed)
}

quickcheck! {
    fn prop_matches_model(ops: Vec<Op>) -> bool {
        let (tree, model) = apply(&ops);
        tree.len() == model.len()
            && tree.iter().eq(model.iter())
            && model.iter().all(|value| tree.contains(value))
    }

    fn prop_invariants_hold(ops: Vec<Op>) -> bool {
        let (tree, _) = apply(&ops);
        tree.is_balanced() && tree.root().map_or(true, well_formed)
    }

    fn prop_in_order_strictly_ascending(ops: Vec<Op>) -> bool {
        let (tree, _) = apply(&ops);
        let values: Vec<u8> = tree.iter().cloned().collect();
        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn prop_round_trip_empties_tree(values: Vec<u8>) -> bool {
        let mut tree = AvlTree::new();
        for value in &values {
            tree.try_insert(*value);
        }
        for value in &values {
            tree.try_remove(value);
        }
        tree.is_empty() && tree.root().is_none()
    }

    fn prop_duplicate_insert_rejected(values: Vec<u8>) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }
        let mut tree = AvlTree::new();
        for value in &values {
            tree.try_insert(*value);
        }
        let len = tree.len();
        let root = tree.root().map(|node| *node.value());
        let rejected = tree.insert(values[0]).is_err();
        TestResult::from_bool(
            rejected && tree.len() == len && tree.root().map(|node| *node.value()) == root,
        )
    }

    fn prop_successor_walks_in_order(ops: Vec<Op>) -> bool {
        let (tree, model) = apply(&ops);
        if tree.is_empty() {
            return true;
        }
        let mut walked = Vec::new();
        let mut curr = tree.get(tree.min().unwrap()).unwrap();
        loop {
            walked.push(*curr.value());
            match tree.successor(curr).unwrap() {
                Some(next) => curr = next,
                None => break,
            }
        }
        walked.iter().eq(model.iter())
    }
}
