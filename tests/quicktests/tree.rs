use bstree::{Node, Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Delete(x) => {
                assert_eq!(bst.delete(x).is_ok(), set.remove(x));
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether every node lies strictly between the bounds set by its ancestors.
fn is_ordered<T: Ord>(node: Option<&Node<T>>, lo: Option<&T>, hi: Option<&T>) -> bool {
    let Some(node) = node else {
        return true;
    };
    lo.map_or(true, |lo| lo < node.value())
        && hi.map_or(true, |hi| node.value() < hi)
        && is_ordered(node.left(), lo, Some(node.value()))
        && is_ordered(node.right(), Some(node.value()), hi)
}

fn sorted_unique(xs: &[i8]) -> Vec<i8> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

fn values(tree: &Tree<i8>) -> Vec<i8> {
    tree.in_order().into_iter().copied().collect()
}

#[quickcheck]
fn build_yields_sorted_unique(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());

    values(&tree) == sorted_unique(&xs) && tree.len() == sorted_unique(&xs).len()
}

#[quickcheck]
fn build_is_minimal_height(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs);

    tree.is_fully_balanced()
        && tree.root().map(Node::height) == (!tree.is_empty()).then(|| tree.len().ilog2() as usize)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    let mut set: BTreeSet<_> = xs.into_iter().collect();

    do_ops(&ops, &mut tree, &mut set);

    is_ordered(tree.root(), None, None)
        && tree.len() == set.len()
        && values(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter()
        .all(|x| tree.find(x).map(|node| node.value()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn delete_present(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.clone());

    xs.iter().all(|x| {
        if !tree.contains(x) {
            // Duplicate in `xs`, deleted already.
            return tree.delete(x).is_err();
        }
        let before = tree.len();
        let deleted = tree.delete(x) == Ok(*x);

        deleted
            && tree.find(x).is_none()
            && tree.len() == before - 1
            && is_ordered(tree.root(), None, None)
    }) && tree.is_empty()
}

#[quickcheck]
fn delete_absent_is_noop(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::from_values(xs.into_iter().filter(|y| *y != x));
    let before = values(&tree);
    let expected = if tree.is_empty() {
        TreeError::EmptyTree
    } else {
        TreeError::NotFound
    };

    tree.delete(&x) == Err(expected) && values(&tree) == before
}

#[quickcheck]
fn rebalance_restores_minimal_height(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    let mut set: BTreeSet<_> = xs.into_iter().collect();
    do_ops(&ops, &mut tree, &mut set);
    let before = values(&tree);

    tree.rebalance();

    let height = tree.root().map(Node::height);
    let minimal = (!tree.is_empty()).then(|| tree.len().ilog2() as usize);

    height == minimal && tree.is_balanced() && values(&tree) == before
}

#[quickcheck]
fn depth_and_height_agree(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs);
    let full = tree.root().map(Node::height);

    tree.in_order().into_iter().all(|x| {
        match (tree.depth(x), tree.height(x)) {
            (Some(depth), Some(height)) => Some(depth + height) <= full,
            _ => false,
        }
    })
}
