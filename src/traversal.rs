//! Traversals over a [`Tree`]. Every traversal returns the values it visited in visit order, and
//! has a `_with` variant that also hands each [`Node`] to a visitor as it goes.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! //       4
//! //     /   \
//! //    2     6
//! //   / \   /
//! //  1   3 5
//! let tree = Tree::from_values(1..=6);
//!
//! assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5]);
//! assert_eq!(tree.in_order(), vec![&1, &2, &3, &4, &5, &6]);
//! assert_eq!(tree.pre_order(), vec![&4, &6, &5, &2, &3, &1]);
//! assert_eq!(tree.post_order(), vec![&1, &3, &2, &5, &6, &4]);
//!
//! let mut leaves = 0;
//! tree.in_order_with(|node| leaves += usize::from(node.is_leaf()));
//! assert_eq!(leaves, 3);
//! ```

use std::collections::VecDeque;

use crate::tree::{Node, Tree};

/// Breadth-first iterator over the nodes of a tree, one depth at a time and left to right within
/// a depth. Created by [`Tree::iter_level_order`].
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

fn in_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F, out: &mut Vec<&'a T>)
where
    F: FnMut(&Node<T>),
{
    let Some(node) = node else {
        return;
    };
    in_order(node.left(), visit, out);
    visit(node);
    out.push(node.value());
    in_order(node.right(), visit, out);
}

/// Visits the node, then the right subtree, then the left subtree.
fn pre_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F, out: &mut Vec<&'a T>)
where
    F: FnMut(&Node<T>),
{
    let Some(node) = node else {
        return;
    };
    visit(node);
    out.push(node.value());
    pre_order(node.right(), visit, out);
    pre_order(node.left(), visit, out);
}

fn post_order<'a, T, F>(node: Option<&'a Node<T>>, visit: &mut F, out: &mut Vec<&'a T>)
where
    F: FnMut(&Node<T>),
{
    let Some(node) = node else {
        return;
    };
    post_order(node.left(), visit, out);
    post_order(node.right(), visit, out);
    visit(node);
    out.push(node.value());
}

impl<T> Tree<T> {
    /// Iterates over the nodes breadth-first, starting at the root.
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }

    /// Values in breadth-first order.
    pub fn level_order(&self) -> Vec<&T> {
        self.level_order_with(|_| {})
    }

    /// Values in breadth-first order, calling `visit` on each node as it is dequeued.
    pub fn level_order_with<F>(&self, mut visit: F) -> Vec<&T>
    where
        F: FnMut(&Node<T>),
    {
        self.iter_level_order()
            .map(|node| {
                visit(node);
                node.value()
            })
            .collect()
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        self.in_order_with(|_| {})
    }

    /// Values in ascending order, calling `visit` on each node between its left and right
    /// subtrees.
    pub fn in_order_with<F>(&self, mut visit: F) -> Vec<&T>
    where
        F: FnMut(&Node<T>),
    {
        let mut out = Vec::with_capacity(self.len());
        in_order(self.root(), &mut visit, &mut out);
        out
    }

    /// Values with each node ahead of its subtrees. The right subtree is visited before the left
    /// one.
    pub fn pre_order(&self) -> Vec<&T> {
        self.pre_order_with(|_| {})
    }

    /// Like [`Tree::pre_order`], calling `visit` on each node before either of its subtrees.
    pub fn pre_order_with<F>(&self, mut visit: F) -> Vec<&T>
    where
        F: FnMut(&Node<T>),
    {
        let mut out = Vec::with_capacity(self.len());
        pre_order(self.root(), &mut visit, &mut out);
        out
    }

    /// Values with each node after both of its subtrees (left, then right).
    pub fn post_order(&self) -> Vec<&T> {
        self.post_order_with(|_| {})
    }

    /// Like [`Tree::post_order`], calling `visit` on each node after both of its subtrees.
    pub fn post_order_with<F>(&self, mut visit: F) -> Vec<&T>
    where
        F: FnMut(&Node<T>),
    {
        let mut out = Vec::with_capacity(self.len());
        post_order(self.root(), &mut visit, &mut out);
        out
    }
}
