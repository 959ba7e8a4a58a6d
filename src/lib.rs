//! A Binary Search Tree that is built balanced from a collection of values and can be
//! re-balanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because both comparisons are strict, a value is stored at most once.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). A [`Tree`] built with
//! [`Tree::from_values`] has height `floor(lg N)`. Inserting and deleting never restructure the
//! tree, so it can drift away from that; [`Tree::rebalance`] rebuilds it. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree (see [`Tree::in_order`]).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod input;
mod render;
mod traversal;
mod tree;

pub use error::TreeError;
pub use input::parse_values;
pub use traversal::LevelOrder;
pub use tree::{Node, Tree};
