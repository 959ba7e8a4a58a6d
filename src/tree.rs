//! An owned BST built once from a collection of values. Construction sorts and deduplicates the
//! values and then repeatedly picks the midpoint as the subtree root, so a freshly built tree has
//! minimal height. Later inserts don't rebalance anything; call [`Tree::rebalance`] to get back
//! to a minimal-height tree.
//!
//! # Examples
//!
//! ```
//! use bstree::{Tree, TreeError};
//!
//! let mut tree = Tree::from_values(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//!
//! // Duplicates are dropped on construction.
//! assert_eq!(tree.len(), 11);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(8));
//!
//! // Inserting a value that's already present does nothing.
//! assert!(!tree.insert(8));
//! assert!(tree.insert(2));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&9), Ok(9));
//! assert_eq!(tree.delete(&9), Err(TreeError::NotFound));
//! assert!(tree.find(&9).is_none());
//! ```

use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace};

use crate::error::TreeError;

/// An owning slot that is either empty or holds a child subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`Tree`]. Nodes are only handed out by shared reference so the tree's
/// ordering can't be broken from outside.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, whose values are all smaller than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all larger than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has a height
    /// of 0.
    pub fn height(&self) -> usize {
        link_height(&self.left)
            .max(link_height(&self.right))
            .map_or(0, |h| h + 1)
    }

    /// Moves every value of this subtree into `out` in ascending order.
    fn drain_in_order(self, out: &mut Vec<T>) {
        let Self { value, left, right } = self;
        if let Some(left) = left {
            (*left).drain_in_order(out);
        }
        out.push(value);
        if let Some(right) = right {
            (*right).drain_in_order(out);
        }
    }
}

/// Height of the subtree in `link`, or `None` for an empty slot (which is one shorter than a
/// leaf).
fn link_height<T>(link: &Link<T>) -> Option<usize> {
    link.as_deref().map(Node::height)
}

/// Builds a minimal-height subtree out of strictly ascending values.
fn build<T>(mut sorted: Vec<T>) -> Link<T> {
    if sorted.is_empty() {
        return None;
    }

    let mid = sorted.len() / 2;
    let right = sorted.split_off(mid + 1);
    let value = sorted.pop()?;

    Some(Box::new(Node {
        value,
        left: build(sorted),
        right: build(right),
    }))
}

fn insert_into<T: Ord>(slot: &mut Link<T>, value: T) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(Node::new(value)));
            true
        }
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => insert_into(&mut node.left, value),
            Ordering::Equal => false,
            Ordering::Greater => insert_into(&mut node.right, value),
        },
    }
}

/// Walks down to the slot holding `value` and removes it from there. The root field acts as the
/// slot for the root so no parent reference is ever needed.
fn delete_from<T: Ord>(slot: &mut Link<T>, value: &T) -> Result<T, TreeError> {
    let Some(node) = slot else {
        return Err(TreeError::NotFound);
    };

    match value.cmp(&node.value) {
        Ordering::Less => delete_from(&mut node.left, value),
        Ordering::Greater => delete_from(&mut node.right, value),
        Ordering::Equal => remove_node(slot).ok_or(TreeError::NotFound),
    }
}

/// Removes the node occupying `slot` and returns its value.
///
/// With two children the node itself stays put: it takes over its in-order successor's value
/// and the successor node is unlinked instead.
fn remove_node<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;

    if node.left.is_some() && node.right.is_some() {
        trace!("promoting in-order successor");
        let successor = take_leftmost(&mut node.right)?;
        return Some(mem::replace(&mut node.value, successor));
    }

    let Node { value, left, right } = *slot.take()?;
    if left.is_none() && right.is_none() {
        trace!("detaching leaf");
    } else {
        trace!("splicing lone child into parent slot");
    }
    *slot = left.or(right);
    Some(value)
}

/// Unlinks the leftmost node below `slot`, splicing its right child into the slot it leaves
/// behind. That slot is `slot` itself when the leftmost node is the subtree root.
fn take_leftmost<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() {
        return take_leftmost(&mut node.left);
    }

    let Node { value, right, .. } = *slot.take()?;
    *slot = right;
    Some(value)
}

/// Height of the subtree plus one (so an empty subtree is 0), or `None` if any node below has
/// children whose heights differ by more than one.
fn balanced_levels<T>(node: Option<&Node<T>>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = balanced_levels(node.left())?;
    let right = balanced_levels(node.right())?;

    (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
}

/// A Binary Search Tree holding unique values. It can be used for inserting, finding, deleting
/// and traversing values, and can be rebuilt to minimal height on demand.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree from an arbitrary collection of values. Duplicates are dropped.
    ///
    /// The root of every subtree is the middle element (rounding up) of the sorted values it
    /// covers, so the result is the same for any ordering of the same input.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values([3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut sorted: Vec<T> = values.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self::from_sorted(sorted)
    }

    /// Builds from values that are already strictly ascending.
    fn from_sorted(sorted: Vec<T>) -> Self {
        let len = sorted.len();
        let root = build(sorted);
        debug!(len, height = ?link_height(&root), "built tree");
        Self { root, len }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf in its sorted position. Returns `false`, leaving the tree
    /// alone, if the value is already present.
    ///
    /// The tree is not rebalanced afterwards, so a run of ascending inserts produces a long
    /// right spine.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = insert_into(&mut self.root, value);
        if inserted {
            self.len += 1;
        } else {
            trace!("value already present, skipping insert");
        }
        inserted
    }

    /// Deletes the node holding `value` and returns the value it held. If there is no such node
    /// the tree is left untouched and the error says why.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.delete(&1), Err(TreeError::EmptyTree));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.delete(&2), Err(TreeError::NotFound));
    /// assert_eq!(tree.delete(&1), Ok(1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        if self.root.is_none() {
            debug!("delete on empty tree");
            return Err(TreeError::EmptyTree);
        }

        let removed = delete_from(&mut self.root, value);
        match removed {
            Ok(_) => self.len -= 1,
            Err(ref err) => debug!(%err, "delete skipped"),
        }
        removed
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether some node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Height of the node holding `value` (see [`Node::height`]), or `None` if it isn't in the
    /// tree.
    pub fn height(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(value).map(Node::height)
    }

    /// Number of edges between the root and the node holding `value`, or `None` if it isn't in
    /// the tree. The root has a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.depth(&3), Some(0));
    /// assert_eq!(tree.depth(&2), Some(1));
    /// assert_eq!(tree.depth(&1), Some(2));
    /// assert_eq!(tree.depth(&5), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let target = self.find(value)?;

        let mut depth = 0;
        let mut current = self.root()?;
        while !std::ptr::eq(current, target) {
            current = match value.cmp(&current.value) {
                Ordering::Less => current.left()?,
                _ => current.right()?,
            };
            depth += 1;
        }
        Some(depth)
    }

    /// Whether the root's two subtrees differ in height by at most one.
    ///
    /// Only the root is inspected; subtrees further down may be arbitrarily lopsided. Use
    /// [`Tree::is_fully_balanced`] to check every node. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::from_values([2, 1, 3]);
    /// assert!(tree.is_balanced());
    ///
    /// // Only the right side of the root grows.
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let Some(root) = self.root() else {
            return true;
        };
        let left = link_height(&root.left).map_or(0, |h| h + 1);
        let right = link_height(&root.right).map_or(0, |h| h + 1);

        left.abs_diff(right) <= 1
    }

    /// Whether every node's two subtrees differ in height by at most one.
    pub fn is_fully_balanced(&self) -> bool {
        balanced_levels(self.root()).is_some()
    }

    /// Rebuilds the tree to minimal height, keeping the same values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..7 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(&0), Some(6));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.root().map(|n| n.height()), Some(2));
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn rebalance(&mut self) {
        let before = link_height(&self.root);

        let mut sorted = Vec::with_capacity(self.len);
        if let Some(root) = self.root.take() {
            (*root).drain_in_order(&mut sorted);
        }
        *self = Self::from_sorted(sorted);

        debug!(?before, after = ?link_height(&self.root), "rebalanced tree");
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Ord> From<Vec<T>> for Tree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}
