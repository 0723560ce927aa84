//! Red-black tree implementation.
//!
//! ## Architecture
//!
//! The tree is a hybrid of three small parts:
//!
//! - **Slab**: Pre-allocated node storage; every structural link is a key
//! - **Placement**: Iterative binary-search descent to the attachment leaf
//! - **Fixup**: The recoloring/rotation pass in [`balance`], invoked after
//!   every attachment
//!
//! ## Ordering
//!
//! The comparator defines a strict weak order. Descent goes left when
//! `less(new, current)`, right otherwise — so duplicates route right and
//! traversal yields them adjacent, after their equivalents.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - O(1) insert and lookup
//!
//! There is no per-node removal: nodes leave the slab only wholesale, when
//! [`RbTree::clear`] drops the arena or the tree itself is dropped.
//!
//! [`balance`]: crate::tree::balance
//!
//! ## Example
//!
//! ```
//! use crimson::RbTree;
//!
//! let mut tree = RbTree::with_capacity(100);
//!
//! tree.insert(11);
//! tree.insert(2);
//! tree.insert(14);
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.max_depth(), 2);
//! ```

use slab::Slab;

use crate::tree::{Color, Compare, NaturalOrder, Node, Side};

/// Red-black tree over a slab arena.
///
/// Generic over the value type and the comparator; the comparator defaults
/// to the natural `Ord`-based order.
#[derive(Debug)]
pub struct RbTree<T, C = NaturalOrder> {
    /// Node storage; keys are stable for the life of the node
    pub(super) nodes: Slab<Node<T>>,

    /// Root node key; None when the tree is empty
    pub(super) root: Option<usize>,

    /// Strict-weak-order comparator over stored values
    compare: C,
}

impl<T: Ord> Default for RbTree<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> RbTree<T, NaturalOrder> {
    /// Create an empty tree under the natural ordering
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Create an empty tree with pre-allocated node slots
    ///
    /// # Example
    ///
    /// ```
    /// use crimson::RbTree;
    ///
    /// let tree: RbTree<u64> = RbTree::with_capacity(10_000);
    /// assert!(tree.capacity() >= 10_000);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_comparator_and_capacity(NaturalOrder, capacity)
    }
}

impl<T, C: Compare<T>> RbTree<T, C> {
    /// Create an empty tree with a custom comparator
    ///
    /// # Example
    ///
    /// ```
    /// use crimson::RbTree;
    ///
    /// // Descending order
    /// let mut tree = RbTree::with_comparator(|a: &u32, b: &u32| a > b);
    /// tree.insert(1);
    /// tree.insert(3);
    /// tree.insert(2);
    ///
    /// let mut out = Vec::new();
    /// tree.traverse(|v| out.push(*v));
    /// assert_eq!(out, vec![3, 2, 1]);
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            compare,
        }
    }

    /// Create an empty tree with a custom comparator and pre-allocated slots
    pub fn with_comparator_and_capacity(compare: C, capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
            compare,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get the number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a value.
    ///
    /// Descends from the root to the attachment leaf, attaches a red node,
    /// then rebalances. Duplicates are kept; an inserted value equivalent
    /// to an existing one routes into its right subtree.
    ///
    /// # Returns
    ///
    /// The slab key of the new node. Keys stay valid until [`clear`].
    ///
    /// [`clear`]: RbTree::clear
    ///
    /// # Example
    ///
    /// ```
    /// use crimson::RbTree;
    ///
    /// let mut tree = RbTree::with_capacity(100);
    /// let key = tree.insert(42);
    ///
    /// assert_eq!(tree.get(key).unwrap().value, 42);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        let key = self.nodes.insert(Node::new(value));

        let Some(mut current) = self.root else {
            // First node: the root is trivially balanced once black
            self.nodes[key].color = Color::Black;
            self.root = Some(key);
            return key;
        };

        // Binary-search descent to the first open slot on the search path
        loop {
            let side = if self
                .compare
                .less(&self.nodes[key].value, &self.nodes[current].value)
            {
                Side::Left
            } else {
                Side::Right
            };

            match self.nodes[current].child(side) {
                Some(next) => current = next,
                None => {
                    *self.nodes[current].child_mut(side) = Some(key);
                    self.nodes[key].parent = Some(current);
                    break;
                }
            }
        }

        self.insert_fixup(key);

        // The red-uncle cascade can leave the root red
        let root = self.root.expect("non-empty tree has a root");
        self.nodes[root].color = Color::Black;

        key
    }

    // ========================================================================
    // Traversal and Depth
    // ========================================================================

    /// Visit every value in ascending comparator order.
    ///
    /// The visitor runs synchronously; the tree is borrowed shared for the
    /// whole pass, so topology cannot change mid-traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use crimson::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// for v in [3, 1, 2] {
    ///     tree.insert(v);
    /// }
    ///
    /// let mut out = Vec::new();
    /// tree.traverse(|v| out.push(*v));
    /// assert_eq!(out, vec![1, 2, 3]);
    /// ```
    pub fn traverse<F: FnMut(&T)>(&self, mut visit: F) {
        self.traverse_values(self.root, &mut visit);
    }

    /// Visit every node in ascending order, exposing key, value, and color.
    ///
    /// Structural counterpart of [`traverse`], intended for diagnostics and
    /// tests — the visitor sees the full [`Node`] and can chase its link
    /// keys through [`get`].
    ///
    /// [`traverse`]: RbTree::traverse
    /// [`get`]: RbTree::get
    pub fn traverse_debug<F: FnMut(usize, &Node<T>)>(&self, mut visit: F) {
        self.traverse_nodes(self.root, &mut visit);
    }

    /// Get the maximum depth (height) of the tree; 0 for empty.
    ///
    /// # Example
    ///
    /// ```
    /// use crimson::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert_eq!(tree.max_depth(), 0);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.max_depth(), 1);
    /// ```
    pub fn max_depth(&self) -> usize {
        self.depth_below(self.root)
    }

    // ========================================================================
    // Structural Access (for diagnostics and tests)
    // ========================================================================

    /// Get the root node key, or None if the tree is empty
    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Get a node by slab key
    #[inline]
    pub fn get(&self, key: usize) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Remove every node and reset to empty.
    ///
    /// The slab drops all node storage at once; no per-node teardown order
    /// matters because no node owns another. Safe on an empty tree, safe to
    /// call repeatedly, and the tree is reusable afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use crimson::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// tree.clear(); // no-op
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.max_depth(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// In-order walk over values. Recursion depth is O(height), which the
    /// balancing invariants bound logarithmically.
    fn traverse_values<F: FnMut(&T)>(&self, key: Option<usize>, visit: &mut F) {
        let Some(key) = key else { return };
        let node = &self.nodes[key];

        self.traverse_values(node.left, visit);
        visit(&node.value);
        self.traverse_values(node.right, visit);
    }

    /// In-order walk over full nodes.
    fn traverse_nodes<F: FnMut(usize, &Node<T>)>(&self, key: Option<usize>, visit: &mut F) {
        let Some(key) = key else { return };
        let node = &self.nodes[key];

        self.traverse_nodes(node.left, visit);
        visit(key, node);
        self.traverse_nodes(node.right, visit);
    }

    fn depth_below(&self, key: Option<usize>) -> usize {
        let Some(key) = key else { return 0 };
        let node = &self.nodes[key];

        1 + self.depth_below(node.left).max(self.depth_below(node.right))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<C: Compare<u32>>(tree: &RbTree<u32, C>) -> Vec<u32> {
        let mut out = Vec::new();
        tree.traverse(|v| out.push(*v));
        out
    }

    #[test]
    fn test_tree_new() {
        let tree: RbTree<u32> = RbTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.max_depth(), 0);
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_tree_with_capacity() {
        let tree: RbTree<u32> = RbTree::with_capacity(10_000);

        assert!(tree.capacity() >= 10_000);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_first_insert_is_black_root() {
        let mut tree = RbTree::new();
        let key = tree.insert(42u32);

        assert_eq!(tree.root(), Some(key));
        let root = tree.get(key).unwrap();
        assert_eq!(root.color, Color::Black);
        assert_eq!(root.value, 42);
        assert!(root.is_detached());
    }

    #[test]
    fn test_second_insert_attaches_red_leaf() {
        let mut tree = RbTree::new();
        let root_key = tree.insert(10u32);
        let left_key = tree.insert(5);

        let root = tree.get(root_key).unwrap();
        assert_eq!(root.left, Some(left_key));
        assert!(root.right.is_none());

        let leaf = tree.get(left_key).unwrap();
        assert_eq!(leaf.color, Color::Red);
        assert_eq!(leaf.parent, Some(root_key));
    }

    #[test]
    fn test_duplicates_route_right() {
        let mut tree = RbTree::new();
        let first = tree.insert(5u32);
        let second = tree.insert(5);

        // Equivalent value goes into the right subtree
        assert_eq!(tree.get(first).unwrap().right, Some(second));
        assert_eq!(collect(&tree), vec![5, 5]);
    }

    #[test]
    fn test_traverse_is_sorted() {
        let mut tree = RbTree::new();
        for v in [11u32, 2, 14, 1, 7, 16, 5, 8, 4, 15] {
            tree.insert(v);
        }

        assert_eq!(collect(&tree), vec![1, 2, 4, 5, 7, 8, 11, 14, 15, 16]);
    }

    #[test]
    fn test_traverse_empty() {
        let tree: RbTree<u32> = RbTree::new();
        let mut visited = 0;
        tree.traverse(|_| visited += 1);

        assert_eq!(visited, 0);
    }

    #[test]
    fn test_traverse_debug_exposes_colors() {
        let mut tree = RbTree::new();
        tree.insert(2u32);
        tree.insert(1);
        tree.insert(3);

        let mut seen = Vec::new();
        tree.traverse_debug(|key, node| seen.push((key, node.value, node.color)));

        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].1, 1);
        assert_eq!(seen[1].1, 2);
        assert_eq!(seen[2].1, 3);
        // 2 is the root, its children are the red leaves
        assert_eq!(seen[1].2, Color::Black);
        assert_eq!(seen[0].2, Color::Red);
        assert_eq!(seen[2].2, Color::Red);
    }

    #[test]
    fn test_custom_comparator_descending() {
        let mut tree = RbTree::with_comparator(|a: &u32, b: &u32| a > b);
        for v in [1u32, 5, 3, 4, 2] {
            tree.insert(v);
        }

        assert_eq!(collect(&tree), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_max_depth_reference_scenario() {
        let mut tree = RbTree::new();
        for v in [11u32, 2, 14, 1, 7, 16, 5, 8, 4, 15] {
            tree.insert(v);
        }

        assert_eq!(tree.max_depth(), 4);
    }

    #[test]
    fn test_clear_idempotent() {
        let mut tree = RbTree::new();

        // Clearing an empty tree is a no-op
        tree.clear();
        assert!(tree.is_empty());

        tree.insert(1u32);
        tree.insert(2);
        tree.clear();
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.max_depth(), 0);
    }

    #[test]
    fn test_reusable_after_clear() {
        let mut tree = RbTree::new();
        tree.insert(1u32);
        tree.clear();

        tree.insert(9);
        tree.insert(8);

        assert_eq!(collect(&tree), vec![8, 9]);
        let root = tree.root().unwrap();
        assert_eq!(tree.get(root).unwrap().color, Color::Black);
    }

    #[test]
    fn test_get_unknown_key() {
        let tree: RbTree<u32> = RbTree::new();
        assert!(tree.get(999).is_none());
    }
}
