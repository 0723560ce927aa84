//! Tree node for slab-based storage.
//!
//! ## Design
//!
//! `Node` is a pure data holder: the stored value, three structural links,
//! and a color tag. It enforces no invariants of its own — the red-black
//! invariants are properties of the whole tree, maintained by the tree's
//! operations.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - O(1) insert, remove, and lookup
//!
//! Links are slab keys, not references, so the parent back-reference is a
//! plain observing index and never forms an ownership cycle. `None` is the
//! nil position: absent child, or no parent (root only).

// ============================================================================
// Color enum
// ============================================================================

/// Node color tag.
///
/// Freshly inserted nodes are red; the fixup pass recolors as needed and
/// the root is forced black after every insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Red node — must not have a red parent
    #[default]
    Red,
    /// Black node — counts toward every path's black-height
    Black,
}

// ============================================================================
// Side enum
// ============================================================================

/// Child slot selector: left or right.
///
/// Fixup and rotation are written once against a `Side` and mirrored via
/// [`Side::opposite`], so the symmetric left/right code paths cannot
/// diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left child slot (values before the node)
    Left,
    /// Right child slot (values not before the node)
    Right,
}

impl Side {
    /// Returns the mirrored side
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// ============================================================================
// Node
// ============================================================================

/// Tree node stored in the slab.
///
/// Contains the value plus structural links and the color tag. The links
/// are slab keys (`usize`), not direct references.
///
/// ## Memory Layout
///
/// ```text
/// Node<T> {
///     value: T
///     left: Option<usize>
///     right: Option<usize>
///     parent: Option<usize>
///     color: Color
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The stored value
    pub value: T,

    /// Left child (slab key); None if absent
    pub left: Option<usize>,

    /// Right child (slab key); None if absent
    pub right: Option<usize>,

    /// Structural parent (slab key); None only for the root
    pub parent: Option<usize>,

    /// Color tag for the balancing invariants
    pub color: Color,
}

impl<T> Node<T> {
    /// Create a new detached red node
    ///
    /// # Example
    ///
    /// ```
    /// use crimson::tree::{Color, Node};
    ///
    /// let node = Node::new(42);
    ///
    /// assert_eq!(node.color, Color::Red);
    /// assert!(node.is_detached());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
            color: Color::Red,
        }
    }

    /// Check if this node has no links at all (fresh or root-of-one)
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.parent.is_none() && self.left.is_none() && self.right.is_none()
    }

    /// Check if this node is red
    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Get the child key on the given side
    #[inline]
    pub fn child(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Get a mutable reference to the child slot on the given side
    #[inline]
    pub fn child_mut(&mut self, side: Side) -> &mut Option<usize> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
