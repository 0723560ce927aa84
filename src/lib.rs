//! # Crimson
//!
//! A slab-backed red-black tree supporting insertion, in-order traversal,
//! and depth queries.
//!
//! ## Architecture
//!
//! - **Node**: Pure data holder — value, structural links, color tag
//! - **Tree**: Owns the node arena and the comparator; exposes insertion,
//!   traversal, depth, and lifecycle operations
//! - **Balance**: The insertion fixup state machine and the rotation
//!   primitives it relies on
//!
//! ## Design Principles
//!
//! 1. **Index arena**: Nodes live in a `Slab`; parent and child links are
//!    plain `usize` keys, so there are no ownership cycles to manage
//! 2. **Single-sided logic**: The mirrored left/right branches of fixup and
//!    rotation share one implementation parameterized by [`Side`]
//! 3. **Iterative climbing**: Fixup ascends parent links in an explicit
//!    loop, so call-stack depth never depends on tree shape
//! 4. **Synchronous execution**: Every operation runs to completion; no
//!    internal locking — external synchronization is the caller's job
//!
//! ## Performance
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | Insert     | O(log n)   |
//! | Max depth  | O(n)       |
//! | Traverse   | O(n)       |
//! | Clear      | O(n)       |
//!
//! ## Example
//!
//! ```
//! use crimson::RbTree;
//!
//! let mut tree = RbTree::new();
//! for v in [11, 2, 14, 1, 7] {
//!     tree.insert(v);
//! }
//!
//! let mut out = Vec::new();
//! tree.traverse(|v| out.push(*v));
//! assert_eq!(out, vec![1, 2, 7, 11, 14]);
//! assert!(tree.max_depth() <= 3);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Red-black tree: node arena, comparator, balancing machinery
pub mod tree;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use tree::{Color, Compare, NaturalOrder, Node, RbTree, Side};
