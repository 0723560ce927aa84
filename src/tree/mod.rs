//! Red-black tree module.
//!
//! ## Architecture
//!
//! The tree is implemented as an index arena:
//!
//! - **Slab-based storage**: Every node lives in a `slab::Slab`; structural
//!   links (`parent`, `left`, `right`) are `Option<usize>` slab keys with
//!   `None` as the nil position
//! - **Owning child links, observing parent link**: A node reaches its
//!   children through the tree; the parent key is a back-reference kept
//!   consistent with the child link that points at the node
//! - **Parameterized mirror cases**: Fixup and rotation take a [`Side`]
//!   instead of duplicating left/right branches
//!
//! ## Components
//!
//! - [`Node`]: One stored value plus its links and color
//! - [`RbTree`]: The tree — insertion, traversal, depth, lifecycle
//! - [`Compare`]/[`NaturalOrder`]: Strict-weak-order comparator seam
//!
//! ## Invariants
//!
//! After every completed insertion:
//!
//! 1. Every node is red or black
//! 2. The root, if present, is black
//! 3. A red node never has a red parent
//! 4. Every root-to-nil path passes the same number of black nodes
//! 5. In-order traversal yields values ascending under the comparator
//!
//! ## Example
//!
//! ```
//! use crimson::tree::{Color, RbTree};
//!
//! let mut tree = RbTree::with_capacity(16);
//! tree.insert(7);
//! tree.insert(3);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(tree.get(root).unwrap().color, Color::Black);
//! ```

pub mod balance;
pub mod compare;
pub mod node;
pub mod rbtree;

pub use compare::{Compare, NaturalOrder};
pub use node::{Color, Node, Side};
pub use rbtree::RbTree;
