//! Balancing machinery: rotation primitives and the insertion fixup pass.
//!
//! ## Design
//!
//! Both halves are written once against a [`Side`] parameter; the mirrored
//! left/right branches of the textbook algorithm fall out of
//! `side.opposite()` instead of a second copy of the code.
//!
//! ## Fixup
//!
//! After a red leaf is attached, the only invariant that can be broken is
//! the red-red rule, and only on the edge above the new node. The fixup
//! pass climbs parent links in an explicit loop:
//!
//! - **Red uncle**: recolor parent and uncle black, grandparent red, and
//!   continue from the grandparent — the violation moves up two levels
//! - **Black or absent uncle**: one rotation (two for the zig-zag shape)
//!   and a recoloring fix the subtree locally; the loop terminates
//!
//! Each red-uncle step climbs two levels, so the loop runs O(log n) times;
//! the rotation case is O(1). [`RbTree::insert`] forces the root black
//! afterwards, because the recoloring cascade can reach it.
//!
//! ## Rotations
//!
//! `rotate(key, Side::Left)` is the classic left rotation: the right child
//! is lifted into `key`'s position and `key` becomes its left child. The
//! right variant is the mirror. Rotations rewire a constant number of
//! links, never allocate, and preserve the in-order sequence — they are the
//! only operations that change tree shape at all (placement only ever adds
//! a leaf).
//!
//! [`RbTree::insert`]: crate::tree::RbTree::insert

use crate::tree::{Color, Compare, RbTree, Side};

impl<T, C: Compare<T>> RbTree<T, C> {
    /// Restore the red-black invariants above a freshly attached red node.
    ///
    /// May leave the root red; the caller recolors it.
    pub(super) fn insert_fixup(&mut self, key: usize) {
        let mut current = key;

        loop {
            let Some(parent) = self.nodes[current].parent else {
                break; // reached the root
            };
            if self.nodes[parent].color == Color::Black {
                break; // red child under a black parent is fine
            }

            // Parent is red, so it is not the root and a grandparent exists
            let grandpa = self.nodes[parent]
                .parent
                .expect("red node is never the root");
            let side = if self.nodes[grandpa].left == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.nodes[grandpa].child(side.opposite());

            match uncle {
                Some(uncle) if self.nodes[uncle].is_red() => {
                    // Red uncle: recoloring keeps every path's black count
                    // intact and pushes the violation up a generation
                    self.nodes[parent].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[grandpa].color = Color::Red;
                    current = grandpa;
                }
                _ => {
                    if self.nodes[parent].child(side.opposite()) == Some(current) {
                        // Zig-zag shape: rotate it into the straight-line
                        // shape, continuing from the demoted parent
                        current = parent;
                        self.rotate(current, side);
                    }

                    let parent = self.nodes[current]
                        .parent
                        .expect("fixup node has a parent");
                    let grandpa = self.nodes[parent]
                        .parent
                        .expect("straight-line case has a grandparent");
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandpa].color = Color::Red;
                    self.rotate(grandpa, side.opposite());
                    break;
                }
            }
        }
    }

    /// Rotate around `key`, lifting its `dir.opposite()` child.
    ///
    /// `rotate(k, Left)` lifts the right child (left rotation);
    /// `rotate(k, Right)` is the mirror. The lifted child's near subtree
    /// transfers to `key`, and whatever pointed at `key` — a parent slot or
    /// the root pointer — points at the lifted child afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `key` has no child on the lifting side. Fixup only
    /// rotates where that child is known to exist.
    pub(super) fn rotate(&mut self, key: usize, dir: Side) {
        let lifted = self.nodes[key]
            .child(dir.opposite())
            .expect("rotation pivot has a child on the lifting side");

        // The lifted child's near subtree crosses over to the pivot
        let transfer = self.nodes[lifted].child(dir);
        *self.nodes[key].child_mut(dir.opposite()) = transfer;
        if let Some(transfer) = transfer {
            self.nodes[transfer].parent = Some(key);
        }

        // Splice the lifted child into the pivot's old position
        let parent = self.nodes[key].parent;
        self.nodes[lifted].parent = parent;
        match parent {
            None => self.root = Some(lifted),
            Some(parent) => {
                let slot = if self.nodes[parent].left == Some(key) {
                    Side::Left
                } else {
                    Side::Right
                };
                *self.nodes[parent].child_mut(slot) = Some(lifted);
            }
        }

        *self.nodes[lifted].child_mut(dir) = Some(key);
        self.nodes[key].parent = Some(lifted);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
