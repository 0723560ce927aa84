//! Comparator seam for the tree's total order.
//!
//! ## Design
//!
//! The tree orders values by a strict-weak `less` relation, not by `Ord`
//! directly. [`NaturalOrder`] adapts `Ord` types; any `Fn(&T, &T) -> bool`
//! closure works through the blanket impl, so a custom order costs one
//! closure at construction time.
//!
//! ## Precondition
//!
//! `less` must be a strict weak ordering. A relation that is not (e.g. one
//! built on partial comparisons that can disagree in both directions) leaves
//! the tree's ordering and balance invariants undefined. This is a caller
//! contract, not a checked condition.

/// Strict-weak-order comparator over `T`.
///
/// `less(a, b)` returning `false` in both directions means `a` and `b` are
/// equivalent; equivalent values route to the right subtree on insertion.
pub trait Compare<T> {
    /// Is `a` strictly before `b`?
    fn less(&self, a: &T, b: &T) -> bool;
}

/// The natural `Ord`-based ordering. Default comparator for [`RbTree`].
///
/// [`RbTree`]: crate::tree::RbTree
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Any boolean predicate closure is a comparator.
impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        let cmp = NaturalOrder;

        assert!(cmp.less(&1, &2));
        assert!(!cmp.less(&2, &1));
        assert!(!cmp.less(&2, &2));
    }

    #[test]
    fn test_closure_comparator() {
        // Descending order
        let cmp = |a: &u32, b: &u32| a > b;

        assert!(cmp.less(&5, &3));
        assert!(!cmp.less(&3, &5));
        assert!(!cmp.less(&4, &4));
    }

    #[test]
    fn test_natural_order_strings() {
        let cmp = NaturalOrder;

        assert!(cmp.less(&"apple", &"banana"));
        assert!(!cmp.less(&"banana", &"apple"));
    }
}
