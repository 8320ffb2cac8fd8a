//! Ordering as an injected capability.
//!
//! A [`linked::Tree`][crate::linked::Tree] does not require its values to be
//! `Ord`. Instead it is constructed with a comparator implementing
//! [`Compare`], a three-way total order over the value type. Any closure of
//! the right shape is a comparator, [`Natural`] delegates to `Ord`, and
//! [`CallCounting`] decorates another comparator to count how often it is
//! consulted.

use std::cell::Cell;
use std::cmp::Ordering;

/// A three-way comparator over values of type `V`.
///
/// Implementations must be a consistent total order for the tree's
/// invariants to hold.
pub trait Compare<V> {
    /// Compares `left` against `right`, returning [`Ordering::Less`],
    /// [`Ordering::Equal`], or [`Ordering::Greater`].
    fn compare(&self, left: &V, right: &V) -> Ordering;
}

/// Any two-argument ordering closure is a comparator.
///
/// # Examples
///
/// ```
/// use bst_nav::linked::Tree;
///
/// // A tree ordered by string length.
/// let mut tree = Tree::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// tree.insert("kiwi");
/// tree.insert("fig");
/// tree.insert("banana");
///
/// assert_eq!(*tree.root().unwrap().minimum().value(), "fig");
/// ```
impl<V, F> Compare<V> for F
where
    F: Fn(&V, &V) -> Ordering,
{
    fn compare(&self, left: &V, right: &V) -> Ordering {
        self(left, right)
    }
}

/// The natural order of the value type: delegates straight to [`Ord`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<V> Compare<V> for Natural
where
    V: Ord,
{
    fn compare(&self, left: &V, right: &V) -> Ordering {
        left.cmp(right)
    }
}

/// A decorator that counts how many times the wrapped comparator is invoked.
///
/// The outcome of every comparison is passed through untouched; only the
/// count is recorded. Useful for observing how expensive tree operations are
/// under different insertion orders.
///
/// # Examples
///
/// ```
/// use bst_nav::compare::{CallCounting, Natural};
/// use bst_nav::linked::Tree;
///
/// let mut tree = Tree::new(CallCounting::new(Natural));
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// // The first insert found an empty tree; the other two each compared
/// // against the root once.
/// assert_eq!(tree.comparator().call_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CallCounting<C> {
    inner: C,
    calls: Cell<usize>,
}

impl<C> CallCounting<C> {
    /// Wraps the given comparator with a zeroed counter.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// How many times [`Compare::compare`] has been invoked on this wrapper.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl<V, C> Compare<V> for CallCounting<C>
where
    C: Compare<V>,
{
    fn compare(&self, left: &V, right: &V) -> Ordering {
        self.calls.set(self.calls.get() + 1);
        self.inner.compare(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_matches_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn closures_are_comparators() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(reverse.compare(&2, &1), Ordering::Less);
    }

    #[test]
    fn call_counting_is_transparent() {
        let counting = CallCounting::new(Natural);

        for (left, right) in [(1, 2), (2, 2), (3, 2)] {
            assert_eq!(
                counting.compare(&left, &right),
                Natural.compare(&left, &right)
            );
        }
    }

    #[test]
    fn call_counting_counts() {
        let counting = CallCounting::new(Natural);
        assert_eq!(counting.call_count(), 0);

        counting.compare(&1, &2);
        counting.compare(&2, &1);
        assert_eq!(counting.call_count(), 2);
    }
}
