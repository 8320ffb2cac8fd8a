//! A pointer-linked BST with parent references and an injected comparator.
//!
//! Unlike a value-owned recursive tree, nodes here are cheap-to-clone
//! *handles*: [`search`][Tree::search] and [`insert`][Tree::insert] hand one
//! back, and the handle stays valid while the node is in the tree. A node
//! knows its parent, so in-order navigation ([`Node::successor`] and friends)
//! works from any handle without touching the comparator.
//!
//! # Examples
//!
//! ```
//! use bst_nav::compare::Natural;
//! use bst_nav::linked::Tree;
//!
//! let mut tree = Tree::new(Natural);
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(1);
//! tree.insert(3);
//! tree.insert(2);
//!
//! let two = tree.search(&2).unwrap();
//! assert_eq!(*two.value(), 2);
//! assert_eq!(*two.successor().unwrap().value(), 3);
//! assert_eq!(*two.predecessor().unwrap().value(), 1);
//!
//! // Deleting returns the detached node carrying the deleted value.
//! let deleted = tree.delete(&2).unwrap();
//! assert_eq!(*deleted.value(), 2);
//! assert!(tree.search(&2).is_none());
//! ```

use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use crate::compare::Compare;

/// A handle to a node of a [`Tree`].
///
/// Cloning a `Node` clones the handle, not the subtree: both handles refer to
/// the same underlying node. The forward links (`smaller`/`larger`) own their
/// subtrees; the parent link is weak, so a detached subtree is freed as soon
/// as the last outside handle to it goes away.
pub struct Node<V> {
    inner: Rc<RefCell<Inner<V>>>,
}

struct Inner<V> {
    value: V,
    parent: Weak<RefCell<Inner<V>>>,
    smaller: Option<Node<V>>,
    larger: Option<Node<V>>,
}

impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V> Node<V> {
    /// Creates a leaf node holding `value`, with no parent and no children.
    pub fn new(value: V) -> Self {
        Self::with_children(value, None, None)
    }

    /// Creates a node holding `value` with the given subtrees, wiring each
    /// child's parent link back to the new node.
    ///
    /// This makes it trivial to hand-build a tree of a known shape, which is
    /// how the structural-equality tests assert on shapes produced by
    /// [`Tree`] operations.
    ///
    /// # Panics
    ///
    /// If `smaller` and `larger` are the same node. No node may occupy both
    /// child slots of a parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_nav::linked::Node;
    ///
    /// let root = Node::with_children("D", Some(Node::new("A")), Some(Node::new("F")));
    /// assert_eq!(root.size(), 3);
    /// assert_eq!(*root.minimum().value(), "A");
    /// assert_eq!(*root.maximum().value(), "F");
    /// ```
    pub fn with_children(value: V, smaller: Option<Node<V>>, larger: Option<Node<V>>) -> Self {
        if let (Some(smaller), Some(larger)) = (&smaller, &larger) {
            assert!(
                !Node::ptr_eq(smaller, larger),
                "smaller and larger can't be the same node"
            );
        }
        let node = Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                parent: Weak::new(),
                smaller,
                larger,
            })),
        };
        if let Some(child) = node.smaller() {
            child.set_parent(Some(&node));
        }
        if let Some(child) = node.larger() {
            child.set_parent(Some(&node));
        }
        node
    }

    /// Borrows the node's value.
    ///
    /// The borrow is dynamic; holding it across tree mutations that touch
    /// this node will panic.
    pub fn value(&self) -> Ref<'_, V> {
        Ref::map(self.inner.borrow(), |inner| &inner.value)
    }

    /// The node's parent, or `None` if this node is the root of its tree.
    pub fn parent(&self) -> Option<Node<V>> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Node { inner })
    }

    /// The root of the smaller (left) subtree, if any.
    pub fn smaller(&self) -> Option<Node<V>> {
        self.inner.borrow().smaller.clone()
    }

    /// The root of the larger (right) subtree, if any.
    pub fn larger(&self) -> Option<Node<V>> {
        self.inner.borrow().larger.clone()
    }

    /// Whether this node is the smaller child of its parent. A node with no
    /// parent is neither smaller nor larger.
    pub fn is_smaller(&self) -> bool {
        self.parent()
            .and_then(|parent| parent.smaller())
            .map_or(false, |child| Node::ptr_eq(&child, self))
    }

    /// Whether this node is the larger child of its parent.
    pub fn is_larger(&self) -> bool {
        self.parent()
            .and_then(|parent| parent.larger())
            .map_or(false, |child| Node::ptr_eq(&child, self))
    }

    /// The smallest node in the subtree rooted at this node: the result of
    /// following smaller links as far as they go. Returns this node itself if
    /// it has no smaller child.
    pub fn minimum(&self) -> Node<V> {
        let mut node = self.clone();
        while let Some(smaller) = node.smaller() {
            node = smaller;
        }
        node
    }

    /// The largest node in the subtree rooted at this node.
    pub fn maximum(&self) -> Node<V> {
        let mut node = self.clone();
        while let Some(larger) = node.larger() {
            node = larger;
        }
        node
    }

    /// The in-order successor: the node holding the next value in sorted
    /// order, or `None` if this node holds the largest value in its tree.
    ///
    /// If there is a larger subtree the successor is its minimum. Otherwise
    /// we climb while we are a larger child; the parent we then stop at, of
    /// which the climbed-from node is a smaller child, is the successor.
    /// Purely structural, so no comparisons are made.
    pub fn successor(&self) -> Option<Node<V>> {
        if let Some(larger) = self.larger() {
            return Some(larger.minimum());
        }
        let mut node = self.clone();
        while node.is_larger() {
            node = node.parent().expect("a larger child has a parent");
        }
        node.parent()
    }

    /// The in-order predecessor, or `None` if this node holds the smallest
    /// value in its tree. Mirror image of [`successor`][Node::successor].
    pub fn predecessor(&self) -> Option<Node<V>> {
        if let Some(smaller) = self.smaller() {
            return Some(smaller.maximum());
        }
        let mut node = self.clone();
        while node.is_smaller() {
            node = node.parent().expect("a smaller child has a parent");
        }
        node.parent()
    }

    /// The number of nodes in the subtree rooted at this node, itself
    /// included. `O(n)` in the subtree size.
    pub fn size(&self) -> usize {
        let inner = self.inner.borrow();
        let smaller = inner.smaller.as_ref().map_or(0, |node| node.size());
        let larger = inner.larger.as_ref().map_or(0, |node| node.size());
        1 + smaller + larger
    }

    /// Whether two handles refer to the same node. Structural equality lives
    /// on [`PartialEq`]; this is identity.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }

    fn set_parent(&self, parent: Option<&Node<V>>) {
        self.inner.borrow_mut().parent =
            parent.map_or_else(Weak::new, |parent| Rc::downgrade(&parent.inner));
    }

    fn set_smaller(&self, child: Option<Node<V>>) {
        self.inner.borrow_mut().smaller = child;
    }

    fn set_larger(&self, child: Option<Node<V>>) {
        self.inner.borrow_mut().larger = child;
    }

    fn take_smaller(&self) -> Option<Node<V>> {
        self.inner.borrow_mut().smaller.take()
    }

    fn take_larger(&self) -> Option<Node<V>> {
        self.inner.borrow_mut().larger.take()
    }

    /// Swaps the values of two distinct nodes in place, leaving all links
    /// untouched.
    fn swap_value(&self, other: &Self) {
        let mut this = self.inner.borrow_mut();
        let mut that = other.inner.borrow_mut();
        mem::swap(&mut this.value, &mut that.value);
    }

    /// Deep copy of the subtree rooted at this node, with fresh parent links.
    fn clone_subtree(&self) -> Node<V>
    where
        V: Clone,
    {
        let inner = self.inner.borrow();
        let smaller = inner.smaller.as_ref().map(|node| node.clone_subtree());
        let larger = inner.larger.as_ref().map(|node| node.clone_subtree());
        Node::with_children(inner.value.clone(), smaller, larger)
    }
}

/// Deep structural equality: equal values (by the value type's own equality)
/// and recursively equal subtrees, present on the same sides. Independent of
/// any comparator; two nodes in identical positions of identically-shaped
/// trees compare equal.
impl<V> PartialEq for Node<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if Node::ptr_eq(self, other) {
            return true;
        }
        let this = self.inner.borrow();
        let that = other.inner.borrow();
        this.value == that.value
            && subtree_eq(&this.smaller, &that.smaller)
            && subtree_eq(&this.larger, &that.larger)
    }
}

impl<V> Eq for Node<V> where V: Eq {}

fn subtree_eq<V>(this: &Option<Node<V>>, that: &Option<Node<V>>) -> bool
where
    V: PartialEq,
{
    match (this, that) {
        (None, None) => true,
        (Some(this), Some(that)) => this == that,
        _ => false,
    }
}

impl<V> fmt::Debug for Node<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Node")
            .field("value", &inner.value)
            .field("smaller", &inner.smaller)
            .field("larger", &inner.larger)
            .finish()
    }
}

/// An unbalanced Binary Search Tree ordered by an injected comparator.
///
/// The comparator is mandatory: there is no constructor without one. Values
/// never need to be `Ord` themselves. Duplicate values are accepted and kept
/// in insertion-stable order (see [`insert`][Tree::insert]).
pub struct Tree<V, C> {
    root: Option<Node<V>>,
    comparator: C,
}

impl<V, C> Tree<V, C>
where
    C: Compare<V>,
{
    /// Creates an empty tree ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
        }
    }

    /// A handle to the root node, or `None` if the tree is empty. This is the
    /// entry point for the structural navigation on [`Node`].
    pub fn root(&self) -> Option<Node<V>> {
        self.root.clone()
    }

    /// Borrows the comparator the tree was constructed with. Lets a wrapper
    /// such as [`CallCounting`][crate::compare::CallCounting] be inspected
    /// while the tree owns it.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Finds a node holding a value for which the comparator reports
    /// [`Ordering::Equal`] against `value`, descending smaller on less and
    /// larger on greater. Returns `None` on a miss. `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_nav::compare::Natural;
    /// use bst_nav::linked::Tree;
    ///
    /// let mut tree = Tree::new(Natural);
    /// tree.insert(1);
    ///
    /// assert_eq!(*tree.search(&1).unwrap().value(), 1);
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &V) -> Option<Node<V>> {
        let mut node = self.root();
        while let Some(current) = node {
            // Bind the comparison first so the value borrow ends before
            // `current` can be moved out of the match.
            let ord = self.comparator.compare(value, &*current.value());
            match ord {
                Ordering::Equal => return Some(current),
                Ordering::Less => node = current.smaller(),
                Ordering::Greater => node = current.larger(),
            }
        }
        None
    }

    /// Inserts `value` as a new leaf and returns a handle to it. No
    /// rebalancing happens, so the shape follows the insertion order.
    /// `O(height)`.
    ///
    /// Equal values descend (and link) smaller, so duplicates are accepted:
    /// each lands in the smaller subtree of the first equal node on its path,
    /// which keeps duplicates in insertion-stable in-order positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_nav::compare::Natural;
    /// use bst_nav::linked::Tree;
    ///
    /// let mut tree = Tree::new(Natural);
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.root().unwrap().size(), 2);
    /// ```
    pub fn insert(&mut self, value: V) -> Node<V> {
        let mut parent = None;
        let mut node = self.root();
        let mut ord = Ordering::Equal;
        while let Some(current) = node {
            ord = self.comparator.compare(&value, &*current.value());
            node = if ord == Ordering::Greater {
                current.larger()
            } else {
                current.smaller()
            };
            parent = Some(current);
        }

        let inserted = Node::new(value);
        match parent {
            None => self.root = Some(inserted.clone()),
            Some(parent) => {
                inserted.set_parent(Some(&parent));
                // The slot must match the direction the descent took, ties
                // included, or linking would drop an occupied subtree.
                if ord == Ordering::Greater {
                    parent.set_larger(Some(inserted.clone()));
                } else {
                    parent.set_smaller(Some(inserted.clone()));
                }
            }
        }
        inserted
    }

    /// Deletes one node holding `value` and returns it, detached, or `None`
    /// if no node matches. Deleting an absent value is a no-op, not an error.
    ///
    /// The node physically unlinked is the found node itself when it has at
    /// most one child, and otherwise its in-order successor, which is the
    /// minimum of a subtree and so has no smaller child. Its at-most-one
    /// child is spliced up into its slot. In the two-children case the
    /// successor's value is swapped into the found node, so any outside
    /// handle to the found node stays valid and sees the successor's value;
    /// the detached node returned carries the deleted value either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_nav::compare::Natural;
    /// use bst_nav::linked::Tree;
    ///
    /// let mut tree = Tree::new(Natural);
    /// tree.insert(1);
    ///
    /// let deleted = tree.delete(&1).unwrap();
    /// assert_eq!(*deleted.value(), 1);
    /// assert!(tree.search(&1).is_none());
    /// assert!(tree.delete(&1).is_none());
    /// ```
    pub fn delete(&mut self, value: &V) -> Option<Node<V>> {
        let node = self.search(value)?;

        let deleted = if node.smaller().is_some() && node.larger().is_some() {
            node.successor().expect("a node with a larger child has a successor")
        } else {
            node.clone()
        };

        // `deleted` has at most one child; taking both links detaches
        // whichever subtree exists so it is never owned twice.
        let replacement = deleted.take_smaller().or_else(|| deleted.take_larger());
        let parent = deleted.parent();

        if let Some(replacement) = &replacement {
            replacement.set_parent(parent.as_ref());
        }
        match &parent {
            None => self.root = replacement,
            Some(parent) => {
                if deleted.is_smaller() {
                    parent.set_smaller(replacement);
                } else {
                    parent.set_larger(replacement);
                }
            }
        }
        deleted.set_parent(None);

        if !Node::ptr_eq(&deleted, &node) {
            node.swap_value(&deleted);
        }
        Some(deleted)
    }
}

impl<V, C> Default for Tree<V, C>
where
    C: Compare<V> + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

/// Deep copy: the clone rebuilds the node graph, parent links included, so
/// handles into the original do not observe mutations of the clone.
impl<V, C> Clone for Tree<V, C>
where
    V: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.as_ref().map(|root| root.clone_subtree()),
            comparator: self.comparator.clone(),
        }
    }
}

impl<V, C> fmt::Debug for Tree<V, C>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}
