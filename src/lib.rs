//! This crate exposes a pointer-linked Binary Search Tree (BST) whose nodes
//! are first-class handles, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` holds a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its smaller (left)
//!    subtree have a value ordered at or before its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its larger (right)
//!    subtree have a value ordered strictly after its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`).
//!
//! Two things set this crate apart from a plain recursive BST:
//!
//! - **Parent links.** Every node keeps a non-owning reference to its parent,
//!   which makes purely structural navigation possible: [`minimum`],
//!   [`maximum`], [`successor`], and [`predecessor`] walk the links alone and
//!   never consult the ordering. The tree's shape already encodes the order.
//! - **An injected comparator.** The tree never requires `V: Ord`. Ordering is
//!   a capability supplied at construction (see [`compare`]), so the same
//!   value type can live in differently-ordered trees, and a decorator such as
//!   [`compare::CallCounting`] can observe how many comparisons an operation
//!   costs.
//!
//! There is no balancing: insertion order dictates the shape, and a sorted
//! insertion sequence degrades the tree to a list. The interesting parts are
//! the link manipulations, especially the three-case `delete`.
//!
//! [`minimum`]: linked::Node::minimum
//! [`maximum`]: linked::Node::maximum
//! [`successor`]: linked::Node::successor
//! [`predecessor`]: linked::Node::predecessor

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod linked;

#[cfg(test)]
mod test;
