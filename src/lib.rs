//! This crate exposes a plain Binary Search Tree and a union-find structure, both built on a
//! handful of small owned containers.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and delete stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores
//! a value and sometimes has child `Node`s. The invariants of the [`Tree`] here are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than its own
//!    value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than or equal
//!    to its own value. Duplicates are kept and end up to the right.
//!
//! > Removing a value that has duplicates can leave a copy of it in the left subtree of a node
//! > holding the same value, so with duplicates the first invariant only holds as "less than or
//! > equal". Searches are unaffected since they stop at the first equal node.
//!
//! The tree never rebalances, so its height depends entirely on insertion order. BSTs naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree; the [`Tree`] records that order (and preorder and postorder) into a [`Traversal`].
//!
//! ## Union-Find
//!
//! A [`UnionFind`] partitions inserted values into disjoint sets. Each set is identified by a
//! representative, found by following parent links until reaching a value that is its own
//! parent. Sets are merged with [`UnionFind::unify`].
//!
//! ## Containers
//!
//! The [`collections`] module holds the dynamic array, hash table, stack and singly linked list
//! the two structures above are built from. They report failures through the shared [`Error`]
//! type so everything composes with `?`.
//!
//! ## Logging
//!
//! Structural changes emit [`tracing`](https://docs.rs/tracing) events at `trace` level and
//! completed traversals at `debug` level. The crate never installs a subscriber.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod collections;
mod error;
pub mod traversal;
pub mod tree;
pub mod union_find;
mod util;


pub use error::{Error, Result};
pub use traversal::{Order, Traversal};
pub use tree::Tree;
pub use union_find::UnionFind;
