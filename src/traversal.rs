//! Eagerly computed traversals of a [`Tree`][crate::Tree].
//!
//! A [`Traversal`] is produced by [`Tree::traverse`][crate::Tree::traverse] (or one of the
//! per-order shortcuts). The whole visiting order is recorded before the first value is
//! yielded, so the traversal holds no borrow of the tree: the tree can be mutated or dropped
//! while a traversal is still being consumed, and dropping the traversal never touches the
//! tree.

use std::iter::FusedIterator;

use crate::collections::{List, ListIntoIter};

/// The order nodes are visited in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// A node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node, then the right subtree. This yields values in sorted
    /// order.
    Inorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

/// A single pass over the values recorded by one traversal of a tree.
///
/// Once every recorded value has been produced, `next` keeps returning `None`. There is no way
/// to rewind; traverse the tree again for a fresh pass.
///
/// # Examples
///
/// ```
/// use copse::{Order, Tree};
///
/// let tree: Tree<u8> = [2, 1, 3].into_iter().collect();
/// let mut traversal = tree.preorder().unwrap();
///
/// assert_eq!(traversal.order(), Order::Preorder);
/// assert_eq!(traversal.len(), 3);
/// assert_eq!(traversal.next(), Some(2));
/// assert_eq!(traversal.next(), Some(1));
/// assert_eq!(traversal.next(), Some(3));
/// assert_eq!(traversal.next(), None);
/// assert_eq!(traversal.next(), None);
/// ```
#[derive(Debug)]
pub struct Traversal<T> {
    order: Order,
    entries: ListIntoIter<T>,
}

impl<T> Traversal<T> {
    pub(crate) fn new(order: Order, visited: List<T>) -> Self {
        Self {
            order,
            entries: visited.into_iter(),
        }
    }

    /// The order the values were recorded in.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<T> Iterator for Traversal<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> ExactSizeIterator for Traversal<T> {}
impl<T> FusedIterator for Traversal<T> {}
