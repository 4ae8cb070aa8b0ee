//! An unbalanced Binary Search Tree that owns its nodes through `Box`es.
//!
//! Values smaller than a node go to its left, everything else (including values equal to the
//! node) goes to its right. Duplicates are therefore kept rather than merged, and a removal
//! always finds the occurrence closest to the root first.
//!
//! Nothing rebalances the tree. Inserting already sorted values produces a chain as deep as the
//! tree is long, and `insert`, `remove`, `height` and the traversals recurse once per level, so
//! callers feeding adversarial input are responsible for the stack depth that implies. Dropping
//! or [clearing][Tree::clear] the tree does not recurse.
//!
//! # Examples
//!
//! ```
//! use copse::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! assert_eq!(tree.remove(&1), Err(Error::EmptyTree));
//!
//! for value in [5u8, 3, 8, 3] {
//!     tree.insert(value);
//! }
//! assert!(tree.inorder().unwrap().eq([3, 3, 5, 8]));
//!
//! // Removing a duplicate only removes one occurrence.
//! tree.remove(&3).unwrap();
//! assert!(tree.inorder().unwrap().eq([3, 5, 8]));
//!
//! assert_eq!(tree.remove(&4), Err(Error::ElementNotFound));
//! ```

use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use crate::collections::{List, Stack};
use crate::error::{Error, Result};
use crate::traversal::{Order, Traversal};
use crate::util::RemoveResult;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree supporting insertion, removal and pre-, in- and postorder traversal.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Releases every node, leaving the tree empty.
    ///
    /// Nodes are detached from their children and freed one at a time from a [`Stack`] worklist
    /// rather than by recursing, and rather than by walking an inorder [`Traversal`] first, so
    /// each node is released exactly once and degenerate trees can't overflow the call stack.
    pub fn clear(&mut self) {
        let mut pending = Stack::new();
        let detach = |pending: &mut Stack<Box<Node<T>>>, link: Link<T>| {
            if let Some(node) = link {
                // Pushing only fails when the worklist can't grow. The node is then dropped
                // inside `push`, which still frees it, just recursively.
                let _ = pending.push(node);
            }
        };

        detach(&mut pending, self.root.take());
        while let Ok(mut node) = pending.pop() {
            detach(&mut pending, node.left.take());
            detach(&mut pending, node.right.take());
        }
        self.len = 0;
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value`. Values equal to an existing node are placed in that node's right
    /// subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use copse::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2u8);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.preorder().unwrap().eq([2, 1, 2]));
    /// ```
    pub fn insert(&mut self, value: T) {
        if let Some(root) = self.root.as_mut() {
            root.insert(value);
        } else {
            self.root = Some(Node::new_boxed(value));
        }
        self.len += 1;
    }
}

impl<T> Tree<T>
where
    T: Ord + Clone,
{
    /// Removes one occurrence of `value`.
    ///
    /// A node with two children is not unlinked itself. Instead it takes the value of its
    /// predecessor (the largest value in its left subtree) and that value is then removed from
    /// the left subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no root and [`Error::ElementNotFound`] if no node
    /// holds `value`. The tree is unchanged in both cases.
    pub fn remove(&mut self, value: &T) -> Result<()> {
        if self.root.is_none() {
            return Err(Error::EmptyTree);
        }

        match Node::remove_from(&mut self.root, value) {
            RemoveResult::Removed => {
                self.len -= 1;
                trace!(len = self.len, "removed value from tree");
                Ok(())
            }
            RemoveResult::NotFound => Err(Error::ElementNotFound),
            RemoveResult::RemoveSelf => unreachable!("`remove_from` splices out matched nodes"),
        }
    }
}

impl<T> Tree<T>
where
    T: Clone,
{
    /// Records the values in preorder. See [`Tree::traverse`].
    pub fn preorder(&self) -> Result<Traversal<T>> {
        self.traverse(Order::Preorder)
    }

    /// Records the values in inorder, which is sorted order. See [`Tree::traverse`].
    pub fn inorder(&self) -> Result<Traversal<T>> {
        self.traverse(Order::Inorder)
    }

    /// Records the values in postorder. See [`Tree::traverse`].
    pub fn postorder(&self) -> Result<Traversal<T>> {
        self.traverse(Order::Postorder)
    }

    /// Walks the whole tree once, recording a copy of every value in the given `order`, and
    /// returns an iterator over the recordings. The iterator owns its copies, so it stays valid
    /// however the tree changes afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhaustion`] if the bookkeeping stack for the walk couldn't grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use copse::{Order, Tree};
    ///
    /// let mut tree: Tree<u8> = [2, 1, 3].into_iter().collect();
    /// let postorder = tree.traverse(Order::Postorder).unwrap();
    ///
    /// tree.clear();
    /// assert!(postorder.eq([1, 3, 2]));
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn traverse(&self, order: Order) -> Result<Traversal<T>> {
        let mut scratch = Stack::new();
        let mut visited = List::new();
        if let Some(root) = self.root.as_deref() {
            root.walk(order, &mut scratch, &mut visited)?;
        }
        debug_assert!(scratch.is_empty(), "walk left entries on the scratch stack");
        debug!(?order, visited = visited.len(), "traversed tree");

        Ok(Traversal::new(order, visited))
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn height(link: &Link<T>) -> usize {
        match link {
            None => 0,
            Some(node) => Self::height(&node.left).max(Self::height(&node.right)) + 1,
        }
    }

    /// Follows right children until there are none.
    fn largest(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Replaces `link` with the only child of the node it points to (or nothing).
    fn unlink(link: &mut Link<T>) {
        if let Some(node) = link.take() {
            let Node { left, right, .. } = *node;
            debug_assert!(
                left.is_none() || right.is_none(),
                "Unlinking a node with two children would orphan one"
            );
            *link = left.or(right);
        }
    }

    /// Records this subtree into `visited`. `scratch` mirrors the recursion: this node's value is
    /// pushed on the way in and popped on the way out.
    fn walk(&self, order: Order, scratch: &mut Stack<T>, visited: &mut List<T>) -> Result<()>
    where
        T: Clone,
    {
        scratch.push(self.value.clone())?;
        let depth = scratch.len();

        if order == Order::Preorder {
            visited.append(self.value.clone());
        }
        if let Some(left) = self.left.as_deref() {
            left.walk(order, scratch, visited)?;
        }
        if order == Order::Inorder {
            visited.append(self.value.clone());
        }
        if let Some(right) = self.right.as_deref() {
            right.walk(order, scratch, visited)?;
        }
        if order == Order::Postorder {
            visited.append(self.value.clone());
        }

        debug_assert_eq!(scratch.len(), depth, "children must pop what they push");
        let entered = scratch.pop();
        debug_assert!(entered.is_ok(), "popped more than was pushed");
        Ok(())
    }
}

impl<T> Node<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) {
        let child = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        if let Some(node) = child.as_mut() {
            node.insert(value);
        } else {
            *child = Some(Self::new_boxed(value));
        }

        // Only `<=` on the left: replacing a node with its predecessor can pull up a value that
        // still has a duplicate below it.
        if cfg!(debug_assertions) {
            if let Some(left) = self.left.as_deref() {
                assert!(left.value <= self.value);
            }
            if let Some(right) = self.right.as_deref() {
                assert!(right.value >= self.value);
            }
        }
    }
}

impl<T> Node<T>
where
    T: Ord + Clone,
{
    /// Removes `value` from this subtree. See the documentation on [`RemoveResult`] to see what
    /// the various return values mean.
    fn remove(&mut self, value: &T) -> RemoveResult {
        match value.cmp(&self.value) {
            Ordering::Less => Self::remove_from(&mut self.left, value),
            Ordering::Greater => Self::remove_from(&mut self.right, value),
            Ordering::Equal if self.left.is_some() && self.right.is_some() => {
                self.replace_with_predecessor();
                RemoveResult::Removed
            }
            Ordering::Equal => RemoveResult::RemoveSelf,
        }
    }

    /// Removes `value` from the subtree hanging off `link`, unlinking the matched node if it
    /// asks to be. Never returns [`RemoveResult::RemoveSelf`].
    fn remove_from(link: &mut Link<T>, value: &T) -> RemoveResult {
        let Some(node) = link.as_mut() else {
            return RemoveResult::NotFound;
        };
        match node.remove(value) {
            RemoveResult::RemoveSelf => {
                Self::unlink(link);
                RemoveResult::Removed
            }
            result => result,
        }
    }

    /// Overwrites this node's value with its predecessor's and removes the predecessor from the
    /// left subtree with a fresh search for its value.
    fn replace_with_predecessor(&mut self) {
        let predecessor = match self.left.as_deref() {
            Some(left) => left.largest().value.clone(),
            None => unreachable!("Replacing with a predecessor requires a left child"),
        };
        trace!("replacing two-child node with its predecessor");

        match Self::remove_from(&mut self.left, &predecessor) {
            RemoveResult::Removed => self.value = predecessor,
            RemoveResult::NotFound | RemoveResult::RemoveSelf => {
                panic!("Predecessor not found but self.left was not null")
            }
        }
    }
}
