//! A union-find (disjoint-set) structure over inserted values.
//!
//! Every inserted value gets a slot: the index it was appended at. Two parallel arrays describe
//! the forest, `parents[slot]` (the slot this one points at) and `elements[slot]` (the value
//! inserted there), and a hash index maps each value back to its slot. A slot that is its own
//! parent is the representative of its set.
//!
//! There is no path compression and no union by rank: a union always hangs the representative
//! of the value inserted *later* under the representative of the value inserted *earlier*, so
//! `find` may walk a chain as long as the number of slots.
//!
//! # Examples
//!
//! ```
//! use copse::{Error, UnionFind};
//!
//! let mut sets = UnionFind::new();
//! for value in [1u32, 2, 3] {
//!     sets.insert(value).unwrap();
//! }
//! assert_eq!(sets.set_count(), 3);
//!
//! sets.unify(&3, &2).unwrap();
//! // 2 was inserted before 3 so its representative wins.
//! assert_eq!(sets.find(&3), Ok(2));
//! assert_eq!(sets.set_count(), 2);
//!
//! assert_eq!(sets.find(&4), Err(Error::ElementNotFound));
//! ```

use std::hash::Hash;

use tracing::trace;

use crate::collections::{DynamicArray, HashTable};
use crate::error::{Error, Result};

/// Disjoint sets of values, merged by insertion order.
#[derive(Clone, Debug)]
pub struct UnionFind<T> {
    /// `parents[slot]` is the slot `slot` points at. Representatives point at themselves.
    parents: DynamicArray<usize>,
    /// `elements[slot]` is the value inserted at `slot`.
    elements: DynamicArray<T>,
    /// Maps each inserted value to the slot it was most recently inserted at.
    index: HashTable<T, usize>,
    /// Bumped by every insert and dropped by every unify of two different values.
    set_count: usize,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T> {
    /// Generates a new `UnionFind` without any slots.
    pub fn new() -> Self {
        Self {
            parents: DynamicArray::new(),
            elements: DynamicArray::new(),
            index: HashTable::new(),
            set_count: 0,
        }
    }

    /// Generates an empty `UnionFind` with room for `capacity` inserts before its arrays grow.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            parents: DynamicArray::with_capacity(capacity)?,
            elements: DynamicArray::with_capacity(capacity)?,
            index: HashTable::new(),
            set_count: 0,
        })
    }

    /// The number of slots, i.e. the number of successful inserts.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The number of sets as tracked by inserts and unions.
    ///
    /// This starts at the number of inserts and drops by one for *every* [`unify`][Self::unify]
    /// of two different values, including values that were already in the same set. Unifying
    /// members of one set therefore makes this smaller than the real number of sets (it never
    /// drops below 0). Use [`connected`][Self::connected] first when an exact count matters.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Follows parent slots from `slot` until reaching one that is its own parent.
    fn representative(&self, mut slot: usize) -> usize {
        let mut steps = 0;
        loop {
            let parent = self.parent_of(slot);
            if parent == slot {
                return slot;
            }
            steps += 1;
            debug_assert!(steps <= self.len(), "cycle in parent chain at slot {slot}");
            slot = parent;
        }
    }

    fn parent_of(&self, slot: usize) -> usize {
        match self.parents.get(slot) {
            Ok(parent) => *parent,
            Err(err) => unreachable!("parent chain left the parent array: {err}"),
        }
    }
}

impl<T> UnionFind<T>
where
    T: Hash + Eq + Clone,
{
    /// Adds `value` as a new singleton set.
    ///
    /// Inserting a value that is already present appends a fresh slot for it and points the
    /// index at that slot. The old slot stays in place as an unreachable singleton and keeps
    /// counting towards [`len`][Self::len] and [`set_count`][Self::set_count].
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhaustion`] if a backing buffer couldn't grow. The insert is not
    /// transactional: buffers appended to before the failure keep their new entry.
    pub fn insert(&mut self, value: T) -> Result<()> {
        let slot = self.len();
        self.elements.append(value.clone())?;
        self.parents.append(slot)?;
        if let Some(orphaned) = self.index.put(value, slot)? {
            trace!(orphaned, slot, "value re-inserted, previous slot orphaned");
        }
        self.set_count += 1;
        Ok(())
    }

    /// Whether `value` has been inserted.
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Returns the representative of the set containing `value`.
    ///
    /// # Errors
    ///
    /// [`Error::ElementNotFound`] if `value` was never inserted.
    pub fn find(&self, value: &T) -> Result<T> {
        let root = self.representative(self.slot_of(value)?);
        match self.elements.get(root) {
            Ok(element) => Ok(element.clone()),
            Err(err) => unreachable!("representative slot has no element: {err}"),
        }
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Whichever of `a` and `b` was inserted first wins: the other one's representative is
    /// pointed at the winner's representative. Unifying a value with itself does nothing.
    ///
    /// Every other successful call lowers [`UnionFind::set_count`] by one, even when `a` and `b`
    /// already share a set, so the count can fall below the real number of sets. It saturates
    /// at 0 instead of wrapping.
    ///
    /// # Errors
    ///
    /// [`Error::ElementNotFound`] if either value was never inserted. Nothing changes in that
    /// case.
    ///
    /// # Examples
    ///
    /// ```
    /// use copse::UnionFind;
    ///
    /// let mut sets = UnionFind::new();
    /// for value in [10u32, 20, 30] {
    ///     sets.insert(value).unwrap();
    /// }
    ///
    /// sets.unify(&30, &20).unwrap();
    /// sets.unify(&20, &10).unwrap();
    /// assert_eq!(sets.find(&30), Ok(10));
    /// assert_eq!(sets.set_count(), 1);
    ///
    /// // Already in the same set, but still counted as a union.
    /// sets.unify(&30, &10).unwrap();
    /// assert_eq!(sets.set_count(), 0);
    /// ```
    pub fn unify(&mut self, a: &T, b: &T) -> Result<()> {
        if a == b {
            return Ok(());
        }

        let a_slot = self.slot_of(a)?;
        let b_slot = self.slot_of(b)?;
        let a_root = self.representative(a_slot);
        let b_root = self.representative(b_slot);

        let (winner, loser) = if a_slot < b_slot {
            (a_root, b_root)
        } else {
            (b_root, a_root)
        };
        if let Err(err) = self.parents.set(loser, winner) {
            unreachable!("representative slot outside the parent array: {err}");
        }
        self.set_count = self.set_count.saturating_sub(1);
        trace!(winner, loser, set_count = self.set_count, "unified sets");

        Ok(())
    }

    /// Whether `a` and `b` currently share a representative.
    ///
    /// # Errors
    ///
    /// [`Error::ElementNotFound`] if either value was never inserted.
    pub fn connected(&self, a: &T, b: &T) -> Result<bool> {
        let a_root = self.representative(self.slot_of(a)?);
        let b_root = self.representative(self.slot_of(b)?);
        Ok(a_root == b_root)
    }

    fn slot_of(&self, value: &T) -> Result<usize> {
        match self.index.get(value) {
            Ok(slot) => Ok(*slot),
            Err(Error::NotFound) => Err(Error::ElementNotFound),
            Err(err) => Err(err),
        }
    }
}
