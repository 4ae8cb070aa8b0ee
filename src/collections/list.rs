use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// A singly linked list that supports `O(1)` appends and prepends.
///
/// # Examples
///
/// ```
/// use copse::collections::List;
///
/// let mut list = List::new();
/// list.append(2);
/// list.append(3);
/// list.prepend(1);
///
/// assert_eq!(list.get(0), Ok(&1));
/// assert!(list.iter().copied().eq([1, 2, 3]));
/// ```
pub struct List<T> {
    // Every node reachable from `head` was leaked from a `Box` by `append`/`prepend` and is
    // owned by this list until `pop_front` or `clear` turns it back into a `Box`.
    head: Link<T>,
    // The last node of the chain starting at `head`. `None` iff `head` is `None`.
    tail: Link<T>,
    len: usize,
    // The list owns its nodes even though it only holds raw pointers to them.
    marker: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_leaked(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for List<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Clone for List<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// How many values are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` after the current last value.
    pub fn append(&mut self, value: T) {
        let node = Node::new_leaked(value, None);
        match self.tail {
            // SAFETY: `tail` came from `Box::leak` and is still owned by this list, so it is
            // valid. Only raw pointers to it exist and we hold `&mut self`, so this write can't
            // alias a live reference.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Adds `value` before the current first value.
    pub fn prepend(&mut self, value: T) {
        let node = Node::new_leaked(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the first value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` was leaked from a `Box` in `append`/`prepend` and is unlinked right
        // below, so nothing can reach it once it is turned back into a `Box` here.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Returns the value at `index`, walking from the front.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.iter().nth(index).ok_or(Error::OutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Releases every node, front to back, without recursing.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Iterates the values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

/// Borrowing iterator over a [`List`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The iterator borrows the list for `'a`, so no node can be released or
        // written to while this shared reference is alive.
        let node = unsafe { node.as_ref() };
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`List`]. Values not yet yielded are released when this is dropped.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> fmt::Debug for IntoIter<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_prepend_keep_order() {
        let mut list = List::new();
        list.append(3);
        list.prepend(2);
        list.append(4);
        list.prepend(1);

        assert_eq!(list.len(), 4);
        assert!(list.iter().copied().eq(1..=4));
    }

    #[test]
    fn prepend_into_empty_sets_tail() {
        let mut list = List::new();
        list.prepend(1);
        list.append(2);

        assert!(list.iter().copied().eq([1, 2]));
    }

    #[test]
    fn get_checks_bounds() {
        let list: List<_> = (0..3).collect();

        assert_eq!(list.get(2), Ok(&2));
        assert_eq!(list.get(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn pop_front_resets_tail() {
        let mut list = List::new();
        list.append(1);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);

        // A stale tail would make this append write into a freed node.
        list.append(2);
        assert!(list.iter().copied().eq([2]));
    }

    #[test]
    fn into_iter_is_fused() {
        let mut values = List::from_iter(["a".to_string(), "b".to_string()]).into_iter();

        assert_eq!(values.len(), 2);
        assert_eq!(values.next().as_deref(), Some("a"));
        assert_eq!(values.next().as_deref(), Some("b"));
        assert_eq!(values.next(), None);
        assert_eq!(values.next(), None);
    }

    // These walk every raw link after mixing the operations that write through `tail`, so
    // `cargo miri test` checks that no write goes through a pointer invalidated by a move.
    #[test]
    fn appends_after_prepend_into_empty_stay_linked() {
        let mut list = List::new();
        list.prepend(2);
        list.append(3);
        list.append(4);
        list.prepend(1);
        list.append(5);

        assert_eq!(list.len(), 5);
        assert!(list.iter().copied().eq(1..=5));
        assert_eq!(list.get(4), Ok(&5));
    }

    #[test]
    fn interleaved_pops_keep_tail_valid() {
        let mut list = List::new();
        let mut expected = std::collections::VecDeque::new();
        for i in 0..64 {
            match i % 4 {
                0 | 1 => {
                    list.append(i);
                    expected.push_back(i);
                }
                2 => {
                    list.prepend(i);
                    expected.push_front(i);
                }
                _ => assert_eq!(list.pop_front(), expected.pop_front()),
            }
            assert!(list.iter().eq(expected.iter()));
        }

        while let Some(value) = expected.pop_front() {
            assert_eq!(list.pop_front(), Some(value));
        }
        assert!(list.is_empty());
        list.append(100);
        assert!(list.iter().copied().eq([100]));
    }

    #[test]
    fn clones_own_their_nodes() {
        let mut original: List<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let copy = original.clone();
        original.append("c".to_string());
        original.clear();
        original.append("d".to_string());

        assert!(copy.iter().map(String::as_str).eq(["a", "b"]));
        assert!(original.iter().map(String::as_str).eq(["d"]));
    }

    #[test]
    fn partially_consumed_into_iter_releases_the_rest() {
        let mut values: List<_> = (0..10).map(|i| i.to_string()).collect();
        values.prepend("start".to_string());
        let mut values = values.into_iter();

        assert_eq!(values.next().as_deref(), Some("start"));
        assert_eq!(values.len(), 10);
        drop(values);
    }

    #[test]
    fn long_lists_drop_without_recursing() {
        let list: List<u32> = (0..200_000).collect();
        drop(list);
    }
}
