use std::slice;

use crate::error::{Error, Result};

/// A growable, bounds-checked buffer.
///
/// # Examples
///
/// ```
/// use copse::collections::DynamicArray;
/// use copse::Error;
///
/// let mut array = DynamicArray::new();
/// array.append(3).unwrap();
/// array.set(0, 4).unwrap();
///
/// assert_eq!(array.get(0), Ok(&4));
/// assert_eq!(array.get(1), Err(Error::OutOfBounds { index: 1, len: 1 }));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicArray<T> {
    items: Vec<T>,
}

impl<T> DynamicArray<T> {
    /// Generates a new, empty `DynamicArray`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Generates an empty `DynamicArray` with room for at least `capacity` items.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve(capacity)?;
        Ok(Self { items })
    }

    /// The number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::OutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Overwrites the item at `index`. The array never grows through `set`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Pushes `value` onto the end of the array, growing the buffer if needed. Growth is
    /// amortized by the underlying `Vec`.
    pub fn append(&mut self, value: T) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push(value);
        Ok(())
    }

    /// Iterates the items in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
