use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

/// A key to value map. Lookups of absent keys are errors rather than `None` so they can be
/// propagated with `?` alongside the other container errors.
#[derive(Clone, Debug)]
pub struct HashTable<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashTable<K, V> {
    /// Generates a new, empty `HashTable`.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// The number of keys stored.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no key has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq,
{
    /// Returns the value stored for `key` or [`Error::NotFound`].
    pub fn get(&self, key: &K) -> Result<&V> {
        self.map.get(key).ok_or(Error::NotFound)
    }

    /// Inserts `value` for `key`, overwriting (and returning) any previous value.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.map.try_reserve(1)?;
        Ok(self.map.insert(key, value))
    }

    /// Whether `key` has a value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}
