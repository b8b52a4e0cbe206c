//! defines DirectMap, a map that swaps its whole hash map on every write

use crate::error::KvMapError;
use crate::{Identity, Inspect, KvMap, Result};
use std::collections::HashMap;

/// DirectMap keeps every binding in one `HashMap`
///
/// A write takes the map out of its field, inserts the binding and stores
/// the result back, bumping `version` so the swap is visible to identity
/// snapshots even when the contents did not change.
#[derive(Debug)]
pub struct DirectMap<V> {
    bindings: HashMap<String, V>,
    version: usize,
}

impl<V> DirectMap<V> {
    /// create an empty `DirectMap`
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            version: 0,
        }
    }

    /// number of distinct keys
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<V> Default for DirectMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> KvMap<V> for DirectMap<V> {
    /// set the corresponding `key` to `value`
    fn put(&mut self, key: String, value: V) -> Result<()> {
        let mut next = std::mem::take(&mut self.bindings);
        next.insert(key, value);
        self.bindings = next;
        self.version += 1;
        Ok(())
    }

    /// get `value` of the corresponding `key`
    fn get(&self, key: &str) -> Result<V> {
        self.bindings
            .get(key)
            .cloned()
            .ok_or_else(|| KvMapError::EntryNotFound { key: key.into() })
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.bindings.contains_key(key))
    }
}

impl<V> Inspect for DirectMap<V> {
    fn identity(&self) -> Identity {
        Identity::of_store(self.version)
    }
}
