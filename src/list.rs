//! defines ListMap, a map that scans a chain of every write ever made

use crate::chain::Chain;
use crate::error::KvMapError;
use crate::{Identity, Inspect, KvMap, Result};

/// ListMap prepends each write to a chain and searches it front to back
///
/// `put` is O(1). `get` and `contains` are O(n) in the number of writes
/// performed, since overwritten entries stay in the chain behind the newer
/// one.
pub struct ListMap<V> {
    entries: Chain<V>,
}

impl<V> ListMap<V> {
    /// create an empty `ListMap`
    pub fn new() -> Self {
        Self {
            entries: Chain::new(),
        }
    }

    /// number of writes performed
    pub fn writes(&self) -> usize {
        self.entries.len()
    }
}

impl<V> Default for ListMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for ListMap<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V: Clone> KvMap<V> for ListMap<V> {
    fn put(&mut self, key: String, value: V) -> Result<()> {
        self.entries.push_front(key, value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<V> {
        self.entries
            .find(key)
            .cloned()
            .ok_or_else(|| KvMapError::EntryNotFound { key: key.into() })
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.entries.find(key).is_some())
    }
}

impl<V> Inspect for ListMap<V> {
    fn identity(&self) -> Identity {
        Identity::of_store(self.entries.head_addr())
    }
}
