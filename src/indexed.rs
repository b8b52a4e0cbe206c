//! defines IndexedMap, a scanned chain with a key set in front of it

use crate::chain::Chain;
use crate::error::KvMapError;
use crate::{Identity, Inspect, KvMap, Result};
use std::collections::HashSet;

/// IndexedMap pairs the chain of [`ListMap`](crate::ListMap) with the set of
/// keys ever written
///
/// The representation invariant is that the distinct keys of `entries`
/// are exactly `keys`. `contains` and negative lookups only consult
/// `keys`; a positive `get` still scans `entries`.
///
/// `put` updates `entries` before `keys`, so the invariant does not hold
/// between the two steps. Exclusive borrowing keeps that window private to
/// `put`. The type is not `Send`, and sharing it across threads would need a
/// lock around both fields or a single swapped record holding both.
pub struct IndexedMap<V> {
    entries: Chain<V>,
    keys: HashSet<String>,
    keys_version: usize,
}

impl<V> IndexedMap<V> {
    /// create an empty `IndexedMap`
    pub fn new() -> Self {
        Self {
            entries: Chain::new(),
            keys: HashSet::new(),
            keys_version: 0,
        }
    }

    /// number of distinct keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// number of writes performed
    pub fn writes(&self) -> usize {
        self.entries.len()
    }
}

impl<V> Default for IndexedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> KvMap<V> for IndexedMap<V> {
    fn put(&mut self, key: String, value: V) -> Result<()> {
        self.entries.push_front(key.clone(), value);
        if self.keys.insert(key) {
            self.keys_version += 1;
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Result<V> {
        if !self.keys.contains(key) {
            return Err(KvMapError::EntryNotFound { key: key.into() });
        }
        self.entries
            .find(key)
            .cloned()
            .ok_or_else(|| KvMapError::EntryNotFound { key: key.into() })
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.keys.contains(key))
    }
}

impl<V> Inspect for IndexedMap<V> {
    fn identity(&self) -> Identity {
        Identity::new(self.entries.head_addr(), self.keys_version)
    }

    fn check_invariant(&self) -> std::result::Result<(), String> {
        let reachable = self.entries.keys();
        if reachable.len() == self.keys.len()
            && self.keys.iter().all(|k| reachable.contains(k.as_str()))
        {
            return Ok(());
        }
        let mut unindexed: Vec<_> = reachable
            .iter()
            .filter(|k| !self.keys.contains(**k))
            .collect();
        let mut dangling: Vec<_> = self
            .keys
            .iter()
            .filter(|k| !reachable.contains(k.as_str()))
            .collect();
        unindexed.sort();
        dangling.sort();
        Err(format!(
            "chain keys and key set disagree (missing from set: {:?}, missing from chain: {:?})",
            unindexed, dangling
        ))
    }
}
