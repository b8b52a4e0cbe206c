//! contract-checking wrappers

use crate::error::KvMapError;
use crate::{DirectMap, IndexedMap, Inspect, KvMap, ListMap, Result};
use slog::{crit, debug, o, warn, Discard, Logger};

pub type CheckedDirectMap<V> = Checked<DirectMap<V>>;
pub type CheckedListMap<V> = Checked<ListMap<V>>;
pub type CheckedIndexedMap<V> = Checked<IndexedMap<V>>;

/// Checked decorates a map with runtime contract checks
///
/// * every operation rejects an empty key with `PreconditionViolation`
/// * `put` must leave `contains(key)` true
/// * `get` and `contains` must not replace any backing structure
/// * the wrapped map's representation invariant holds after construction
///   and after every `put`
///
/// Only the precondition failure is returned to the caller. The others are
/// defects of the wrapped map; they are logged at `crit` level and panic.
pub struct Checked<M> {
    inner: M,
    log: Logger,
}

impl<M: Inspect + Default> Checked<M> {
    /// create an empty checked map that logs nowhere
    pub fn new() -> Self {
        Self::wrap(M::default())
    }
}

impl<M: Inspect + Default> Default for Checked<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Inspect> Checked<M> {
    /// start checking an existing map
    ///
    /// Panics if `inner` already breaks its invariant.
    pub fn wrap(inner: M) -> Self {
        Self::with_logger(inner, Logger::root(Discard, o!()))
    }

    pub fn with_logger(inner: M, log: Logger) -> Self {
        let checked = Self { inner, log };
        checked.ensure_invariant("new");
        checked
    }

    /// the wrapped map
    pub fn inner(&self) -> &M {
        &self.inner
    }

    fn require_key(&self, operation: &'static str, key: &str) -> Result<()> {
        if key.is_empty() {
            warn!(self.log, "precondition violated"; "operation" => operation);
            return Err(KvMapError::PreconditionViolation {
                operation,
                key: key.into(),
            });
        }
        Ok(())
    }

    fn ensure_invariant(&self, operation: &'static str) {
        if let Err(detail) = self.inner.check_invariant() {
            self.fatal(operation, KvMapError::InvariantViolation { detail });
        }
    }

    /// run a read-only operation, failing if it replaced a backing structure
    fn unchanged<T>(
        &self,
        operation: &'static str,
        key: &str,
        read: impl FnOnce(&M) -> T,
    ) -> T {
        let before = self.inner.identity();
        let result = read(&self.inner);
        if self.inner.identity() != before {
            self.fatal(
                operation,
                KvMapError::MutationDuringRead {
                    operation,
                    key: key.into(),
                },
            );
        }
        result
    }

    fn fatal(&self, operation: &'static str, err: KvMapError) -> ! {
        crit!(self.log, "contract violated"; "operation" => operation, "error" => %err);
        panic!("{}", err)
    }
}

impl<V, M: KvMap<V> + Inspect> KvMap<V> for Checked<M> {
    fn put(&mut self, key: String, value: V) -> Result<()> {
        self.require_key("put", &key)?;
        debug!(self.log, "put"; "key" => &key);
        self.inner.put(key.clone(), value)?;
        if !self.inner.contains(&key)? {
            self.fatal(
                "put",
                KvMapError::PostconditionViolation {
                    operation: "put",
                    key,
                },
            );
        }
        self.ensure_invariant("put");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<V> {
        self.require_key("get", key)?;
        self.unchanged("get", key, |map| map.get(key))
    }

    fn contains(&self, key: &str) -> Result<bool> {
        self.require_key("contains", key)?;
        self.unchanged("contains", key, |map| map.contains(key))
    }
}

impl<M: Inspect> Inspect for Checked<M> {
    fn identity(&self) -> crate::Identity {
        self.inner.identity()
    }

    fn check_invariant(&self) -> std::result::Result<(), String> {
        self.inner.check_invariant()
    }
}

#[cfg(test)]
mod tests {
    use super::{Checked, CheckedDirectMap, CheckedIndexedMap, CheckedListMap};
    use crate::error::KvMapError;
    use crate::{DirectMap, Identity, IndexedMap, Inspect, KvMap, Result};
    use std::cell::Cell;

    fn rejects_empty_key<M: KvMap<i32>>(mut map: M) {
        match map.put("".into(), 42) {
            Err(KvMapError::PreconditionViolation { operation, .. }) => {
                assert_eq!(operation, "put")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(map.get("").is_err());
        assert!(map.contains("").is_err());
        map.put("a".into(), 1).unwrap();
        assert_eq!(map.get("a").unwrap(), 1);
    }

    #[test]
    fn precondition_on_every_variant() {
        rejects_empty_key(CheckedDirectMap::<i32>::new());
        rejects_empty_key(CheckedListMap::<i32>::new());
        rejects_empty_key(CheckedIndexedMap::<i32>::new());
    }

    #[test]
    fn missing_key_is_not_a_precondition_failure() {
        let map: CheckedIndexedMap<i32> = Checked::new();
        match map.get("b") {
            Err(KvMapError::EntryNotFound { key }) => assert_eq!(key, "b"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!map.contains("b").unwrap());
    }

    /// accepts writes and forgets them
    #[derive(Default)]
    struct Forgetful;

    impl KvMap<i32> for Forgetful {
        fn put(&mut self, _key: String, _value: i32) -> Result<()> {
            Ok(())
        }

        fn get(&self, key: &str) -> Result<i32> {
            Err(KvMapError::EntryNotFound { key: key.into() })
        }

        fn contains(&self, _key: &str) -> Result<bool> {
            Ok(false)
        }
    }

    impl Inspect for Forgetful {
        fn identity(&self) -> Identity {
            Identity::of_store(0)
        }
    }

    #[test]
    #[should_panic(expected = "postcondition violated in put")]
    fn lost_write_is_fatal() {
        let mut map: Checked<Forgetful> = Checked::new();
        let _ = map.put("a".into(), 1);
    }

    /// reports a fresh backing structure after every read
    #[derive(Default)]
    struct Restless {
        inner: DirectMap<i32>,
        reads: Cell<usize>,
    }

    impl KvMap<i32> for Restless {
        fn put(&mut self, key: String, value: i32) -> Result<()> {
            self.inner.put(key, value)
        }

        fn get(&self, key: &str) -> Result<i32> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get(key)
        }

        fn contains(&self, key: &str) -> Result<bool> {
            self.inner.contains(key)
        }
    }

    impl Inspect for Restless {
        fn identity(&self) -> Identity {
            Identity::new(self.reads.get(), 0)
        }
    }

    #[test]
    #[should_panic(expected = "backing store replaced during read-only get")]
    fn replacing_store_during_get_is_fatal() {
        let mut map: Checked<Restless> = Checked::new();
        map.put("a".into(), 1).unwrap();
        assert!(map.contains("a").unwrap());
        let _ = map.get("a");
    }

    /// an indexed map whose key set drifts from its entries on the second write
    #[derive(Default)]
    struct Drifting {
        inner: IndexedMap<i32>,
    }

    impl KvMap<i32> for Drifting {
        fn put(&mut self, key: String, value: i32) -> Result<()> {
            self.inner.put(key, value)
        }

        fn get(&self, key: &str) -> Result<i32> {
            self.inner.get(key)
        }

        fn contains(&self, key: &str) -> Result<bool> {
            self.inner.contains(key)
        }
    }

    impl Inspect for Drifting {
        fn identity(&self) -> Identity {
            self.inner.identity()
        }

        fn check_invariant(&self) -> std::result::Result<(), String> {
            if self.inner.writes() > 1 {
                return Err("key set lags behind entries".into());
            }
            self.inner.check_invariant()
        }
    }

    #[test]
    #[should_panic(expected = "invariant violated: key set lags behind entries")]
    fn invariant_checked_after_each_put() {
        let mut map: Checked<Drifting> = Checked::new();
        map.put("a".into(), 1).unwrap();
        assert_eq!(map.get("a").unwrap(), 1);
        let _ = map.put("b".into(), 2);
    }

    #[test]
    fn identity_is_the_wrapped_maps() {
        let mut map = Checked::wrap(DirectMap::<i32>::new());
        map.put("a".into(), 1).unwrap();
        assert_eq!(map.identity(), map.inner().identity());
        assert!(map.check_invariant().is_ok());
    }
}
