use crate::Result;

/// A mutable map from non-empty string keys to values of type `V`
///
/// Laws every implementation keeps:
///
/// * `put(k, v); get(k) == v`, and the last write to a key wins
/// * reads never change what later reads observe
/// * `get(k)` fails with `EntryNotFound(k)` until `k` is first written
/// * `contains(k)` is false until `k` is first written and true ever after
///
/// There is no removal.
pub trait KvMap<V> {
    /// Bind `key` to `value`, leaving every other key untouched.
    ///
    /// `key` must be non-empty.
    fn put(&mut self, key: String, value: V) -> Result<()>;

    /// The most recently written value of `key`.
    ///
    /// Fails with `EntryNotFound` if `key` was never written.
    fn get(&self, key: &str) -> Result<V>;

    /// Whether some value is retrievable for `key`.
    fn contains(&self, key: &str) -> Result<bool>;
}

/// Identity of a map's backing structures at one instant.
///
/// Two snapshots compare equal only if no backing field was replaced in
/// between, regardless of whether the replacement held equal contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    store: usize,
    index: usize,
}

impl Identity {
    pub fn new(store: usize, index: usize) -> Self {
        Self { store, index }
    }

    /// Identity of a map with a single backing field.
    pub fn of_store(store: usize) -> Self {
        Self::new(store, 0)
    }
}

/// Introspection used by [`Checked`](crate::Checked)
pub trait Inspect {
    fn identity(&self) -> Identity;

    /// Describe the broken representation invariant, if any.
    fn check_invariant(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}
