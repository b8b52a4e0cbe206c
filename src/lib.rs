//! A string-keyed map contract with several interchangeable implementations
//!
//! Every map implements [`KvMap`]: `put`, `get` and `contains`, no removal.
//! [`DirectMap`] swaps a hash map on every write, [`ListMap`] prepends to a
//! linked chain and scans it, [`IndexedMap`] adds a key set to the chain for
//! constant-time presence checks. [`Checked`] wraps any of them with runtime
//! contract checks.

pub mod error;
mod chain;
mod checked;
mod contract;
mod direct;
mod indexed;
mod kind;
mod list;
pub mod script;

pub use checked::{Checked, CheckedDirectMap, CheckedIndexedMap, CheckedListMap};
pub use contract::{Identity, Inspect, KvMap};
pub use direct::DirectMap;
pub use indexed::IndexedMap;
pub use kind::MapKind;
pub use list::ListMap;

use error::KvMapError;

pub type Result<T> = std::result::Result<T, KvMapError>;
