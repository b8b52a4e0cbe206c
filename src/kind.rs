use crate::error::KvMapError;
use crate::{Checked, DirectMap, IndexedMap, KvMap, ListMap};
use slog::Logger;
use std::fmt;
use std::str::FromStr;

/// Which map implementation to construct
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapKind {
    Direct,
    List,
    Indexed,
}

impl MapKind {
    pub const ALL: [MapKind; 3] = [MapKind::Direct, MapKind::List, MapKind::Indexed];

    pub fn name(self) -> &'static str {
        match self {
            MapKind::Direct => "direct",
            MapKind::List => "list",
            MapKind::Indexed => "indexed",
        }
    }

    /// an empty map of this kind without any checks
    pub fn unchecked<V: Clone + 'static>(self) -> Box<dyn KvMap<V>> {
        match self {
            MapKind::Direct => Box::new(DirectMap::new()),
            MapKind::List => Box::new(ListMap::new()),
            MapKind::Indexed => Box::new(IndexedMap::new()),
        }
    }

    /// an empty map of this kind behind the contract-checking wrapper
    pub fn checked<V: Clone + 'static>(self, log: &Logger) -> Box<dyn KvMap<V>> {
        let log = log.new(slog::o!("map" => self.name()));
        match self {
            MapKind::Direct => Box::new(Checked::with_logger(DirectMap::new(), log)),
            MapKind::List => Box::new(Checked::with_logger(ListMap::new(), log)),
            MapKind::Indexed => Box::new(Checked::with_logger(IndexedMap::new(), log)),
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapKind {
    type Err = KvMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| KvMapError::CliError {
                parameter: format!("map: unknown implementation {:?}", s),
            })
    }
}
