//! Permanently impassable cells.

use std::collections::HashSet;

/// Set of canonical cell keys marked impassable.
///
/// This is the only record of impassability; terrain costs never encode it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ObstacleSet {
    keys: HashSet<usize>,
}

impl ObstacleSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a key. Returns `false` if it was already present.
    #[inline]
    pub(crate) fn insert(&mut self, key: usize) -> bool {
        self.keys.insert(key)
    }

    #[inline]
    pub(crate) fn contains(&self, key: usize) -> bool {
        self.keys.contains(&key)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Keys in ascending order.
    pub(crate) fn sorted_keys(&self) -> Vec<usize> {
        let mut keys: Vec<_> = self.keys.iter().copied().collect();
        keys.sort_unstable();
        keys
    }
}
