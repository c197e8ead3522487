//! Open set of a search, ordered by estimated total cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sitepath_core::Position;

/// A frontier entry. The minimum is the smallest `f`, then smallest `g`,
/// then smallest `(x, y)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) f: u64,
    pub(crate) g: u64,
    pub(crate) pos: Position,
    pub(crate) key: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the minimum first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap of [`Entry`] values.
///
/// Improving a node pushes a fresh entry instead of re-keying the old one;
/// the search skips entries whose `g` no longer matches its score table.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, entry: Entry) {
        self.heap.push(entry);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
