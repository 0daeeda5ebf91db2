use std::cmp::Ordering;
use std::collections::BinaryHeap;

use clearpath_core::Point;

/// An open-list entry. Ordered by `priority`, then by insertion `seq`, so
/// equal priorities pop first-in first-out. The position is never compared.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    /// Cost-so-far at push time; lets the search skip superseded entries.
    pub(crate) g: f64,
    pub(crate) pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue with deterministic tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, pos: Point, g: f64, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            g,
            pos,
        });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }
}
