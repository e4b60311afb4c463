//! Min-priority frontier with first-in tie-breaking.
//!
//! Entries are ordered by `(priority, seq)` where `seq` is a monotonically
//! increasing insertion counter, so equal priorities pop in the order they
//! were pushed. Re-pushing a coordinate leaves the old entry in the heap;
//! callers discard stale entries when they pop them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gridwalk_core::Coord;

#[derive(Debug, Clone, Copy)]
struct Entry {
    pos: Coord,
    priority: i32,
    /// Lower = inserted earlier = popped first among equal priorities.
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Open set shared by Dijkstra and A*.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, pos: Coord, priority: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { pos, priority, seq }));
    }

    /// Pop the lowest-priority coordinate (ties broken FIFO).
    pub(crate) fn pop(&mut self) -> Option<Coord> {
        self.heap.pop().map(|Reverse(entry)| entry.pos)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(Coord::new(0, 0), 3);
        f.push(Coord::new(0, 1), 1);
        f.push(Coord::new(0, 2), 2);
        assert_eq!(f.pop(), Some(Coord::new(0, 1)));
        assert_eq!(f.pop(), Some(Coord::new(0, 2)));
        assert_eq!(f.pop(), Some(Coord::new(0, 0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut f = Frontier::new();
        // Coordinates chosen so that their own ordering disagrees with
        // insertion order.
        f.push(Coord::new(9, 9), 1);
        f.push(Coord::new(0, 0), 1);
        f.push(Coord::new(5, 5), 1);
        assert_eq!(f.pop(), Some(Coord::new(9, 9)));
        assert_eq!(f.pop(), Some(Coord::new(0, 0)));
        assert_eq!(f.pop(), Some(Coord::new(5, 5)));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::new();
        f.push(Coord::new(1, 1), 5);
        f.push(Coord::new(1, 1), 2);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop(), Some(Coord::new(1, 1)));
        assert_eq!(f.pop(), Some(Coord::new(1, 1)));
        assert_eq!(f.pop(), None);
    }
}
