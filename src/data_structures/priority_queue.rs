use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

use num_traits::Float;
use ordered_float::OrderedFloat;

/// A heap entry. Ordered by priority, then by insertion sequence, so the
/// vertex type never needs an ordering of its own.
#[derive(Debug)]
struct Entry<V, P>
where
    P: Float,
{
    priority: OrderedFloat<P>,
    sequence: u64,
    vertex: V,
}

impl<V, P: Float> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Float> Eq for Entry<V, P> {}

impl<V, P: Float> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Float> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Min-priority frontier of `(distance, vertex)` pairs for label-setting searches.
///
/// There is no decrease-key: a vertex may be pushed several times and the
/// caller discards stale entries when they are popped. Equal priorities
/// come out in insertion order.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    P: Float,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Entry<V, P>>>,
    /// Number of pushes so far
    pushed: u64,
}

impl<V, P> Frontier<V, P>
where
    V: Debug,
    P: Float + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the number of pushes since creation
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Pushes a vertex with the given tentative distance
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse(Entry {
            priority: OrderedFloat(priority),
            sequence: self.pushed,
            vertex,
        }));
        self.pushed += 1;
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.priority.into_inner()))
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Debug,
    P: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
