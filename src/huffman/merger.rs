use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use super::{NodeIndex, Weight};

#[derive(Debug, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extraction from an empty priority merger")
    }
}

impl std::error::Error for EmptyError {}

#[derive(Clone, Copy, Debug)]
struct Entry {
    weight: Weight,
    sequence: usize,
    node: NodeIndex,
}

// Lighter weight first, earlier insertion first on equal weight.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.sequence == other.sequence
    }
}

impl Eq for Entry {}

/// Min-priority queue over tree node indices.
///
/// Nodes are extracted in ascending weight order. Nodes of equal weight leave
/// the merger in the order they were inserted, which keeps tree construction
/// reproducible for a given input sequence.
#[derive(Default)]
pub struct PriorityMerger {
    heap: BinaryHeap<Reverse<Entry>>,
    next_sequence: usize,
}

impl PriorityMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn insert(&mut self, node: NodeIndex, weight: Weight) {
        let entry = Entry {
            weight,
            sequence: self.next_sequence,
            node,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes the node with the smallest weight and returns its index
    /// together with its weight.
    pub fn extract_min(&mut self) -> Result<(NodeIndex, Weight), EmptyError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.weight))
            .ok_or(EmptyError)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
