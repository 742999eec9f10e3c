use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier for label-setting searches.
///
/// Entries are ordered by `(priority, item)`, so items with equal priority pop
/// in ascending item order. This keeps searches reproducible.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the item with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}
