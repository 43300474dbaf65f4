use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::data_structures::ScanEligibleList;
use crate::{Error, Result};

/// A wrapper around BinaryHeap that pops the smallest priority first.
/// Equal priorities come out in ascending vertex order.
#[derive(Debug, Clone)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (*vertex, *priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Binary min-heap of `(label at push time, node)` entries without
/// decrease-key.
///
/// Every improvement pushes a new entry, so a node may sit in the heap several
/// times. An entry whose key is larger than the node's live label is stale:
/// the fresher entry was popped first and already relaxed every link with a
/// smaller value, so relaxing against the stale key lowers nothing.
#[derive(Debug, Clone)]
pub struct HeapList<W>
where
    W: Float + Zero + Debug + Copy,
{
    heap: BinaryHeapWrapper<usize, OrderedFloat<W>>,
}

impl<W> HeapList<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new() -> Self {
        HeapList {
            heap: BinaryHeapWrapper::new(),
        }
    }

    /// Smallest `(node, key)` entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap.peek().map(|(node, key)| (node, key.into_inner()))
    }
}

impl<W> Default for HeapList<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> ScanEligibleList<W> for HeapList<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn push(&mut self, node: usize, label: W) {
        self.heap.push(node, OrderedFloat(label));
    }

    fn pop(&mut self, _labels: &[W]) -> Result<(usize, W)> {
        self.heap
            .pop()
            .map(|(node, key)| (node, key.into_inner()))
            .ok_or(Error::EmptyList)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
