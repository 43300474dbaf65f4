pub mod deque;
pub mod fifo;
pub mod min_label;
pub mod pape;
pub mod priority_queue;
pub mod tracking_deque;

pub use deque::{Deque, NaiveDeque, SimpleDeque};
pub use fifo::{PlainFifo, StatusFifo};
pub use min_label::MinLabelList;
pub use pape::PapeList;
pub use priority_queue::{BinaryHeapWrapper, HeapList};
pub use tracking_deque::TrackingDeque;

use crate::Result;

/// Where a node stands with respect to the scan eligible list during one
/// single-source run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueStatus {
    /// Never entered the list
    #[default]
    Unreached,
    /// Currently in the list
    Queued,
    /// Was in the list and has been removed since
    Scanned,
}

/// The set of nodes waiting for their outgoing links to be scanned.
///
/// Implementations decide where a pushed node goes and whether a node that is
/// already waiting is pushed again.
pub trait ScanEligibleList<W> {
    /// Offers a node whose distance label has just been lowered to `label`
    fn push(&mut self, node: usize, label: W);

    /// Removes the next node to scan and returns it with the label its links
    /// must be relaxed against. `labels` holds the current distance labels.
    fn pop(&mut self, labels: &[W]) -> Result<(usize, W)>;

    /// Returns true if no node is waiting
    fn is_empty(&self) -> bool;

    /// Number of entries in the list
    fn len(&self) -> usize;

    /// Removes every entry and forgets all per-node state
    fn clear(&mut self);
}
