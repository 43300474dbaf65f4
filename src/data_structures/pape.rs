use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::data_structures::{Deque, NaiveDeque, QueueStatus, ScanEligibleList, SimpleDeque};
use crate::{Error, Result};

/// Scan eligible list following the Dr. Pape heuristic.
///
/// A node whose label drops after it has already been scanned goes to the
/// front, a node reached for the first time goes to the back, and a node
/// that is waiting stays where it is.
#[derive(Debug, Clone)]
pub struct PapeList<D> {
    deque: D,
    status: Vec<QueueStatus>,
}

impl<D: Deque> PapeList<D> {
    /// Wraps an empty deque for node ids in `0..node_count`
    pub fn with_deque(deque: D, node_count: usize) -> Self {
        debug_assert!(deque.is_empty());
        PapeList {
            deque,
            status: vec![QueueStatus::Unreached; node_count],
        }
    }

    /// Status of a node in the current run
    pub fn status(&self, node: usize) -> QueueStatus {
        self.status[node]
    }
}

impl PapeList<NaiveDeque> {
    /// Pape list on a vector, front pushes cost O(n)
    pub fn naive(node_count: usize) -> Self {
        PapeList::with_deque(NaiveDeque::new(), node_count)
    }
}

impl PapeList<SimpleDeque> {
    /// Pape list on the fixed-capacity deque, every operation O(1)
    pub fn new(node_count: usize) -> Self {
        PapeList::with_deque(SimpleDeque::new(node_count), node_count)
    }
}

impl<W, D> ScanEligibleList<W> for PapeList<D>
where
    W: Float + Zero + Debug + Copy,
    D: Deque,
{
    fn push(&mut self, node: usize, _label: W) {
        match self.status[node] {
            QueueStatus::Scanned => self.deque.push_front(node),
            QueueStatus::Unreached => self.deque.push_back(node),
            QueueStatus::Queued => return,
        }
        self.status[node] = QueueStatus::Queued;
    }

    fn pop(&mut self, labels: &[W]) -> Result<(usize, W)> {
        let node = self.deque.pop_front().ok_or(Error::EmptyList)?;
        self.status[node] = QueueStatus::Scanned;
        Ok((node, labels[node]))
    }

    fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    fn len(&self) -> usize {
        self.deque.len()
    }

    fn clear(&mut self) {
        self.deque.clear();
        self.status.fill(QueueStatus::Unreached);
    }
}
