use std::collections::VecDeque;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::data_structures::{QueueStatus, ScanEligibleList};
use crate::{Error, Result};

/// First-in first-out list that checks membership by scanning its contents.
///
/// Every push costs O(n) in the list length. Kept as the reference the
/// faster lists are compared against.
#[derive(Debug, Default, Clone)]
pub struct PlainFifo {
    nodes: VecDeque<usize>,
}

impl PlainFifo {
    pub fn new() -> Self {
        PlainFifo { nodes: VecDeque::new() }
    }
}

impl<W> ScanEligibleList<W> for PlainFifo
where
    W: Float + Zero + Debug + Copy,
{
    fn push(&mut self, node: usize, _label: W) {
        if !self.nodes.contains(&node) {
            self.nodes.push_back(node);
        }
    }

    fn pop(&mut self, labels: &[W]) -> Result<(usize, W)> {
        let node = self.nodes.pop_front().ok_or(Error::EmptyList)?;
        Ok((node, labels[node]))
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// First-in first-out list with a status array for O(1) membership checks
#[derive(Debug, Clone)]
pub struct StatusFifo {
    nodes: VecDeque<usize>,
    status: Vec<QueueStatus>,
}

impl StatusFifo {
    /// Creates a list for node ids in `0..node_count`
    pub fn new(node_count: usize) -> Self {
        StatusFifo {
            nodes: VecDeque::with_capacity(node_count),
            status: vec![QueueStatus::Unreached; node_count],
        }
    }
}

impl<W> ScanEligibleList<W> for StatusFifo
where
    W: Float + Zero + Debug + Copy,
{
    fn push(&mut self, node: usize, _label: W) {
        if self.status[node] != QueueStatus::Queued {
            self.nodes.push_back(node);
            self.status[node] = QueueStatus::Queued;
        }
    }

    fn pop(&mut self, labels: &[W]) -> Result<(usize, W)> {
        let node = self.nodes.pop_front().ok_or(Error::EmptyList)?;
        self.status[node] = QueueStatus::Scanned;
        Ok((node, labels[node]))
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.status.fill(QueueStatus::Unreached);
    }
}
