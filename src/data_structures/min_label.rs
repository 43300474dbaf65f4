use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::data_structures::ScanEligibleList;
use crate::{Error, Result};

/// Unordered list that hands out the node with the minimum distance label.
///
/// Extraction scans every waiting node, O(n) per pop. Among equal labels the
/// node that was pushed first wins.
#[derive(Debug, Clone)]
pub struct MinLabelList {
    nodes: Vec<usize>,
    queued: Vec<bool>,
}

impl MinLabelList {
    /// Creates a list for node ids in `0..node_count`
    pub fn new(node_count: usize) -> Self {
        MinLabelList {
            nodes: Vec::new(),
            queued: vec![false; node_count],
        }
    }
}

impl<W> ScanEligibleList<W> for MinLabelList
where
    W: Float + Zero + Debug + Copy,
{
    fn push(&mut self, node: usize, _label: W) {
        if !self.queued[node] {
            self.nodes.push(node);
            self.queued[node] = true;
        }
    }

    fn pop(&mut self, labels: &[W]) -> Result<(usize, W)> {
        let mut best: Option<(usize, W)> = None;
        for (pos, &node) in self.nodes.iter().enumerate() {
            match best {
                Some((_, min)) if labels[node] >= min => {}
                _ => best = Some((pos, labels[node])),
            }
        }

        let (pos, label) = best.ok_or(Error::EmptyList)?;
        let node = self.nodes.remove(pos);
        self.queued[node] = false;
        Ok((node, label))
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.queued.fill(false);
    }
}
