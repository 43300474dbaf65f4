use std::collections::HashSet;
use std::fmt::Debug;

use log::warn;
use num_traits::{Float, Zero};

use crate::algorithm::label_correcting::ScanStats;
use crate::graph::Graph;
use crate::Result;

/// Result of a single-source shortest path run
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance labels from the source; unreachable nodes stay infinite
    pub distances: Vec<W>,

    /// Predecessor of each node in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node id
    pub source: usize,

    /// Work done by the run
    pub stats: ScanStats,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest distance to `target`, or `None` if it is unreachable
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances
            .get(target)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Returns true if the source reaches `target`
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    /// Nodes on a shortest path from the source to `target`, both included
    pub fn path(&self, target: usize) -> Option<Vec<usize>> {
        trace_path(&self.predecessors, self.source, target, self.is_reachable(target))
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path(target)
    }
}

/// Walks a predecessor row back from `target` to `source`.
///
/// Returns `None` when `target` is unreachable or the row does not lead back
/// to `source`.
pub(crate) fn trace_path(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
    reachable: bool,
) -> Option<Vec<usize>> {
    if target >= predecessors.len() || !reachable {
        return None;
    }

    let mut path = Vec::new();
    let mut current = target;
    let mut visited = HashSet::new();

    // Build path in reverse order
    while current != source {
        if !visited.insert(current) {
            warn!("cycle detected in path reconstruction at node {}", current);
            return None;
        }

        path.push(current);
        current = predecessors[current]?;
    }

    path.push(source);
    path.reverse();

    Some(path)
}
