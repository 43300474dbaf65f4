//! The generic modified label-correcting loop.
//!
//! Every algorithm variant of the crate is this loop with a different scan
//! eligible list: the list decides which node is scanned next, where a node
//! whose label improved is put, and whether a waiting node is pushed again.

use std::fmt::Debug;
use std::ops::{Add, AddAssign};

use log::{debug, trace};
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::data_structures::ScanEligibleList;
use crate::graph::Graph;
use crate::{Error, Result};

/// Counters collected by one or more label-correcting runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Nodes popped from the scan eligible list
    pub scans: usize,
    /// Labels lowered
    pub relaxations: usize,
    /// Heap entries popped with a key above the live label
    pub stale_pops: usize,
}

impl Add for ScanStats {
    type Output = ScanStats;

    fn add(self, other: ScanStats) -> ScanStats {
        ScanStats {
            scans: self.scans + other.scans,
            relaxations: self.relaxations + other.relaxations,
            stale_pops: self.stale_pops + other.stale_pops,
        }
    }
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, other: ScanStats) {
        *self = *self + other;
    }
}

/// Computes shortest paths from `source` into `dist` and `pred`.
///
/// Both slices must hold exactly one entry per node. They are reset before
/// the run, as is `list`, so nothing carries over from a previous source. On
/// return every link `(i, j, len)` satisfies `dist[j] <= dist[i] + len`,
/// nodes the source cannot reach keep an infinite label and no predecessor,
/// and `pred` encodes a shortest path tree.
///
/// Link lengths must be non-negative. A negative cycle reachable from the
/// source keeps the loop running forever.
pub fn label_correcting<W, G, L>(
    graph: &G,
    source: usize,
    list: &mut L,
    dist: &mut [W],
    pred: &mut [Option<usize>],
) -> Result<ScanStats>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
    L: ScanEligibleList<W> + ?Sized,
{
    let n = graph.node_count();
    if !graph.has_node(source) {
        return Err(Error::NodeNotFound(source));
    }
    if dist.len() != n || pred.len() != n {
        return Err(Error::Inconsistency(format!(
            "label arrays hold {} distances and {} predecessors for {} nodes",
            dist.len(),
            pred.len(),
            n
        )));
    }

    dist.fill(W::infinity());
    pred.fill(None);
    list.clear();

    let mut stats = ScanStats::default();
    dist[source] = W::zero();
    list.push(source, W::zero());

    while !list.is_empty() {
        let (i, key) = list.pop(dist)?;
        stats.scans += 1;

        // Only the heap can hand out a key above the live label; relaxing
        // against it cannot lower any neighbour.
        if key > dist[i] {
            stats.stale_pops += 1;
            trace!("stale entry for node {} ({:?} > {:?})", i, key, dist[i]);
        }

        for (j, len) in graph.outgoing_edges(i) {
            let candidate = key + len;
            if candidate < dist[j] {
                dist[j] = candidate;
                pred[j] = Some(i);
                stats.relaxations += 1;
                list.push(j, candidate);
            }
        }
    }

    debug!(
        "source {}: {} scans, {} relaxations, {} stale pops",
        source, stats.scans, stats.relaxations, stats.stale_pops
    );

    Ok(stats)
}
