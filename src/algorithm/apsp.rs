//! All-pairs shortest paths by repeating a single-source run per node.

use std::fmt::{self, Debug};
use std::str::FromStr;
use std::time::Instant;

use log::{debug, info};
use num_traits::{Float, Zero};
use rayon::prelude::*;
use serde::Serialize;

use crate::algorithm::discipline::Discipline;
use crate::algorithm::label_correcting::ScanStats;
use crate::algorithm::traits::trace_path;
use crate::graph::Graph;
use crate::{Error, Result};

/// Algorithm family requested by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    /// Minimum distance label, i.e. Dijkstra
    Dijkstra,
    /// Deque with the Dr. Pape heuristic
    Deque,
    /// First-in first-out
    Fifo,
    /// Floyd-Warshall; the name is reserved but has no implementation
    FloydWarshall,
}

impl Method {
    /// Scan eligible list used for this method unless the configuration
    /// overrides it
    pub fn default_discipline(&self) -> Result<Discipline> {
        match self {
            Method::Dijkstra => Ok(Discipline::Heap),
            Method::Deque => Ok(Discipline::Deque),
            Method::Fifo => Ok(Discipline::Fifo),
            Method::FloydWarshall => Err(Error::NotImplemented("Floyd-Warshall")),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Matches case-insensitively on the prefixes `dij`, `deq`, `fifo` and `fw`
    fn from_str(s: &str) -> Result<Self> {
        let method = s.trim().to_lowercase();
        if method.starts_with("dij") {
            Ok(Method::Dijkstra)
        } else if method.starts_with("deq") {
            Ok(Method::Deque)
        } else if method.starts_with("fifo") {
            Ok(Method::Fifo)
        } else if method.starts_with("fw") {
            Ok(Method::FloydWarshall)
        } else {
            Err(Error::Config(format!(
                "unknown shortest path algorithm '{}', choose one of: dij; deq; fifo; fw",
                s
            )))
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Dijkstra => "dij",
            Method::Deque => "deq",
            Method::Fifo => "fifo",
            Method::FloydWarshall => "fw",
        };
        f.write_str(name)
    }
}

/// Configuration of an all-pairs run
#[derive(Debug, Clone)]
pub struct ApspConfig {
    /// Algorithm family
    pub method: Method,
    /// Scan eligible list overriding the method's default
    pub discipline: Option<Discipline>,
    /// Compute rows on the rayon thread pool
    pub parallel: bool,
    /// Reject networks with negative link lengths before computing anything
    pub check_lengths: bool,
}

impl Default for ApspConfig {
    fn default() -> Self {
        ApspConfig {
            method: Method::Deque,
            discipline: None,
            parallel: false,
            check_lengths: true,
        }
    }
}

impl ApspConfig {
    /// Creates a configuration for the given method
    pub fn new(method: Method) -> Self {
        ApspConfig {
            method,
            ..Default::default()
        }
    }

    /// Creates a configuration from a method name such as `"dij"` or `"DEQUE"`
    pub fn from_method_name(name: &str) -> Result<Self> {
        Ok(ApspConfig::new(name.parse()?))
    }

    /// Use a specific scan eligible list
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = Some(discipline);
        self
    }

    /// Enable or disable computing rows in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable the up-front negative length check
    pub fn with_length_check(mut self, check: bool) -> Self {
        self.check_lengths = check;
        self
    }

    /// The scan eligible list this configuration resolves to
    pub fn resolve_discipline(&self) -> Result<Discipline> {
        let default = self.method.default_discipline()?;
        Ok(self.discipline.unwrap_or(default))
    }
}

/// Dense all-pairs distance and predecessor matrices, row `i` holding the
/// single-source result from node `i`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllPairs<W> {
    node_count: usize,
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    discipline: Discipline,
    stats: ScanStats,
}

impl<W> AllPairs<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Shortest distance from `source` to `target`, `None` if unreachable or
    /// out of range
    pub fn distance(&self, source: usize, target: usize) -> Option<W> {
        self.index(source, target)
            .map(|idx| self.distances[idx])
            .filter(|d| d.is_finite())
    }

    /// Predecessor of `target` on the shortest path from `source`
    pub fn predecessor(&self, source: usize, target: usize) -> Option<usize> {
        self.index(source, target).and_then(|idx| self.predecessors[idx])
    }

    /// Distance labels from `source`; unreachable entries are infinite
    ///
    /// # Panics
    ///
    /// Panics if `source >= node_count()`. Use [`AllPairs::distance`] for a
    /// checked lookup.
    pub fn distance_row(&self, source: usize) -> &[W] {
        let start = source * self.node_count;
        &self.distances[start..start + self.node_count]
    }

    /// Predecessors on the shortest path tree rooted at `source`
    ///
    /// # Panics
    ///
    /// Panics if `source >= node_count()`.
    pub fn predecessor_row(&self, source: usize) -> &[Option<usize>] {
        let start = source * self.node_count;
        &self.predecessors[start..start + self.node_count]
    }

    /// Iterates `(distance row, predecessor row)` per source
    pub fn rows(&self) -> impl Iterator<Item = (&[W], &[Option<usize>])> + '_ {
        (0..self.node_count).map(move |s| (self.distance_row(s), self.predecessor_row(s)))
    }

    /// Nodes on a shortest path from `source` to `target`, both included
    pub fn path(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        if source >= self.node_count {
            return None;
        }
        let reachable = self.distance(source, target).is_some();
        trace_path(self.predecessor_row(source), source, target, reachable)
    }

    /// The scan eligible list the matrices were computed with
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Work summed over every source
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    fn index(&self, source: usize, target: usize) -> Option<usize> {
        (source < self.node_count && target < self.node_count)
            .then(|| source * self.node_count + target)
    }
}

/// All-pairs shortest path driver
#[derive(Debug, Clone, Default)]
pub struct AllPairsShortestPaths {
    config: ApspConfig,
}

impl AllPairsShortestPaths {
    pub fn new(config: ApspConfig) -> Self {
        AllPairsShortestPaths { config }
    }

    pub fn config(&self) -> &ApspConfig {
        &self.config
    }

    /// Runs one single-source computation per node. Each row starts from
    /// fresh labels and a fresh scan eligible list.
    pub fn run<W, G>(&self, graph: &G) -> Result<AllPairs<W>>
    where
        W: Float + Zero + Debug + Copy + Send + Sync,
        G: Graph<W> + Sync + ?Sized,
    {
        let discipline = self.config.resolve_discipline()?;
        if self.config.check_lengths {
            graph.validate_non_negative()?;
        }

        let n = graph.node_count();
        let mut distances = vec![W::infinity(); n * n];
        let mut predecessors = vec![None; n * n];

        info!(
            "computing all-pairs shortest paths for {} nodes with {} ({})",
            n, self.config.method, discipline
        );
        let start = Instant::now();

        let stats = if n == 0 {
            ScanStats::default()
        } else if self.config.parallel {
            distances
                .par_chunks_mut(n)
                .zip(predecessors.par_chunks_mut(n))
                .enumerate()
                .map(|(source, (dist, pred))| discipline.run(graph, source, dist, pred))
                .collect::<Result<Vec<ScanStats>>>()?
                .into_iter()
                .fold(ScanStats::default(), |acc, s| acc + s)
        } else {
            let mut total = ScanStats::default();
            for (source, (dist, pred)) in distances
                .chunks_mut(n)
                .zip(predecessors.chunks_mut(n))
                .enumerate()
            {
                total += discipline.run(graph, source, dist, pred)?;
            }
            total
        };

        info!(
            "processing time for all-pairs shortest paths: {:.2?}",
            start.elapsed()
        );
        debug!(
            "{} scans, {} relaxations, {} stale pops",
            stats.scans, stats.relaxations, stats.stale_pops
        );

        Ok(AllPairs {
            node_count: n,
            distances,
            predecessors,
            discipline,
            stats,
        })
    }
}

/// Computes all-pairs shortest paths with the method named by `method`
/// (`dij`, `deq` or `fifo`, matched case-insensitively by prefix)
pub fn compute_all_pairs<W, G>(graph: &G, method: &str) -> Result<AllPairs<W>>
where
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: Graph<W> + Sync + ?Sized,
{
    AllPairsShortestPaths::new(ApspConfig::from_method_name(method)?).run(graph)
}
