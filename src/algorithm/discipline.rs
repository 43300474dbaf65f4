use std::fmt::{self, Debug};
use std::str::FromStr;

use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::label_correcting::{label_correcting, ScanStats};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{HeapList, MinLabelList, PapeList, PlainFifo, StatusFifo, TrackingDeque};
use crate::graph::Graph;
use crate::{Error, Result};

/// Scan eligible list used by a label-correcting run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    /// FIFO, membership checked by scanning the list
    PlainFifo,
    /// FIFO with a status array
    Fifo,
    /// Dr. Pape deque on a vector with O(n) front insertion
    NaiveDeque,
    /// Dr. Pape deque on the fixed-capacity intrusive list
    Deque,
    /// Dr. Pape deque whose link array also records node status
    TrackingDeque,
    /// Dijkstra, minimum label found by a linear scan
    MinLabel,
    /// Dijkstra on a binary heap with lazy deletion
    Heap,
}

impl Discipline {
    /// Every discipline, cheapest reference first
    pub const ALL: [Discipline; 7] = [
        Discipline::PlainFifo,
        Discipline::Fifo,
        Discipline::NaiveDeque,
        Discipline::Deque,
        Discipline::TrackingDeque,
        Discipline::MinLabel,
        Discipline::Heap,
    ];

    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Discipline::PlainFifo => "plain-fifo",
            Discipline::Fifo => "fifo",
            Discipline::NaiveDeque => "naive-deque",
            Discipline::Deque => "deque",
            Discipline::TrackingDeque => "tracking-deque",
            Discipline::MinLabel => "min-label",
            Discipline::Heap => "heap",
        }
    }

    /// Returns true for the two Dijkstra lists, which rely on non-negative
    /// lengths to scan every node once
    pub fn is_label_setting(&self) -> bool {
        matches!(self, Discipline::MinLabel | Discipline::Heap)
    }

    /// Runs the label-correcting loop from `source` with a fresh list of this
    /// kind
    pub fn run<W, G>(
        &self,
        graph: &G,
        source: usize,
        dist: &mut [W],
        pred: &mut [Option<usize>],
    ) -> Result<ScanStats>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W> + ?Sized,
    {
        let n = graph.node_count();
        match self {
            Discipline::PlainFifo => label_correcting(graph, source, &mut PlainFifo::new(), dist, pred),
            Discipline::Fifo => label_correcting(graph, source, &mut StatusFifo::new(n), dist, pred),
            Discipline::NaiveDeque => label_correcting(graph, source, &mut PapeList::naive(n), dist, pred),
            Discipline::Deque => label_correcting(graph, source, &mut PapeList::new(n), dist, pred),
            Discipline::TrackingDeque => label_correcting(graph, source, &mut TrackingDeque::new(n), dist, pred),
            Discipline::MinLabel => label_correcting(graph, source, &mut MinLabelList::new(n), dist, pred),
            Discipline::Heap => label_correcting(graph, source, &mut HeapList::new(), dist, pred),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Discipline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Discipline::ALL
            .into_iter()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Discipline::ALL.iter().map(|d| d.name()).collect();
                Error::Config(format!(
                    "unknown discipline '{}', choose one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

/// Modified label-correcting single-source shortest path algorithm
#[derive(Debug, Clone, Copy)]
pub struct Mlc {
    discipline: Discipline,
}

impl Mlc {
    /// Creates the algorithm with the given scan eligible list
    pub fn new(discipline: Discipline) -> Self {
        Mlc { discipline }
    }

    /// FIFO label-correcting algorithm
    pub fn fifo() -> Self {
        Mlc::new(Discipline::Fifo)
    }

    /// Deque label-correcting algorithm with the Dr. Pape heuristic
    pub fn deque() -> Self {
        Mlc::new(Discipline::Deque)
    }

    /// Dijkstra's algorithm without a heap
    pub fn dijkstra() -> Self {
        Mlc::new(Discipline::MinLabel)
    }

    /// Dijkstra's algorithm on a binary heap
    pub fn dijkstra_heap() -> Self {
        Mlc::new(Discipline::Heap)
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }
}

impl Default for Mlc {
    fn default() -> Self {
        Mlc::deque()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Mlc
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        match self.discipline {
            Discipline::PlainFifo => "FIFO (plain list)",
            Discipline::Fifo => "FIFO",
            Discipline::NaiveDeque => "Deque (naive)",
            Discipline::Deque => "Deque",
            Discipline::TrackingDeque => "Deque (tracking)",
            Discipline::MinLabel => "Dijkstra",
            Discipline::Heap => "Dijkstra (heap)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.node_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors = vec![None; n];

        let stats = self.discipline.run(graph, source, &mut distances, &mut predecessors)?;

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}
