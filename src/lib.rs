//! MLC SSSP - Modified Label-Correcting shortest path algorithms
//!
//! This library implements the Modified Label-Correcting (MLC) family of
//! single-source shortest path algorithms on directed graphs with real
//! non-negative link lengths, and an all-pairs driver that repeats them once
//! per source node.
//!
//! The scan-eligible list is pluggable: FIFO, deque with the Dr. Pape
//! heuristic, and two minimum-label (Dijkstra) lists, one with a linear scan and
//! one with a lazily-invalidated binary heap.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;

pub use algorithm::{
    apsp::{compute_all_pairs, AllPairs, AllPairsShortestPaths, ApspConfig, Method},
    discipline::{Discipline, Mlc},
    label_correcting::{label_correcting, ScanStats},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::network::{Network, NetworkBuilder};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(usize),

    #[error("Link not found: {0}")]
    LinkNotFound(usize),

    #[error("Inconsistency found: {0}")]
    Inconsistency(String),

    #[error("Duplicate node id found: {0}")]
    DuplicateId(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0} is not implemented yet")]
    NotImplemented(&'static str),

    #[error("Empty scan eligible list")]
    EmptyList,

    #[error("Invalid length {length} on link {link}, lengths must be finite and non-negative")]
    NegativeLength { link: usize, length: f64 },

    #[error("Failed to parse line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
