pub mod traits;
pub mod label_correcting;
pub mod discipline;
pub mod apsp;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use label_correcting::{label_correcting, ScanStats};
pub use discipline::{Discipline, Mlc};
pub use apsp::{compute_all_pairs, AllPairs, AllPairsShortestPaths, ApspConfig, Method};
