pub mod traits;
pub mod network;
pub mod loader;
pub mod generators;

pub use traits::Graph;
pub use network::{Link, Network, NetworkBuilder, Node};
pub use loader::load_network;
