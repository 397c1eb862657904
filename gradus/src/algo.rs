//! Collection of graph algorithms.
//!
//! Every algorithm is configured by a builder obtained from `on`, for
//! example `ShortestPaths::on(&graph).goal(v).run(start)`. Algorithm-specific
//! failures are reported by the module's own `Error` type whose `kind()`
//! classifies them as an [`ErrorKind`](crate::core::error::ErrorKind).

pub mod bipartite;
pub mod connected_components;
pub mod cut;
pub mod cycle;
pub mod euler;
pub mod functional_cycles;
pub mod shortest_paths;
pub mod toposort;

pub use bipartite::{is_bipartite, Bipartition, Side};
pub use connected_components::{
    is_connected, is_strongly_connected, ConnectedComponents, StronglyConnectedComponents,
};
pub use cut::{augmentation_count, critical_groups, Cuts};
pub use cycle::{is_cyclic, is_cyclic_undirected, Cycle};
pub use euler::EulerCircuit;
pub use functional_cycles::FunctionalCycles;
pub use shortest_paths::ShortestPaths;
pub use toposort::TopoSort;
