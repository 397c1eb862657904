//! Graph representations and classical traversal algorithms.
//!
//! Graphs are accessed through capability traits in [`core`], so the same
//! algorithm runs on an explicit [storage](storage), on a view produced by
//! an [adapter](adapt) or on an implicit graph like the ones in [`puzzle`].

pub mod adapt;
pub mod algo;
pub mod core;
pub mod infra;
pub mod puzzle;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{EdgeSet, GraphBase, GraphRef, NeighborRef, Neighbors, VertexSet},
        visit::Visitor,
    };
}
