//! Find a [cycle] in a graph and report it as a sequence of vertices.
//!
//! See available parameters [here](CycleBuilder#implementations).
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use gradus::{
//!     algo::{is_cyclic, Cycle},
//!     core::{id::VertexId, marker::Directed},
//!     storage::AdjList,
//! };
//!
//! let v = |index: usize| VertexId::from(index);
//! let mut graph = AdjList::<(), Directed>::with_vertices(4);
//!
//! graph.add_edge(v(0), v(1), ());
//! graph.add_edge(v(1), v(2), ());
//! graph.add_edge(v(2), v(3), ());
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(v(3), v(1), ());
//!
//! let cycle = Cycle::on(&graph).run().unwrap();
//! assert_eq!(cycle.vertices(), &[v(1), v(2), v(3), v(1)]);
//! ```

use std::fmt;

use crate::core::{GraphBase, Neighbors, VertexSet};

mod builder;
mod dfs;

pub use builder::CycleBuilder;
pub(crate) use dfs::walk_back;

/// Cycle in a graph.
///
/// The vertices are listed in the order of the edges on the cycle and the
/// first vertex is repeated at the end. A self-loop is reported as `[v, v]`.
///
/// See [module](self) documentation for more details and example.
pub struct Cycle<G: GraphBase> {
    vertices: Vec<G::VertexId>,
    edge: G::EdgeId,
}

impl<G> fmt::Debug for Cycle<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle")
            .field("vertices", &self.vertices)
            .field("edge", &self.edge)
            .finish()
    }
}

impl<G> Clone for Cycle<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edge: self.edge.clone(),
        }
    }
}

impl<G> PartialEq for Cycle<G>
where
    G: GraphBase,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edge == other.edge
    }
}

impl<G> Eq for Cycle<G> where G: GraphBase {}

impl<G: GraphBase> Cycle<G> {
    pub(crate) fn new(vertices: Vec<G::VertexId>, edge: G::EdgeId) -> Self {
        Self { vertices, edge }
    }

    /// Vertices on the cycle, the first one repeated at the end.
    pub fn vertices(&self) -> &[G::VertexId] {
        &self.vertices
    }

    /// The edge that closed the cycle during the search. It leads from the
    /// second to last vertex to the first one.
    pub fn edge(&self) -> &G::EdgeId {
        &self.edge
    }

    /// Number of edges on the cycle.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn into_vertices(self) -> Vec<G::VertexId> {
        self.vertices
    }
}

/// Returns `true` if the graph is cyclic.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    Cycle::on(graph).run().is_some()
}

/// Returns `true` if the graph is cyclic, ignoring the direction of the edges.
pub fn is_cyclic_undirected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    Cycle::on(graph).as_undirected().run().is_some()
}
