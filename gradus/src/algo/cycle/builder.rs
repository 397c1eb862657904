use crate::{
    adapt::Undirect,
    core::{GraphBase, Neighbors, VertexSet},
};

use super::{dfs::dfs_find, Cycle};

/// Builder for [`Cycle`].
pub struct CycleBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    as_undirected: bool,
}

impl<G> Cycle<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> CycleBuilder<'_, G> {
        CycleBuilder {
            graph,
            as_undirected: false,
        }
    }
}

impl<'a, G> CycleBuilder<'a, G>
where
    G: GraphBase,
{
    /// Instructs the algorithm to ignore the direction of the edges.
    #[allow(clippy::wrong_self_convention)]
    pub fn as_undirected(self) -> Self {
        Self {
            as_undirected: true,
            ..self
        }
    }

    /// Returns a cycle, or `None` if the graph is acyclic.
    ///
    /// In directed graphs, the first cycle closed by the depth-first search
    /// started from the vertices in the order of their IDs is reported.
    pub fn run(self) -> Option<Cycle<G>>
    where
        G: Neighbors + VertexSet,
    {
        let (vertices, edge) = if self.as_undirected && self.graph.is_directed() {
            dfs_find(&Undirect::new(self.graph))?
        } else {
            dfs_find(self.graph)?
        };

        Some(Cycle::new(vertices, edge))
    }
}
