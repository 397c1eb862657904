use crate::core::{id::IntegerIdType, marker::Directed, GraphBase, Neighbors, VertexSet};

use super::{algo, dfs::dfs, kahn::kahn, Algo, Error, TopoSort};

pub struct TopoSortBuilder<'a, G, A> {
    graph: &'a G,
    algo: A,
}

impl<G> TopoSort<G>
where
    G: GraphBase<EdgeType = Directed> + VertexSet,
{
    pub fn on(graph: &G) -> TopoSortBuilder<'_, G, algo::AnyAlgo> {
        TopoSortBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> TopoSortBuilder<'a, G, A> {
    pub fn dfs(self) -> TopoSortBuilder<'a, G, algo::Dfs> {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::Dfs,
        }
    }

    pub fn kahn(self) -> TopoSortBuilder<'a, G, algo::Kahn>
    where
        G: GraphBase,
        G::VertexId: IntegerIdType,
    {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::Kahn,
        }
    }

    pub fn with(self, algo: Algo) -> TopoSortBuilder<'a, G, algo::SpecificAlgo>
    where
        G: GraphBase,
        G::VertexId: IntegerIdType,
    {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(algo),
        }
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::AnyAlgo>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    pub fn run(self) -> Result<TopoSort<G>, Error<G>> {
        dfs(self.graph)
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::Dfs>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    pub fn run(self) -> Result<TopoSort<G>, Error<G>> {
        dfs(self.graph)
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::Kahn>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    pub fn run(self) -> Result<TopoSort<G>, Error<G>> {
        kahn(self.graph)
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::SpecificAlgo>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    pub fn run(self) -> Result<TopoSort<G>, Error<G>> {
        match self.algo.0 {
            Algo::Dfs => dfs(self.graph),
            Algo::Kahn => kahn(self.graph),
        }
    }
}
