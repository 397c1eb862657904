use crate::core::{marker::Directed, GraphBase, Neighbors, VertexSet};

use super::{
    algo, dfs::dfs, kosaraju::kosaraju, AlgoStrong, AlgoWeak, ConnectedComponents,
    StronglyConnectedComponents,
};

pub struct ConnectedComponentsBuilder<'a, G, A> {
    graph: &'a G,
    algo: A,
}

pub struct StronglyConnectedComponentsBuilder<'a, G, A> {
    graph: &'a G,
    algo: A,
}

impl<G> ConnectedComponents<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> ConnectedComponentsBuilder<'_, G, algo::AnyAlgo> {
        ConnectedComponentsBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<G> StronglyConnectedComponents<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> StronglyConnectedComponentsBuilder<'_, G, algo::AnyAlgo>
    where
        G: GraphBase<EdgeType = Directed>,
    {
        StronglyConnectedComponentsBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> ConnectedComponentsBuilder<'a, G, A>
where
    G: GraphBase,
{
    /// Chooses the DFS algorithm.
    ///
    /// See [`AlgoWeak::Dfs`] for details.
    pub fn dfs(self) -> ConnectedComponentsBuilder<'a, G, algo::Dfs> {
        ConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::Dfs,
        }
    }

    pub fn using(self, algo: AlgoWeak) -> ConnectedComponentsBuilder<'a, G, algo::SpecificAlgoWeak> {
        ConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgoWeak(Some(algo)),
        }
    }
}

impl<'a, G, A> StronglyConnectedComponentsBuilder<'a, G, A>
where
    G: GraphBase<EdgeType = Directed>,
{
    /// Chooses the Kosaraju's algorithm.
    ///
    /// See [`AlgoStrong::Kosaraju`] for details.
    pub fn kosaraju(self) -> StronglyConnectedComponentsBuilder<'a, G, algo::Kosaraju> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::Kosaraju,
        }
    }

    pub fn using(
        self,
        algo: AlgoStrong,
    ) -> StronglyConnectedComponentsBuilder<'a, G, algo::SpecificAlgoStrong> {
        StronglyConnectedComponentsBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgoStrong(Some(algo)),
        }
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G, algo::AnyAlgo>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> ConnectedComponents<G> {
        ConnectedComponents::new(dfs(self.graph))
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G, algo::Dfs>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> ConnectedComponents<G> {
        ConnectedComponents::new(dfs(self.graph))
    }
}

impl<'a, G> ConnectedComponentsBuilder<'a, G, algo::SpecificAlgoWeak>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> ConnectedComponents<G> {
        match self.algo.0 {
            Some(AlgoWeak::Dfs) | None => ConnectedComponents::new(dfs(self.graph)),
        }
    }
}

impl<'a, G> StronglyConnectedComponentsBuilder<'a, G, algo::AnyAlgo>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    pub fn run(self) -> StronglyConnectedComponents<G> {
        StronglyConnectedComponents {
            inner: ConnectedComponents::new(kosaraju(self.graph)),
        }
    }
}

impl<'a, G> StronglyConnectedComponentsBuilder<'a, G, algo::Kosaraju>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    pub fn run(self) -> StronglyConnectedComponents<G> {
        StronglyConnectedComponents {
            inner: ConnectedComponents::new(kosaraju(self.graph)),
        }
    }
}

impl<'a, G> StronglyConnectedComponentsBuilder<'a, G, algo::SpecificAlgoStrong>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    pub fn run(self) -> StronglyConnectedComponents<G> {
        let components = match self.algo.0 {
            Some(AlgoStrong::Kosaraju) | None => kosaraju(self.graph),
        };

        StronglyConnectedComponents {
            inner: ConnectedComponents::new(components),
        }
    }
}
