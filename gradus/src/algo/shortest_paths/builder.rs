use std::marker::PhantomData;

use crate::core::{
    weight::{self, GetWeight, IsConstWeight, Weight},
    GraphBase, GraphRef, Neighbors, VertexSet,
};

use super::{algo, bfs::bfs, dial::dial, zero_one::zero_one, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, W, G, F, A>
where
    G: GraphBase,
{
    graph: &'a G,
    goal: Option<G::VertexId>,
    edge_weight: F,
    algo: A,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> ShortestPaths<W, G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> ShortestPathsBuilder<'_, W, G, weight::Identity, algo::AnyAlgo> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            edge_weight: weight::Identity,
            algo: algo::AnyAlgo,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F, A> ShortestPathsBuilder<'a, W, G, F, A>
where
    G: GraphBase,
{
    /// Stops the search as soon as the goal is settled. The run fails with
    /// [`Error::GoalNotReached`] if it never is.
    pub fn goal(self, goal: G::VertexId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn edge_weight<F2, E>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, W, G, F2, A>
    where
        G: GraphRef<E>,
        F2: GetWeight<E, W>,
        W: Weight,
    {
        ShortestPathsBuilder {
            edge_weight,
            graph: self.graph,
            goal: self.goal,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    // Using closures in `edge_weight` gives "type annotations needed" for the
    // closure argument. This method with explicit Fn signature circumvents the
    // problem.
    pub fn edge_weight_fn<F2, E>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, W, G, F2, A>
    where
        G: GraphRef<E>,
        F2: Fn(&E) -> W,
        W: Weight,
    {
        self.edge_weight(edge_weight)
    }

    pub fn bfs(self) -> ShortestPathsBuilder<'a, W, G, F, algo::Bfs>
    where
        G: Neighbors,
        F: IsConstWeight,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::Bfs,
            ty: PhantomData,
        }
    }

    /// Uses Dial's bucket queue. Every edge weight must be in
    /// `0..=max_weight`, otherwise the run fails with
    /// [`Error::WeightOutOfRange`]. Buckets are allocated for the largest
    /// weight actually relaxed, not for `max_weight`.
    pub fn dial(self, max_weight: usize) -> ShortestPathsBuilder<'a, W, G, F, algo::Dial> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::Dial(max_weight),
            ty: PhantomData,
        }
    }

    pub fn zero_one(self) -> ShortestPathsBuilder<'a, W, G, F, algo::ZeroOne> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::ZeroOne,
            ty: PhantomData,
        }
    }
}

// Unit weight fixes the distance type, which also resolves the otherwise
// unconstrained weight parameter of `ShortestPaths::on`.
impl<'a, G, F, A> ShortestPathsBuilder<'a, usize, G, F, A>
where
    G: GraphBase,
{
    /// Treats every edge as having weight one. Distances are hop counts.
    pub fn unit_weight(self) -> ShortestPathsBuilder<'a, usize, G, weight::Unit, A> {
        ShortestPathsBuilder {
            edge_weight: weight::Unit,
            graph: self.graph,
            goal: self.goal,
            algo: self.algo,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::AnyAlgo>
where
    G: GraphBase,
{
    pub fn run<E>(self, source: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet + GraphRef<E>,
        F: GetWeight<E, W>,
        W: Weight,
    {
        self.run_multi([source])
    }

    /// Searches from all sources at once. The distance of a vertex is then the
    /// distance to its nearest source.
    pub fn run_multi<E, I>(self, sources: I) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet + GraphRef<E>,
        F: GetWeight<E, W>,
        W: Weight,
        I: IntoIterator<Item = G::VertexId>,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;
        let sources = checked_sources(graph, sources)?;

        match edge_weight.get_const() {
            // The weight is constant, we can use standard BFS algorithm
            // without any overhead.
            Some(edge_dist) => bfs(graph, sources, goal, edge_dist),
            None => {
                let max_weight = max_weight(graph, &edge_weight)?;
                dial(graph, sources, goal, &edge_weight, max_weight)
            }
        }
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::Bfs>
where
    G: GraphBase,
{
    pub fn run(self, source: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet,
        F: GetWeight<(), W>,
        W: Weight,
    {
        self.run_multi([source])
    }

    pub fn run_multi<I>(self, sources: I) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet,
        F: GetWeight<(), W>,
        W: Weight,
        I: IntoIterator<Item = G::VertexId>,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;
        let sources = checked_sources(graph, sources)?;
        let edge_dist = edge_weight.get_const().ok_or(Error::EdgeNotAvailable)?;

        bfs(graph, sources, goal, edge_dist)
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::Dial>
where
    G: GraphBase,
{
    pub fn run<E>(self, source: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet + GraphRef<E>,
        F: GetWeight<E, W>,
        W: Weight,
    {
        self.run_multi([source])
    }

    pub fn run_multi<E, I>(self, sources: I) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet + GraphRef<E>,
        F: GetWeight<E, W>,
        W: Weight,
        I: IntoIterator<Item = G::VertexId>,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            algo: algo::Dial(max_weight),
            ..
        } = self;
        let sources = checked_sources(graph, sources)?;

        dial(graph, sources, goal, &edge_weight, max_weight)
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::ZeroOne>
where
    G: GraphBase,
{
    pub fn run<E>(self, source: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet + GraphRef<E>,
        F: GetWeight<E, W>,
        W: Weight,
    {
        self.run_multi([source])
    }

    pub fn run_multi<E, I>(self, sources: I) -> Result<ShortestPaths<W, G>, Error>
    where
        G: Neighbors + VertexSet + GraphRef<E>,
        F: GetWeight<E, W>,
        W: Weight,
        I: IntoIterator<Item = G::VertexId>,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;
        let sources = checked_sources(graph, sources)?;

        zero_one(graph, sources, goal, &edge_weight)
    }
}

fn checked_sources<G, I>(graph: &G, sources: I) -> Result<Vec<G::VertexId>, Error>
where
    G: VertexSet,
    I: IntoIterator<Item = G::VertexId>,
{
    sources
        .into_iter()
        .map(|source| {
            if graph.contains_vertex(&source) {
                Ok(source)
            } else {
                Err(Error::StartAbsent)
            }
        })
        .collect()
}

fn max_weight<G, E, W, F>(graph: &G, edge_weight: &F) -> Result<usize, Error>
where
    G: GraphRef<E>,
    F: GetWeight<E, W>,
    W: Weight,
{
    let mut max = 0;

    for edge in graph.edges_by_id() {
        let attr = graph.edge(&edge).ok_or(Error::EdgeNotAvailable)?;
        let bits = edge_weight
            .get(attr)
            .to_bits()
            .ok_or(Error::NegativeWeight)?;
        max = max.max(bits);
    }

    usize::try_from(max).map_err(|_| Error::WeightOutOfRange {
        weight: max,
        max: usize::MAX as u64,
    })
}
