//! Find shortest paths from one or more sources in graphs with small integer
//! edge weights.
//!
//! All algorithms here run in linear time with respect to the graph size:
//! breadth-first search for unit weights, the 0-1 BFS for weights in `{0, 1}`
//! and Dial's bucket queue for weights bounded by a small constant. Unreached
//! vertices have no distance; there is no sentinel value.
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use gradus::{
//!     algo::ShortestPaths,
//!     core::{id::VertexId, marker::Undirected},
//!     storage::AdjList,
//! };
//!
//! let v = |index: usize| VertexId::from(index);
//! let mut graph = AdjList::<(), Undirected>::with_vertices(4);
//!
//! graph.add_edge(v(0), v(1), ());
//! graph.add_edge(v(1), v(2), ());
//! graph.add_edge(v(0), v(3), ());
//!
//! let paths = ShortestPaths::on(&graph).unit_weight().bfs().run(v(0)).unwrap();
//!
//! assert_eq!(paths.dist(v(2)), Some(&2));
//! assert_eq!(paths.path_to(v(2)), Some(vec![v(0), v(1), v(2)]));
//! ```

use std::borrow::Borrow;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{error::ErrorKind, GraphBase};

mod bfs;
mod builder;
mod dial;
mod zero_one;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from the source vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<W, G: GraphBase> {
    sources: Vec<G::VertexId>,
    // Using HashMaps because the algorithm supports early termination when
    // reaching given goal, and implicit graphs have no vertex bound.
    dist: FxHashMap<G::VertexId, W>,
    pred: FxHashMap<G::VertexId, G::VertexId>,
}

impl<W, G> ShortestPaths<W, G>
where
    G: GraphBase,
{
    /// The first source vertex where the search was started.
    pub fn source(&self) -> Option<&G::VertexId> {
        self.sources.first()
    }

    pub fn sources(&self) -> &[G::VertexId] {
        &self.sources
    }

    /// Returns the distance from the nearest source to the given vertex, or
    /// `None` if it's not known.
    ///
    /// There are two causes why the distance is not known: (1) the vertex is
    /// not reachable, or (2) the [goal](ShortestPathsBuilder::goal) was
    /// reached before settling the given vertex.
    pub fn dist<VI>(&self, to: VI) -> Option<&W>
    where
        VI: Borrow<G::VertexId>,
    {
        self.dist.get(to.borrow())
    }

    /// Returns an iterator over the predecessors of the given vertex on its
    /// shortest path, ending with a source vertex.
    ///
    /// The iterator is empty for a source or an unreached vertex.
    pub fn reconstruct(&self, to: G::VertexId) -> PathReconstruction<'_, G> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the whole path from a source to the given vertex, both
    /// included, or `None` if the vertex was not reached.
    pub fn path_to(&self, to: G::VertexId) -> Option<Vec<G::VertexId>> {
        self.dist.get(&to)?;

        let mut path = self.reconstruct(to.clone()).collect::<Vec<_>>();
        path.reverse();
        path.push(to);

        Some(path)
    }

    /// Number of vertices with a known distance.
    pub fn reached_count(&self) -> usize {
        self.dist.len()
    }
}

/// Algorithm for [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Breadth-first
    /// search](https://en.wikipedia.org/wiki/Breadth-first_search) for graphs
    /// where all edges have the same weight.
    Bfs,

    /// [Dial's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm#Specialized_variants),
    /// Dijkstra's algorithm with a ring of buckets instead of a heap. Edge
    /// weights must be integers in `0..=max_weight`.
    Dial,

    /// [0-1 BFS](https://codeforces.com/blog/entry/22276) using a double-ended
    /// queue. Edge weights must be either zero or one.
    ZeroOne,
}

mod algo {
    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct Bfs;

    #[derive(Debug)]
    pub struct Dial(pub usize);

    #[derive(Debug)]
    pub struct ZeroOne;
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A source vertex is not in the graph.
    #[error("start vertex is not in the graph")]
    StartAbsent,

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// An edge weight exceeds the maximum the algorithm was configured for.
    #[error("edge weight {weight} exceeds the maximum of {max}")]
    WeightOutOfRange { weight: u64, max: u64 },

    /// The bucket queue cannot hold the distances spanned by an edge weight.
    #[error("edge weight {weight} needs more buckets than can be allocated")]
    BucketsUnavailable { weight: u64 },

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,

    /// An edge not available.
    ///
    /// This error should not happen in normal circumstances. If it does, it
    /// indicates a bad implementation of the graph.
    #[error("edge not available")]
    EdgeNotAvailable,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::StartAbsent
            | Error::NegativeWeight
            | Error::WeightOutOfRange { .. }
            | Error::BucketsUnavailable { .. } => ErrorKind::InputFormat,
            Error::GoalNotReached => ErrorKind::NotFound,
            Error::EdgeNotAvailable => ErrorKind::Logic,
        }
    }
}

/// Iterator over the vertices on the path from a vertex to its source.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, G: GraphBase> {
    curr: G::VertexId,
    pred: &'a FxHashMap<G::VertexId, G::VertexId>,
}

impl<'a, G: GraphBase> Iterator for PathReconstruction<'a, G> {
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}
