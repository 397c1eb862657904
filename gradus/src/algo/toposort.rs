//! Find a [topologically sorted] order of vertices of a [directed acyclic
//! graph] (DAG).
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! A graph with a cycle has no topological order. The sort then fails with
//! [`Error::Cycle`] carrying a witness instead of returning a partial order.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use gradus::{
//!     algo::TopoSort,
//!     core::{id::VertexId, marker::Directed},
//!     storage::AdjList,
//! };
//!
//! let v = |index: usize| VertexId::from(index);
//!
//! // Edge direction in "must be compiled before" relation.
//! let mut dependencies = AdjList::<(), Directed>::with_vertices(4);
//!
//! dependencies.add_edge(v(1), v(0), ());
//! dependencies.add_edge(v(2), v(1), ());
//! dependencies.add_edge(v(3), v(1), ());
//!
//! let order = TopoSort::on(&dependencies).run().unwrap();
//! assert_eq!(order.into_vec(), vec![v(3), v(2), v(1), v(0)]);
//! ```

use std::{fmt, slice};

use thiserror::Error;

use crate::core::{error::ErrorKind, GraphBase};

use super::Cycle;

mod builder;
mod dfs;
mod kahn;

pub use builder::TopoSortBuilder;

/// Topologically sorted vertices of a directed acyclic graph.
///
/// For every edge `u -> v`, `u` comes before `v`.
///
/// See [module](self) documentation for more details and example.
pub struct TopoSort<G: GraphBase> {
    order: Vec<G::VertexId>,
}

impl<G> fmt::Debug for TopoSort<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.order).finish()
    }
}

impl<G> TopoSort<G>
where
    G: GraphBase,
{
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, G::VertexId> {
        self.order.iter()
    }

    pub fn into_vec(self) -> Vec<G::VertexId> {
        self.order
    }
}

impl<'a, G> IntoIterator for &'a TopoSort<G>
where
    G: GraphBase,
{
    type Item = &'a G::VertexId;
    type IntoIter = slice::Iter<'a, G::VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Algorithm for [`TopoSort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Kahn's
    /// algorithm](https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm).
    ///
    /// Repeatedly removes vertices with no incoming edges. Vertices that are
    /// ready at the same time are reported in the order of their IDs.
    Kahn,

    /// A variation on the [depth-first
    /// search](https://en.wikipedia.org/wiki/Depth-first_search) traversal.
    ///
    /// Reports vertices in the reverse order of their
    /// [closing](crate::visit::DfsEvent::Close). A
    /// [back edge](crate::visit::DfsEvent::BackEdge) means a cycle.
    Dfs,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Algo);

    #[derive(Debug)]
    pub struct Dfs;

    #[derive(Debug)]
    pub struct Kahn;
}

/// The error encountered during a [`TopoSort`] run.
#[derive(Error)]
pub enum Error<G>
where
    G: GraphBase,
{
    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order.
    #[error("graph contains cycle")]
    Cycle(Cycle<G>),

    /// Kahn's algorithm ran out of vertices with no incoming edges, but no
    /// cycle could be found. The graph reports inconsistent degrees.
    #[error("{remaining} vertices left unsorted without a cycle")]
    Stuck { remaining: usize },
}

impl<G> Error<G>
where
    G: GraphBase,
{
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Cycle(_) => ErrorKind::NotFound,
            Error::Stuck { .. } => ErrorKind::Logic,
        }
    }
}

impl<G> fmt::Debug for Error<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle(cycle) => f.debug_tuple("Cycle").field(cycle).finish(),
            Self::Stuck { remaining } => f
                .debug_struct("Stuck")
                .field("remaining", remaining)
                .finish(),
        }
    }
}

impl<G> Clone for Error<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        match self {
            Self::Cycle(cycle) => Self::Cycle(cycle.clone()),
            Self::Stuck { remaining } => Self::Stuck {
                remaining: *remaining,
            },
        }
    }
}

impl<G> PartialEq for Error<G>
where
    G: GraphBase,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Cycle(lhs), Self::Cycle(rhs)) => lhs == rhs,
            (Self::Stuck { remaining: lhs }, Self::Stuck { remaining: rhs }) => lhs == rhs,
            _ => false,
        }
    }
}

impl<G> Eq for Error<G> where G: GraphBase {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use crate::{
        core::{
            id::VertexId, marker::Directed, EdgeSet, Neighbors, VertexSet,
        },
        infra::proptest::graph_directed,
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn assert_valid<G>(order: &[G::VertexId], graph: &G)
    where
        G: Neighbors + VertexSet + EdgeSet,
    {
        assert_eq!(order.len(), graph.vertex_count());

        let position = order
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect::<FxHashMap<_, _>>();

        for edge in graph.edges_by_id() {
            let (from, to) = graph.endpoints(&edge).unwrap();
            assert!(
                position[&from] < position[&to],
                "{from:?} -> {to:?} violates the order"
            );
        }
    }

    fn create_dag() -> AdjList<(), Directed> {
        let mut graph = AdjList::with_vertices(6);

        graph.add_edge(v(5), v(2), ());
        graph.add_edge(v(5), v(0), ());
        graph.add_edge(v(4), v(0), ());
        graph.add_edge(v(4), v(1), ());
        graph.add_edge(v(2), v(3), ());
        graph.add_edge(v(3), v(1), ());

        graph
    }

    #[test]
    fn dfs_basic() {
        let graph = create_dag();

        let order = TopoSort::on(&graph).dfs().run().unwrap().into_vec();

        assert_valid(&order, &graph);
        assert_eq!(order, vec![v(5), v(4), v(2), v(3), v(1), v(0)]);
    }

    #[test]
    fn kahn_basic() {
        let graph = create_dag();

        let order = TopoSort::on(&graph).kahn().run().unwrap().into_vec();

        assert_valid(&order, &graph);
        assert_eq!(order, vec![v(4), v(5), v(2), v(0), v(3), v(1)]);
    }

    #[test]
    fn default_is_dfs() {
        let graph = create_dag();

        let default = TopoSort::on(&graph).run().unwrap().into_vec();
        let dfs = TopoSort::on(&graph).with(Algo::Dfs).run().unwrap().into_vec();

        assert_eq!(default, dfs);

        let kahn = TopoSort::on(&graph).kahn().run().unwrap().into_vec();
        let chosen = TopoSort::on(&graph).with(Algo::Kahn).run().unwrap().into_vec();

        assert_eq!(kahn, chosen);
    }

    #[test]
    fn dfs_cycle() {
        let mut graph = create_dag();
        graph.add_edge(v(1), v(2), ());

        let error = TopoSort::on(&graph).dfs().run().unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_matches!(error, Error::Cycle(cycle) if cycle.vertices() == [v(1), v(2), v(3), v(1)]);
    }

    #[test]
    fn kahn_cycle() {
        let mut graph = create_dag();
        graph.add_edge(v(1), v(2), ());

        let error = TopoSort::on(&graph).kahn().run().unwrap_err();

        assert_matches!(error, Error::Cycle(cycle) if cycle.len() == 3);
    }

    #[test]
    fn self_loop_is_cycle() {
        let mut graph = AdjList::<(), Directed>::with_vertices(2);
        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(1), ());

        assert_matches!(TopoSort::on(&graph).dfs().run(), Err(Error::Cycle(_)));
        assert_matches!(TopoSort::on(&graph).kahn().run(), Err(Error::Cycle(_)));
    }

    #[test]
    fn isolated_vertices() {
        let graph = AdjList::<(), Directed>::with_vertices(3);

        let order = TopoSort::on(&graph).run().unwrap();

        assert_eq!(order.len(), 3);
        assert_eq!(order.iter().copied().collect::<Vec<_>>(), vec![v(2), v(1), v(0)]);
    }

    #[test]
    fn matrix_kahn() {
        let list = create_dag();
        let mut matrix = AdjMatrix::<(), Directed>::with_vertices(6);

        for edge in list.edges_by_id() {
            let (from, to) = list.endpoints(&edge).unwrap();
            matrix.add_edge(from, to, ());
        }

        // The matrix reports neighbors in the order of their IDs, so only the
        // validity of the order is comparable.
        let order = TopoSort::on(&matrix).kahn().run().unwrap().into_vec();
        assert_valid(&order, &matrix);
        assert_eq!(order, vec![v(4), v(5), v(0), v(2), v(3), v(1)]);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_dfs(graph in graph_directed(any::<()>()).max_size(64)) {
            let is_cyclic = crate::algo::is_cyclic(&graph);

            match TopoSort::on(&graph).dfs().run() {
                Ok(order) => {
                    prop_assert!(!is_cyclic);
                    assert_valid(&order.into_vec(), &graph);
                }
                Err(error) => {
                    prop_assert!(is_cyclic);
                    prop_assert_eq!(error.kind(), ErrorKind::NotFound);
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_kahn(graph in graph_directed(any::<()>()).max_size(64)) {
            let is_cyclic = crate::algo::is_cyclic(&graph);

            match TopoSort::on(&graph).kahn().run() {
                Ok(order) => {
                    prop_assert!(!is_cyclic);
                    assert_valid(&order.into_vec(), &graph);
                }
                Err(error) => {
                    prop_assert!(is_cyclic);
                    prop_assert_eq!(error.kind(), ErrorKind::NotFound);
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_acyclic_always_sorted(graph in graph_directed(any::<()>()).acyclic().max_size(64)) {
            let order = TopoSort::on(&graph).run().unwrap().into_vec();
            assert_valid(&order, &graph);
        }
    }
}
