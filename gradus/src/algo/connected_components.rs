//! Find (strongly) [connected] components in a graph.
//!
//! See available parameters [here](ConnectedComponentsBuilder#implementations)
//! or [here](StronglyConnectedComponentsBuilder#implementations).
//!
//! Both kinds of components are reported deterministically. Connected
//! components are ordered by their smallest vertex and list their members in
//! the order of a depth-first search started from it. Strongly connected
//! components are ordered as Kosaraju's second pass discovers them, which is
//! a topological order of the condensation.
//!
//! # Examples
//!
//! ```
//! use gradus::{
//!     algo::{is_connected, is_strongly_connected},
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
//! // Weak connectivity is checked on directed graphs.
//! assert!(is_connected(&graph));
//! assert!(!is_strongly_connected(&graph));
//!
//! graph.add_edge(v(3), v(0), ());
//! assert!(is_strongly_connected(&graph));
//! ```
//!
//! [connected]: https://en.wikipedia.org/wiki/Connectivity_(graph_theory)

use std::slice;

use rustc_hash::FxHashMap;

use crate::core::{marker::Directed, GraphBase, Neighbors, VertexSet};

mod builder;
mod dfs;
mod kosaraju;

pub use builder::{ConnectedComponentsBuilder, StronglyConnectedComponentsBuilder};

/// Connected components of a graph. Edge directions are ignored.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ConnectedComponents<G: GraphBase> {
    components: Vec<Vec<G::VertexId>>,
    index: FxHashMap<G::VertexId, usize>,
}

/// Strongly connected components of a directed graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct StronglyConnectedComponents<G: GraphBase> {
    inner: ConnectedComponents<G>,
}

impl<G> ConnectedComponents<G>
where
    G: GraphBase,
{
    fn new(components: Vec<Vec<G::VertexId>>) -> Self {
        let index = components
            .iter()
            .enumerate()
            .flat_map(|(i, component)| component.iter().map(move |v| (v.clone(), i)))
            .collect();

        Self { components, index }
    }

    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, G> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Index of the component containing the vertex, in the order of
    /// [`iter`](Self::iter).
    pub fn component_of(&self, vertex: &G::VertexId) -> Option<usize> {
        self.index.get(vertex).copied()
    }
}

impl<G> StronglyConnectedComponents<G>
where
    G: GraphBase,
{
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, G> {
        self.inner.iter()
    }

    /// Index of the component containing the vertex, in the order of
    /// [`iter`](Self::iter).
    pub fn component_of(&self, vertex: &G::VertexId) -> Option<usize> {
        self.inner.component_of(vertex)
    }
}

pub struct Iter<'a, G: GraphBase> {
    inner: slice::Iter<'a, Vec<G::VertexId>>,
}

impl<'a, G> Iterator for Iter<'a, G>
where
    G: GraphBase,
{
    type Item = &'a [G::VertexId];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}

/// Algorithm for [`ConnectedComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgoWeak {
    /// Standard DFS algorithm for traversing the graph.
    ///
    /// # Use cases
    ///
    /// * Finding groups where elements relate to each other.
    Dfs,
}

/// Algorithm for [`StronglyConnectedComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AlgoStrong {
    /// [Kosaraju's
    /// algorithm](https://en.wikipedia.org/wiki/Kosaraju%27s_algorithm).
    ///
    /// Kosaraju's algorithm has two passes, one DFS pass on the graph
    /// collecting the sequence of closed vertices and one DFS pass on the
    /// transposed graph traversing the graph in the reversed order of
    /// vertices collected in the first pass.
    ///
    /// # Use cases
    ///
    /// * Finding groups where elements transitively depend on each other.
    Kosaraju,
}

mod algo {
    use super::{AlgoStrong, AlgoWeak};

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgoWeak(pub Option<AlgoWeak>);

    #[derive(Debug)]
    pub struct SpecificAlgoStrong(pub Option<AlgoStrong>);

    #[derive(Debug)]
    pub struct Dfs;

    #[derive(Debug)]
    pub struct Kosaraju;
}

/// Returns `true` if every vertex is reachable from every other when edge
/// directions are ignored. A graph without vertices is connected.
pub fn is_connected<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
{
    ConnectedComponents::on(graph).run().len() <= 1
}

/// Returns `true` if every vertex is reachable from every other along the
/// edge directions.
pub fn is_strongly_connected<G>(graph: &G) -> bool
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    StronglyConnectedComponents::on(graph).run().len() <= 1
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::{
        core::{
            id::VertexId,
            marker::{Directed, Undirected},
        },
        infra::{
            proptest::{graph_directed, graph_undirected},
            testing::{create_cycle, create_path, to_petgraph},
        },
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn as_vecs<G: GraphBase>(iter: Iter<'_, G>) -> Vec<Vec<G::VertexId>> {
        iter.map(|component| component.to_vec()).collect()
    }

    fn assert_partition<G>(components: Iter<'_, G>, graph: &G)
    where
        G: VertexSet,
    {
        let mut seen = BTreeSet::new();

        for component in components {
            assert!(!component.is_empty(), "component is empty");

            for vertex in component {
                assert!(seen.insert(vertex.clone()), "{vertex:?} in two components");
            }
        }

        assert_eq!(seen, graph.vertices_by_id().collect::<BTreeSet<_>>());
    }

    #[test]
    fn components_in_dfs_order() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(7);

        graph.add_edge(v(0), v(4), ());
        graph.add_edge(v(4), v(2), ());
        graph.add_edge(v(0), v(2), ());
        graph.add_edge(v(1), v(5), ());
        graph.add_edge(v(6), v(5), ());

        let components = ConnectedComponents::on(&graph).run();

        assert_eq!(
            as_vecs(components.iter()),
            vec![vec![v(0), v(4), v(2)], vec![v(1), v(5), v(6)], vec![v(3)]]
        );
        assert_eq!(components.component_of(&v(6)), Some(1));
        assert_eq!(components.component_of(&v(3)), Some(2));
        assert_eq!(components.component_of(&v(9)), None);
    }

    #[test]
    fn weak_components_of_directed() {
        let mut graph = AdjList::<(), Directed>::with_vertices(4);

        graph.add_edge(v(1), v(0), ());
        graph.add_edge(v(3), v(2), ());

        let components = ConnectedComponents::on(&graph).dfs().run();

        assert_eq!(
            as_vecs(components.iter()),
            vec![vec![v(0), v(1)], vec![v(2), v(3)]]
        );
    }

    #[test]
    fn connected() {
        assert!(is_connected(&create_path::<Undirected>(5)));
        assert!(is_connected(&AdjList::<(), Undirected>::new()));
        assert!(!is_connected(&AdjMatrix::<(), Undirected>::with_vertices(2)));
    }

    #[test]
    fn kosaraju_basic() {
        let mut graph = AdjList::<(), Directed>::with_vertices(8);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(2), ());
        graph.add_edge(v(2), v(0), ());
        graph.add_edge(v(2), v(3), ());
        graph.add_edge(v(3), v(4), ());
        graph.add_edge(v(4), v(5), ());
        graph.add_edge(v(5), v(3), ());
        graph.add_edge(v(6), v(5), ());
        graph.add_edge(v(6), v(7), ());
        graph.add_edge(v(7), v(6), ());

        let components = StronglyConnectedComponents::on(&graph).run();

        assert_eq!(
            as_vecs(components.iter()),
            vec![
                vec![v(6), v(7)],
                vec![v(0), v(2), v(1)],
                vec![v(3), v(5), v(4)]
            ]
        );
        assert_eq!(components.component_of(&v(4)), Some(2));
        assert_partition(components.iter(), &graph);
    }

    #[test]
    fn strongly_connected() {
        assert!(is_strongly_connected(&create_cycle::<Directed>(4)));
        assert!(!is_strongly_connected(&create_path::<Directed>(4)));
    }

    #[test]
    fn dag_has_singleton_components_in_topological_order() {
        let graph = create_path::<Directed>(4);

        let components = StronglyConnectedComponents::on(&graph).kosaraju().run();

        assert_eq!(
            as_vecs(components.iter()),
            vec![vec![v(0)], vec![v(1)], vec![v(2)], vec![v(3)]]
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_connected_components(graph in graph_undirected(any::<()>()).max_size(64)) {
            let components = ConnectedComponents::on(&graph).run();

            assert_partition(components.iter(), &graph);
            prop_assert_eq!(
                components.len(),
                petgraph::algo::connected_components(&to_petgraph(&graph))
            );
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_strongly_connected_components(graph in graph_directed(any::<()>()).max_size(64)) {
            let components = StronglyConnectedComponents::on(&graph).run();

            assert_partition(components.iter(), &graph);
            prop_assert_eq!(
                components.len(),
                petgraph::algo::kosaraju_scc(&to_petgraph(&graph)).len()
            );
        }
    }
}
