//! Check whether a graph is [bipartite] and find its two sides.
//!
//! Every component is colored independently by a breadth-first search that
//! gives each newly discovered neighbor the opposite side. An edge between
//! two vertices of the same side (including a self-loop) proves the graph is
//! not bipartite. Edge directions are ignored.
//!
//! [bipartite]: https://en.wikipedia.org/wiki/Bipartite_graph
//!
//! # Examples
//!
//! ```
//! use gradus::{
//!     algo::{is_bipartite, Bipartition, Side},
//!     core::{id::VertexId, marker::Undirected},
//!     storage::AdjList,
//! };
//!
//! let v = |index: usize| VertexId::from(index);
//! let mut graph = AdjList::<(), Undirected>::with_vertices(4);
//!
//! graph.add_edge(v(0), v(1), ());
//! graph.add_edge(v(1), v(2), ());
//! graph.add_edge(v(2), v(3), ());
//!
//! let bipartition = Bipartition::on(&graph).run().unwrap();
//! assert_eq!(bipartition.side(v(2)), Some(Side::Left));
//! assert_eq!(bipartition.right().collect::<Vec<_>>(), vec![v(1), v(3)]);
//!
//! graph.add_edge(v(3), v(1), ());
//! assert!(!is_bipartite(&graph));
//! ```

use std::{collections::VecDeque, fmt, marker::PhantomData};

use bitvec::prelude::*;
use log::debug;

use crate::{
    core::{
        id::{IdType, IntegerIdType},
        GraphBase, Neighbors, VertexSet,
    },
    visit::{TypedBitSet, VisitSet},
};

/// One of the two sides of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn from_bit(bit: bool) -> Self {
        if bit {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// A proper 2-coloring of a graph.
///
/// The first vertex (by ID) of every component is on the [left](Side::Left)
/// side.
pub struct Bipartition<G: GraphBase> {
    sides: BitVec,
    colored: TypedBitSet<G::VertexId>,
    ty: PhantomData<fn() -> G>,
}

impl<G> fmt::Debug for Bipartition<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bipartition")
            .field("sides", &self.sides)
            .finish()
    }
}

impl<G> Bipartition<G>
where
    G: GraphBase,
    G::VertexId: IntegerIdType,
{
    pub fn on(graph: &G) -> BipartitionBuilder<'_, G> {
        BipartitionBuilder { graph }
    }

    /// Returns the side of the vertex, `None` if the vertex is not in the
    /// graph.
    pub fn side(&self, vertex: G::VertexId) -> Option<Side> {
        if self.colored.is_visited(&vertex) {
            Some(Side::from_bit(self.sides[vertex.as_usize()]))
        } else {
            None
        }
    }

    pub fn left(&self) -> impl Iterator<Item = G::VertexId> + '_ {
        self.side_iter(Side::Left)
    }

    pub fn right(&self) -> impl Iterator<Item = G::VertexId> + '_ {
        self.side_iter(Side::Right)
    }

    fn side_iter(&self, side: Side) -> impl Iterator<Item = G::VertexId> + '_ {
        self.colored
            .ones()
            .filter(move |&index| Side::from_bit(self.sides[index]) == side)
            .map(G::VertexId::from)
    }
}

pub struct BipartitionBuilder<'a, G> {
    graph: &'a G,
}

impl<'a, G> BipartitionBuilder<'a, G>
where
    G: Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    /// Returns the bipartition, or `None` if the graph has an odd cycle.
    pub fn run(self) -> Option<Bipartition<G>> {
        let graph = self.graph;
        let bound = graph.vertex_bound();

        let mut sides = bitvec![0; bound];
        let mut colored = TypedBitSet::with_capacity(bound);
        let mut queue = VecDeque::new();

        for root in graph.vertices_by_id() {
            if !colored.visit(root) {
                continue;
            }

            queue.push_back(root);

            while let Some(v) = queue.pop_front() {
                let side = sides[v.as_usize()];

                for n in graph.neighbors_undirected(&v) {
                    if colored.visit(n.id) {
                        sides.set(n.id.as_usize(), !side);
                        queue.push_back(n.id);
                    } else if sides[n.id.as_usize()] == side {
                        debug!("edge {:?} joins {v:?} and {:?} on the same side", n.edge, n.id);
                        return None;
                    }
                }
            }
        }

        Some(Bipartition {
            sides,
            colored,
            ty: PhantomData,
        })
    }
}

/// Returns `true` if the vertices can be split into two sides such that no
/// edge connects two vertices of the same side.
pub fn is_bipartite<G>(graph: &G) -> bool
where
    G: Neighbors + VertexSet,
    G::VertexId: IntegerIdType,
{
    Bipartition::on(graph).run().is_some()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::{
            id::VertexId,
            marker::{Directed, Undirected},
            EdgeSet,
        },
        infra::{
            proptest::graph_undirected,
            testing::{create_complete, create_cycle, create_path, to_petgraph},
        },
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn assert_proper<G>(bipartition: &Bipartition<G>, graph: &G)
    where
        G: EdgeSet + VertexSet,
        G::VertexId: IntegerIdType,
    {
        for edge in graph.edges_by_id() {
            let (from, to) = graph.endpoints(&edge).unwrap();
            assert_ne!(bipartition.side(from), bipartition.side(to));
        }

        assert_eq!(
            bipartition.left().count() + bipartition.right().count(),
            graph.vertex_count()
        );
    }

    #[test]
    fn triangle() {
        let graph = create_complete::<Undirected>(3);

        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn path() {
        for n in 1..8 {
            let graph = create_path::<Undirected>(n);
            let bipartition = Bipartition::on(&graph).run().unwrap();

            assert_proper(&bipartition, &graph);
            assert_eq!(bipartition.left().count(), (n + 1) / 2);
        }
    }

    #[test]
    fn even_and_odd_cycles() {
        assert!(is_bipartite(&create_cycle::<Undirected>(6)));
        assert!(!is_bipartite(&create_cycle::<Undirected>(5)));
    }

    #[test]
    fn disconnected_components_colored_independently() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(5);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(3), v(4), ());

        let bipartition = Bipartition::on(&graph).run().unwrap();

        assert_eq!(bipartition.left().collect::<Vec<_>>(), vec![v(0), v(2), v(3)]);
        assert_eq!(bipartition.right().collect::<Vec<_>>(), vec![v(1), v(4)]);
        assert_proper(&bipartition, &graph);
    }

    #[test]
    fn odd_cycle_in_second_component() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(5);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(2), v(3), ());
        graph.add_edge(v(3), v(4), ());
        graph.add_edge(v(4), v(2), ());

        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn self_loop() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(2);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(1), ());

        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn directed_edges_ignored() {
        let mut graph = AdjList::<(), Directed>::with_vertices(3);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(2), v(1), ());

        assert!(is_bipartite(&graph));

        graph.add_edge(v(2), v(0), ());

        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn side_of_absent_vertex() {
        let graph = AdjMatrix::<(), Undirected>::with_vertices(2);
        let bipartition = Bipartition::on(&graph).run().unwrap();

        assert_eq!(bipartition.side(v(0)), Some(Side::Left));
        assert_eq!(bipartition.side(v(7)), None);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bipartite_matches_petgraph(graph in graph_undirected(any::<()>()).max_size(48)) {
            let pet = to_petgraph(&graph);
            let expected = (0..graph.vertex_count()).all(|start| {
                petgraph::algo::is_bipartite_undirected(&pet, petgraph::graph::NodeIndex::new(start))
            });

            match Bipartition::on(&graph).run() {
                Some(bipartition) => {
                    prop_assert!(expected);
                    assert_proper(&bipartition, &graph);
                }
                None => prop_assert!(!expected),
            }
        }
    }
}
