//! Graph traversals.
//!
//! All traversals in this module are **iterative**: they keep their own
//! explicit stack or queue, so the depth of a graph is never limited by the
//! size of the program stack. A visitor holds no reference to the graph and
//! is advanced step by step with [`Visitor::visit_next`], or turned into an
//! iterator.
//!
//! Neighbors are examined in the order the graph reports them, which makes
//! every traversal deterministic for a given graph.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    bfs::Bfs,
    dfs::{Dfs, DfsEvents, DfsPostOrder},
    visit_set::{TypedBitSet, VisitSet},
};

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use raw::*;

use crate::core::{id::IdType, GraphBase, Neighbors, VertexSet};

/// Trait for a specific graph traversal approach.
pub trait Visitor<G> {
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph, so it can be passed around without
    /// lifetime problems.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// A collection of starting vertices for a graph traversal.
///
/// This trait is implemented for any [`Iterator`].
pub trait VisitRoots<I: IdType> {
    /// Returns next ID to start the traversal from.
    ///
    /// The returned ID might have already been visited. It is the
    /// responsibility of the visitor to ignore such roots.
    fn next_root(&mut self) -> Option<I>;

    /// Returns `true` if all remaining roots are known to be visited already.
    fn is_done(&mut self, _visited: &impl VisitSet<I>) -> bool {
        false
    }
}

impl<I: IdType, T> VisitRoots<I> for T
where
    T: Iterator<Item = I>,
{
    fn next_root(&mut self) -> Option<I> {
        self.next()
    }
}

/// A [`VisitRoots`] collection for visiting all vertices in a graph in the
/// order of their IDs.
pub struct VisitAll<'a, G>
where
    G: VertexSet,
{
    graph: &'a G,
    ids: G::VerticesByIdIter<'a>,
}

impl<'a, G> VisitAll<'a, G>
where
    G: VertexSet,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            ids: graph.vertices_by_id(),
        }
    }
}

impl<G> VisitRoots<G::VertexId> for VisitAll<'_, G>
where
    G: VertexSet,
{
    fn next_root(&mut self) -> Option<G::VertexId> {
        self.ids.next()
    }

    fn is_done(&mut self, visited: &impl VisitSet<G::VertexId>) -> bool {
        visited.visited_count() == self.graph.vertex_count()
    }
}

/// Strictly monotonically increasing numbering of traversal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub usize);

impl Time {
    pub const MAX: Time = Time(usize::MAX);
}

/// Depth-first search visitor event.
///
/// Use [`DfsEvents`] visitor to traverse a graph by reporting DFS events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DfsEvent<G>
where
    G: GraphBase,
{
    /// A new vertex was discovered.
    Open { vertex: G::VertexId, time: Time },

    /// An edge of the tree formed by the traversal.
    TreeEdge {
        from: G::VertexId,
        to: G::VertexId,
        edge: G::EdgeId,
    },

    /// An edge to a vertex that is discovered but not yet
    /// [closed](DfsEvent::Close), that is, to an ancestor on the current
    /// path.
    ///
    /// Presence of a back edge indicates a cycle in the graph. In undirected
    /// graphs, the tree edge to the parent is never reported as a back edge,
    /// but a parallel edge to the parent is.
    BackEdge {
        from: G::VertexId,
        to: G::VertexId,
        edge: G::EdgeId,
    },

    /// An edge to an already closed vertex. Only reported in directed graphs.
    CrossForwardEdge {
        from: G::VertexId,
        to: G::VertexId,
        edge: G::EdgeId,
    },

    /// All edges from the vertex have been examined.
    Close { vertex: G::VertexId, time: Time },
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{
            id::{EdgeId, VertexId},
            marker::{Directed, Undirected},
        },
        storage::AdjList,
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    fn e(index: usize) -> EdgeId {
        index.into()
    }

    fn sample_undirected() -> AdjList<(), Undirected> {
        let mut graph = AdjList::with_vertices(6);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(2), ());
        graph.add_edge(v(1), v(3), ());
        graph.add_edge(v(1), v(4), ());
        graph.add_edge(v(2), v(5), ());
        graph.add_edge(v(5), v(4), ());

        graph
    }

    #[test]
    fn bfs_connected() {
        let graph = sample_undirected();

        let vertices = Bfs::new(&graph).start(v(0)).iter(&graph).collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(0), v(1), v(2), v(3), v(4), v(5)]);
    }

    #[test]
    fn dfs_connected() {
        let graph = sample_undirected();

        let vertices = Dfs::new(&graph).start(v(0)).iter(&graph).collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(0), v(1), v(2), v(5), v(4), v(3)]);
    }

    #[test]
    fn dfs_post_order() {
        let graph = sample_undirected();

        let vertices = DfsPostOrder::new(&graph)
            .start(v(0))
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(4), v(5), v(2), v(3), v(1), v(0)]);
    }

    #[test]
    fn bfs_disconnected_all() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(5);

        graph.add_edge(v(0), v(3), ());
        graph.add_edge(v(1), v(2), ());

        let vertices = Bfs::new(&graph)
            .start_all(&graph)
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(0), v(3), v(1), v(2), v(4)]);
    }

    #[test]
    fn dfs_multi_skips_visited_roots() {
        let mut graph = AdjList::<(), Directed>::with_vertices(4);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(2), v(3), ());

        let vertices = Dfs::new(&graph)
            .start_multi([v(1), v(0), v(1), v(3), v(2)].into_iter())
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(vertices, vec![v(1), v(0), v(3), v(2)]);
    }

    #[test]
    fn dfs_events_directed() {
        let mut graph = AdjList::<(), Directed>::with_vertices(4);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(2), ());
        graph.add_edge(v(2), v(0), ());
        graph.add_edge(v(0), v(3), ());
        graph.add_edge(v(3), v(2), ());

        let events = DfsEvents::new(&graph)
            .start(v(0))
            .iter(&graph)
            .collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                DfsEvent::Open {
                    vertex: v(0),
                    time: Time(0)
                },
                DfsEvent::TreeEdge {
                    from: v(0),
                    to: v(1),
                    edge: e(0)
                },
                DfsEvent::Open {
                    vertex: v(1),
                    time: Time(1)
                },
                DfsEvent::TreeEdge {
                    from: v(1),
                    to: v(2),
                    edge: e(1)
                },
                DfsEvent::Open {
                    vertex: v(2),
                    time: Time(2)
                },
                DfsEvent::BackEdge {
                    from: v(2),
                    to: v(0),
                    edge: e(2)
                },
                DfsEvent::Close {
                    vertex: v(2),
                    time: Time(3)
                },
                DfsEvent::Close {
                    vertex: v(1),
                    time: Time(4)
                },
                DfsEvent::TreeEdge {
                    from: v(0),
                    to: v(3),
                    edge: e(3)
                },
                DfsEvent::Open {
                    vertex: v(3),
                    time: Time(5)
                },
                DfsEvent::CrossForwardEdge {
                    from: v(3),
                    to: v(2),
                    edge: e(4)
                },
                DfsEvent::Close {
                    vertex: v(3),
                    time: Time(6)
                },
                DfsEvent::Close {
                    vertex: v(0),
                    time: Time(7)
                },
            ]
        );
    }

    #[test]
    fn dfs_events_undirected_parallel_edge() {
        let mut graph = AdjList::<(), Undirected>::with_vertices(2);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(1), v(0), ());

        let back_edges = DfsEvents::new(&graph)
            .start(v(0))
            .iter(&graph)
            .filter(|event| matches!(event, DfsEvent::BackEdge { .. }))
            .collect::<Vec<_>>();

        assert_eq!(
            back_edges,
            vec![DfsEvent::BackEdge {
                from: v(1),
                to: v(0),
                edge: e(1)
            }]
        );
    }

    #[test]
    fn dfs_events_undirected_tree_has_no_back_edges() {
        let graph = {
            let mut graph = AdjList::<(), Undirected>::with_vertices(4);
            graph.add_edge(v(0), v(1), ());
            graph.add_edge(v(1), v(2), ());
            graph.add_edge(v(1), v(3), ());
            graph
        };

        let has_back_edge = DfsEvents::new(&graph)
            .start_all(&graph)
            .iter(&graph)
            .any(|event| matches!(event, DfsEvent::BackEdge { .. }));

        assert!(!has_back_edge);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 200_000;
        let mut graph = AdjList::<(), Directed>::with_vertices(n);

        for i in 1..n {
            graph.add_edge(v(i - 1), v(i), ());
        }

        let count = DfsPostOrder::new(&graph).start(v(0)).iter(&graph).count();

        assert_eq!(count, n);
    }
}
