use crate::core::{
    id::IntegerIdType,
    marker::{Direction, Undirected},
    GraphBase, NeighborRef, Neighbors, VertexSet,
};

/// View of a graph that ignores the direction of its edges.
///
/// Used wherever weak connectivity of a directed graph is needed.
#[derive(Debug, Clone)]
pub struct Undirect<G> {
    graph: G,
}

impl<G> Undirect<G>
where
    G: GraphBase,
{
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<G> GraphBase for Undirect<G>
where
    G: GraphBase,
{
    type VertexId = G::VertexId;
    type EdgeId = G::EdgeId;
    type EdgeType = Undirected;

    fn vertex_count_hint(&self) -> Option<usize> {
        self.graph.vertex_count_hint()
    }
}

impl<G> Neighbors for Undirect<G>
where
    G: Neighbors,
{
    type NeighborsIter<'a> = Iter<G::NeighborsIter<'a>>
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &Self::VertexId) -> Self::NeighborsIter<'_> {
        Iter(self.graph.neighbors_undirected(src))
    }

    fn neighbors_directed(&self, src: &Self::VertexId, _dir: Direction) -> Self::NeighborsIter<'_> {
        Iter(self.graph.neighbors_undirected(src))
    }

    fn degree_undirected(&self, id: &Self::VertexId) -> usize {
        self.graph.degree_undirected(id)
    }

    fn degree_directed(&self, id: &Self::VertexId, _dir: Direction) -> usize {
        self.graph.degree_undirected(id)
    }
}

impl<G> VertexSet for Undirect<G>
where
    G: VertexSet,
{
    type VerticesByIdIter<'a> = G::VerticesByIdIter<'a>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        self.graph.vertices_by_id()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertex_bound(&self) -> usize
    where
        Self::VertexId: IntegerIdType,
    {
        self.graph.vertex_bound()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.graph.contains_vertex(id)
    }
}

pub struct Iter<I>(I);

impl<VI, EI, I> Iterator for Iter<I>
where
    I: Iterator<Item = NeighborRef<VI, EI>>,
{
    type Item = NeighborRef<VI, EI>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|neighbor| NeighborRef {
            dir: Direction::Outgoing,
            ..neighbor
        })
    }
}
