use crate::core::{
    id::IntegerIdType,
    marker::{Directed, Direction},
    EdgeSet, GraphBase, GraphRef, NeighborRef, Neighbors, VertexSet,
};

/// View of a directed graph with all edges reversed.
///
/// Nothing is copied: outgoing neighbors of the view are the incoming
/// neighbors of the underlying graph.
#[derive(Debug, Clone)]
pub struct Transpose<G> {
    graph: G,
}

impl<G> Transpose<G>
where
    G: GraphBase<EdgeType = Directed>,
{
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<G> GraphBase for Transpose<G>
where
    G: GraphBase,
{
    type VertexId = G::VertexId;
    type EdgeId = G::EdgeId;
    type EdgeType = G::EdgeType;

    fn vertex_count_hint(&self) -> Option<usize> {
        self.graph.vertex_count_hint()
    }
}

impl<G> Neighbors for Transpose<G>
where
    G: Neighbors,
{
    type NeighborsIter<'a> = Iter<G::NeighborsIter<'a>>
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &Self::VertexId) -> Self::NeighborsIter<'_> {
        Iter(self.graph.neighbors_undirected(src))
    }

    fn neighbors_directed(&self, src: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        Iter(self.graph.neighbors_directed(src, dir.opposite()))
    }

    fn degree_undirected(&self, id: &Self::VertexId) -> usize {
        self.graph.degree_undirected(id)
    }

    fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
        self.graph.degree_directed(id, dir.opposite())
    }
}

impl<G> VertexSet for Transpose<G>
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

impl<G> EdgeSet for Transpose<G>
where
    G: EdgeSet,
{
    type EdgesByIdIter<'a> = G::EdgesByIdIter<'a>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        self.graph.edges_by_id()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
        self.graph.endpoints(id).map(|(from, to)| (to, from))
    }
}

impl<E, G> GraphRef<E> for Transpose<G>
where
    G: GraphRef<E>,
{
    fn edge(&self, id: &Self::EdgeId) -> Option<&E> {
        self.graph.edge(id)
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
            dir: neighbor.dir.opposite(),
            ..neighbor
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::id::{EdgeId, VertexId},
        storage::AdjList,
    };

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn reversed_neighbors() {
        let mut graph = AdjList::<(), Directed>::with_vertices(3);

        graph.add_edge(v(0), v(1), ());
        graph.add_edge(v(2), v(1), ());

        let transpose = Transpose::new(&graph);

        let out = transpose
            .neighbors_directed(&v(1), Direction::Outgoing)
            .map(|n| (n.id, n.dir))
            .collect::<Vec<_>>();

        assert_eq!(
            out,
            vec![(v(0), Direction::Outgoing), (v(2), Direction::Outgoing)]
        );
        assert_eq!(transpose.degree_directed(&v(0), Direction::Incoming), 1);
        assert_eq!(
            transpose.endpoints(&EdgeId::from(0usize)),
            Some((v(1), v(0)))
        );
    }
}
