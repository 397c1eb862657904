use super::{
    base::{GraphBase, NeighborRef},
    marker::{Direction, EdgeType},
};

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = NeighborRef<Self::VertexId, Self::EdgeId>>
    where
        Self: 'a;

    /// All neighbors regardless of the edge direction.
    ///
    /// The order is stable: for storages of this crate it is the order in
    /// which the edges were inserted (outgoing before incoming).
    fn neighbors_undirected(&self, src: &Self::VertexId) -> Self::NeighborsIter<'_>;

    /// Neighbors over the edges of given direction. In undirected graphs, the
    /// direction is ignored.
    fn neighbors_directed(&self, src: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_>;

    fn degree_undirected(&self, id: &Self::VertexId) -> usize {
        if Self::EdgeType::is_directed() {
            self.degree_directed(id, Direction::Outgoing)
                + self.degree_directed(id, Direction::Incoming)
        } else {
            self.degree_directed(id, Direction::Outgoing)
        }
    }

    fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
        if Self::EdgeType::is_directed() {
            self.neighbors_directed(id, dir).count()
        } else {
            // Storages are required to yield an undirected self-loop just once,
            // but it contributes two to the degree.
            self.neighbors_directed(id, dir)
                .map(|neighbor| if &neighbor.id == id { 2 } else { 1 })
                .sum()
        }
    }
}

macro_rules! deref_neighbors {
    ($($ref_kind:tt)*) => {
        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors,
        {
            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors_undirected(&self, src: &Self::VertexId) -> Self::NeighborsIter<'_> {
                (**self).neighbors_undirected(src)
            }

            fn neighbors_directed(&self, src: &Self::VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
                (**self).neighbors_directed(src, dir)
            }

            fn degree_undirected(&self, id: &Self::VertexId) -> usize {
                (**self).degree_undirected(id)
            }

            fn degree_directed(&self, id: &Self::VertexId, dir: Direction) -> usize {
                (**self).degree_directed(id, dir)
            }
        }
    }
}

deref_neighbors!(&);
deref_neighbors!(&mut);
