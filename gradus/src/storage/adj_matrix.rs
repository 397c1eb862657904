use std::marker::PhantomData;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, IndexError},
    id::{EdgeId, IdType, VertexId},
    marker::{Direction, EdgeType},
    EdgeSet, GraphBase, GraphRef, NeighborRef, Neighbors, RangeIds, VertexSet,
};

use super::matrix;

/// Dense adjacency matrix with an optional attribute per cell.
///
/// An absent edge is an empty cell, never a zero weight. Undirected graphs
/// keep only the lower triangle. The edge ID is the index of its cell, so
/// multi-edges are rejected. Neighbors are reported in ascending order of
/// their IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix<E, Ty> {
    matrix: Vec<Option<E>>,
    vertex_count: usize,
    edge_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<E, Ty: EdgeType> AdjMatrix<E, Ty> {
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut matrix = Vec::new();
        matrix.resize_with(matrix::size_of::<Ty>(vertex_count), || None);

        Self {
            matrix,
            vertex_count,
            edge_count: 0,
            ty: PhantomData,
        }
    }

    /// Adds a vertex.
    ///
    /// The IDs of edges in directed graphs are recomputed for the new
    /// dimension.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::from_usize(self.vertex_count);
        matrix::resize::<_, Ty>(&mut self.matrix, self.vertex_count, self.vertex_count + 1);
        self.vertex_count += 1;
        id
    }

    pub fn try_add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        attr: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        if src.as_usize() >= self.vertex_count {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::SourceAbsent));
        }

        if dst.as_usize() >= self.vertex_count {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::DestinationAbsent));
        }

        let index = matrix::index::<Ty>(src.as_usize(), dst.as_usize(), self.vertex_count);
        let cell = &mut self.matrix[index];

        if cell.is_some() {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::MultiEdge));
        }

        *cell = Some(attr);
        self.edge_count += 1;

        Ok(EdgeId::from_usize(index))
    }

    /// Adds an edge from `src` to `dst`.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not a vertex of the graph or if the
    /// edge already exists.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, attr: E) -> EdgeId {
        match self.try_add_edge(src, dst, attr) {
            Ok(id) => id,
            Err(error) => panic!("{}", error.kind),
        }
    }

    /// Outgoing neighbors of `src` together with the attribute of the
    /// connecting edge, in ascending order.
    pub fn neighbors_of(&self, src: VertexId) -> Result<NeighborsOf<'_, E, Ty>, IndexError> {
        if src.as_usize() >= self.vertex_count {
            return Err(IndexError {
                index: src.as_usize(),
                bound: self.vertex_count,
            });
        }

        Ok(NeighborsOf {
            inner: self.neighbors_directed(&src, Direction::Outgoing),
        })
    }

    fn cell(&self, id: &EdgeId) -> Option<&E> {
        self.matrix.get(id.as_usize()).and_then(Option::as_ref)
    }
}

impl<E, Ty: EdgeType> Default for AdjMatrix<E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Ty: EdgeType> GraphBase for AdjMatrix<E, Ty> {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
    type EdgeType = Ty;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertex_count)
    }
}

impl<E, Ty: EdgeType> VertexSet for AdjMatrix<E, Ty> {
    type VerticesByIdIter<'a> = RangeIds<VertexId>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        (0..self.vertex_count).into()
    }

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn vertex_bound(&self) -> usize {
        self.vertex_count
    }

    fn contains_vertex(&self, id: &VertexId) -> bool {
        id.as_usize() < self.vertex_count
    }
}

impl<E, Ty: EdgeType> EdgeSet for AdjMatrix<E, Ty> {
    type EdgesByIdIter<'a> = EdgesByIdIter<'a, E>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        EdgesByIdIter {
            inner: self.matrix.iter().enumerate(),
        }
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn endpoints(&self, id: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.cell(id)?;
        let (row, col) = matrix::coords::<Ty>(id.as_usize(), self.vertex_count);
        Some((row.into(), col.into()))
    }
}

impl<E, Ty: EdgeType> GraphRef<E> for AdjMatrix<E, Ty> {
    fn edge(&self, id: &EdgeId) -> Option<&E> {
        self.cell(id)
    }
}

impl<E, Ty: EdgeType> Neighbors for AdjMatrix<E, Ty> {
    type NeighborsIter<'a> = NeighborsIter<'a, E, Ty>
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &VertexId) -> Self::NeighborsIter<'_> {
        NeighborsIter::new(self, *src, Ty::directions())
    }

    fn neighbors_directed(&self, src: &VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        let dirs: &'static [Direction] = match dir {
            _ if !Ty::is_directed() => &[Direction::Outgoing],
            Direction::Outgoing => &[Direction::Outgoing],
            Direction::Incoming => &[Direction::Incoming],
        };

        NeighborsIter::new(self, *src, dirs)
    }
}

pub struct NeighborsIter<'a, E, Ty> {
    matrix: &'a [Option<E>],
    src: VertexId,
    capacity: usize,
    dirs: &'static [Direction],
    current: usize,
    next: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<'a, E, Ty: EdgeType> NeighborsIter<'a, E, Ty> {
    fn new(graph: &'a AdjMatrix<E, Ty>, src: VertexId, dirs: &'static [Direction]) -> Self {
        // Out-of-range vertex has no neighbors.
        let dirs = if src.as_usize() < graph.vertex_count {
            dirs
        } else {
            &[]
        };

        Self {
            matrix: &graph.matrix,
            src,
            capacity: graph.vertex_count,
            dirs,
            current: 0,
            next: 0,
            ty: PhantomData,
        }
    }
}

impl<E, Ty: EdgeType> Iterator for NeighborsIter<'_, E, Ty> {
    type Item = NeighborRef<VertexId, EdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir = *self.dirs.get(self.current)?;

            if self.next >= self.capacity {
                self.current += 1;
                self.next = 0;
                continue;
            }

            let other = self.next;
            self.next += 1;

            let src = self.src.as_usize();
            let index = match dir {
                Direction::Outgoing => matrix::index::<Ty>(src, other, self.capacity),
                Direction::Incoming => matrix::index::<Ty>(other, src, self.capacity),
            };

            if self.matrix[index].is_some() {
                return Some(NeighborRef {
                    id: other.into(),
                    edge: index.into(),
                    src: self.src,
                    dir,
                });
            }
        }
    }
}

pub struct EdgesByIdIter<'a, E> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<E>>>,
}

impl<E> Iterator for EdgesByIdIter<'_, E> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|(index, cell)| cell.as_ref().map(|_| EdgeId::from_usize(index)))
    }
}

/// Iterator over `(neighbor, attribute)` pairs returned by
/// [`AdjMatrix::neighbors_of`].
pub struct NeighborsOf<'a, E, Ty> {
    inner: NeighborsIter<'a, E, Ty>,
}

impl<'a, E, Ty: EdgeType> Iterator for NeighborsOf<'a, E, Ty> {
    type Item = (VertexId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let matrix = self.inner.matrix;
        let neighbor = self.inner.next()?;
        let attr = matrix[neighbor.edge.as_usize()].as_ref()?;
        Some((neighbor.id, attr))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::marker::{Directed, Undirected};

    use super::*;

    fn v(index: usize) -> VertexId {
        index.into()
    }

    #[test]
    fn rejects_multi_edge() {
        let mut graph = AdjMatrix::<u8, Undirected>::with_vertices(3);

        graph.add_edge(v(0), v(1), 1);

        assert_matches!(
            graph.try_add_edge(v(1), v(0), 2),
            Err(AddEdgeError {
                attr: 2,
                kind: AddEdgeErrorKind::MultiEdge
            })
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighbors_ascending() {
        let mut graph = AdjMatrix::<u8, Directed>::with_vertices(4);

        graph.add_edge(v(1), v(3), 30);
        graph.add_edge(v(1), v(0), 10);
        graph.add_edge(v(2), v(1), 20);

        let out = graph.neighbors_of(v(1)).unwrap().collect::<Vec<_>>();
        assert_eq!(out, vec![(v(0), &10), (v(3), &30)]);

        let incoming = graph
            .neighbors_directed(&v(1), Direction::Incoming)
            .map(|n| n.id)
            .collect::<Vec<_>>();
        assert_eq!(incoming, vec![v(2)]);
    }

    #[test]
    fn endpoints_and_edges() {
        let mut graph = AdjMatrix::<(), Directed>::with_vertices(3);

        let e = graph.add_edge(v(2), v(0), ());

        assert_eq!(graph.endpoints(&e), Some((v(2), v(0))));
        assert_eq!(graph.edges_by_id().collect::<Vec<_>>(), vec![e]);
        assert_eq!(graph.edge(&e), Some(&()));
    }

    #[test]
    fn undirected_symmetric() {
        let mut graph = AdjMatrix::<(), Undirected>::with_vertices(3);

        graph.add_edge(v(0), v(2), ());
        graph.add_edge(v(1), v(1), ());

        assert_eq!(
            graph.neighbors_undirected(&v(2)).map(|n| n.id).collect::<Vec<_>>(),
            vec![v(0)]
        );
        assert_eq!(graph.degree_undirected(&v(1)), 2);
    }

    #[test]
    fn add_vertex_keeps_edges() {
        let mut graph = AdjMatrix::<(), Directed>::with_vertices(2);

        graph.add_edge(v(0), v(1), ());
        let w = graph.add_vertex();
        graph.add_edge(w, v(0), ());

        assert_eq!(graph.neighbors_of(v(0)).unwrap().map(|(u, _)| u).collect::<Vec<_>>(), vec![v(1)]);
        assert_eq!(graph.neighbors_of(w).unwrap().map(|(u, _)| u).collect::<Vec<_>>(), vec![v(0)]);
    }

    #[test]
    fn out_of_range() {
        let graph = AdjMatrix::<(), Undirected>::with_vertices(2);

        assert_matches!(
            graph.neighbors_of(v(2)).err(),
            Some(IndexError { index: 2, bound: 2 })
        );
        assert_eq!(graph.neighbors_undirected(&v(7)).count(), 0);
    }
}
