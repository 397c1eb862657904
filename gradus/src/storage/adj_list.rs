use std::{marker::PhantomData, slice};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, IndexError},
    id::{EdgeId, IdType, VertexId},
    marker::{Direction, EdgeType},
    EdgeSet, GraphBase, GraphRef, NeighborRef, Neighbors, RangeIds, VertexSet,
};

/// Adjacency list over dense vertex IDs `0..n`.
///
/// Each edge is stored once together with its endpoints. A vertex keeps the
/// IDs of its outgoing edges and, in directed graphs, of its incoming edges, so
/// that the transposed graph is available without rebuilding anything.
/// Neighbors are reported in the order the edges were inserted.
///
/// Multi-edges and self-loops are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<E, Ty> {
    vertices: Vec<[Vec<EdgeId>; 2]>,
    edges: Vec<E>,
    endpoints: Vec<[VertexId; 2]>,
    ty: PhantomData<fn() -> Ty>,
}

impl<E, Ty: EdgeType> AdjList<E, Ty> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            endpoints: Vec::new(),
            ty: PhantomData,
        }
    }

    /// Creates a graph with `vertex_count` isolated vertices `0..vertex_count`.
    pub fn with_vertices(vertex_count: usize) -> Self {
        let mut graph = Self::new();
        graph.vertices.resize_with(vertex_count, Default::default);
        graph
    }

    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(Default::default());
        id
    }

    /// Adds an edge from `src` to `dst`.
    ///
    /// Fails if any of the endpoints is not a vertex of the graph. The
    /// attribute is handed back in the error.
    pub fn try_add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        attr: E,
    ) -> Result<EdgeId, AddEdgeError<E>> {
        if src.as_usize() >= self.vertices.len() {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::SourceAbsent));
        }

        if dst.as_usize() >= self.vertices.len() {
            return Err(AddEdgeError::new(attr, AddEdgeErrorKind::DestinationAbsent));
        }

        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push(attr);
        self.endpoints.push([src, dst]);

        if Ty::is_directed() {
            self.vertices[src.as_usize()][Direction::Outgoing.index()].push(id);
            self.vertices[dst.as_usize()][Direction::Incoming.index()].push(id);
        } else {
            self.vertices[src.as_usize()][Direction::Outgoing.index()].push(id);

            // A self-loop is reported just once.
            if src != dst {
                self.vertices[dst.as_usize()][Direction::Outgoing.index()].push(id);
            }
        }

        Ok(id)
    }

    /// Adds an edge from `src` to `dst`.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints is not a vertex of the graph. Use
    /// [`try_add_edge`](AdjList::try_add_edge) for a fallible version.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, attr: E) -> EdgeId {
        match self.try_add_edge(src, dst, attr) {
            Ok(id) => id,
            Err(error) => panic!("{}", error.kind),
        }
    }

    /// Outgoing neighbors of `src` together with the attribute of the
    /// connecting edge, in insertion order.
    pub fn neighbors_of(&self, src: VertexId) -> Result<NeighborsOf<'_, E>, IndexError> {
        if src.as_usize() >= self.vertices.len() {
            return Err(IndexError {
                index: src.as_usize(),
                bound: self.vertices.len(),
            });
        }

        Ok(NeighborsOf {
            inner: self.neighbors_directed(&src, Direction::Outgoing),
            edges: &self.edges,
        })
    }
}

impl<E, Ty: EdgeType> Default for AdjList<E, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Ty: EdgeType> GraphBase for AdjList<E, Ty> {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
    type EdgeType = Ty;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<E, Ty: EdgeType> VertexSet for AdjList<E, Ty> {
    type VerticesByIdIter<'a> = RangeIds<VertexId>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        (0..self.vertices.len()).into()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_bound(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &VertexId) -> bool {
        id.as_usize() < self.vertices.len()
    }
}

impl<E, Ty: EdgeType> EdgeSet for AdjList<E, Ty> {
    type EdgesByIdIter<'a> = RangeIds<EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        (0..self.edges.len()).into()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn endpoints(&self, id: &EdgeId) -> Option<(VertexId, VertexId)> {
        self.endpoints
            .get(id.as_usize())
            .map(|&[src, dst]| (src, dst))
    }
}

impl<E, Ty: EdgeType> GraphRef<E> for AdjList<E, Ty> {
    fn edge(&self, id: &EdgeId) -> Option<&E> {
        self.edges.get(id.as_usize())
    }
}

impl<E, Ty: EdgeType> Neighbors for AdjList<E, Ty> {
    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &VertexId) -> Self::NeighborsIter<'_> {
        if Ty::is_directed() {
            NeighborsIter {
                src: *src,
                endpoints: &self.endpoints,
                lists: [
                    (self.edge_list(src, Direction::Outgoing), Direction::Outgoing),
                    (self.edge_list(src, Direction::Incoming), Direction::Incoming),
                ],
                current: 0,
            }
        } else {
            self.neighbors_directed(src, Direction::Outgoing)
        }
    }

    fn neighbors_directed(&self, src: &VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        let dir = if Ty::is_directed() {
            dir
        } else {
            Direction::Outgoing
        };

        NeighborsIter {
            src: *src,
            endpoints: &self.endpoints,
            lists: [
                (self.edge_list(src, dir), dir),
                ([].iter(), dir),
            ],
            current: 0,
        }
    }

    fn degree_directed(&self, id: &VertexId, dir: Direction) -> usize {
        if Ty::is_directed() {
            self.edge_list(id, dir).len()
        } else {
            self.neighbors_directed(id, dir)
                .map(|neighbor| if &neighbor.id == id { 2 } else { 1 })
                .sum()
        }
    }
}

impl<E, Ty: EdgeType> AdjList<E, Ty> {
    fn edge_list(&self, src: &VertexId, dir: Direction) -> slice::Iter<'_, EdgeId> {
        self.vertices
            .get(src.as_usize())
            .map(|lists| lists[dir.index()].iter())
            .unwrap_or_default()
    }
}

pub struct NeighborsIter<'a> {
    src: VertexId,
    endpoints: &'a [[VertexId; 2]],
    lists: [(slice::Iter<'a, EdgeId>, Direction); 2],
    current: usize,
}

impl Iterator for NeighborsIter<'_> {
    type Item = NeighborRef<VertexId, EdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current < self.lists.len() {
            let (list, dir) = &mut self.lists[self.current];

            match list.next() {
                Some(&edge) => {
                    let [from, to] = self.endpoints[edge.as_usize()];
                    let id = if from == self.src { to } else { from };

                    return Some(NeighborRef {
                        id,
                        edge,
                        src: self.src,
                        dir: *dir,
                    });
                }
                None => self.current += 1,
            }
        }

        None
    }
}

/// Iterator over `(neighbor, attribute)` pairs returned by
/// [`AdjList::neighbors_of`].
pub struct NeighborsOf<'a, E> {
    inner: NeighborsIter<'a>,
    edges: &'a [E],
}

impl<'a, E> Iterator for NeighborsOf<'a, E> {
    type Item = (VertexId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        let neighbor = self.inner.next()?;
        Some((neighbor.id, &edges[neighbor.edge.as_usize()]))
    }
}
