use std::slice;

use crate::core::{
    error::IndexError,
    id::{EdgeId, IdType, VertexId},
    marker::{Directed, Direction},
    EdgeSet, GraphBase, NeighborRef, Neighbors, RangeIds, VertexSet,
};

/// Graph of a function `0..n -> 0..n`: every vertex has exactly one outgoing
/// edge, the edge from `v` has ID `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Functional {
    successors: Vec<VertexId>,
    predecessors: Vec<Vec<VertexId>>,
}

impl Functional {
    /// Builds the graph from the successor of each vertex.
    ///
    /// Fails if a successor is not in `0..successors.len()`.
    pub fn from_successors<I>(successors: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = usize>,
    {
        let successors = successors.into_iter().collect::<Vec<_>>();
        let bound = successors.len();
        let mut predecessors = vec![Vec::new(); bound];

        for (v, &next) in successors.iter().enumerate() {
            if next >= bound {
                return Err(IndexError { index: next, bound });
            }

            predecessors[next].push(VertexId::from_usize(v));
        }

        Ok(Self {
            successors: successors.into_iter().map(VertexId::from_usize).collect(),
            predecessors,
        })
    }

    pub fn successor(&self, v: VertexId) -> Option<VertexId> {
        self.successors.get(v.as_usize()).copied()
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }
}

impl GraphBase for Functional {
    type VertexId = VertexId;
    type EdgeId = EdgeId;
    type EdgeType = Directed;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.successors.len())
    }
}

impl VertexSet for Functional {
    type VerticesByIdIter<'a> = RangeIds<VertexId>
    where
        Self: 'a;

    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
        (0..self.successors.len()).into()
    }

    fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    fn vertex_bound(&self) -> usize {
        self.successors.len()
    }

    fn contains_vertex(&self, id: &VertexId) -> bool {
        id.as_usize() < self.successors.len()
    }
}

impl EdgeSet for Functional {
    type EdgesByIdIter<'a> = RangeIds<EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
        (0..self.successors.len()).into()
    }

    fn edge_count(&self) -> usize {
        self.successors.len()
    }

    fn endpoints(&self, id: &EdgeId) -> Option<(VertexId, VertexId)> {
        let src = VertexId::from_usize(id.as_usize());
        self.successor(src).map(|dst| (src, dst))
    }
}

impl Neighbors for Functional {
    type NeighborsIter<'a> = NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors_undirected(&self, src: &VertexId) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            src: *src,
            successor: self.successor(*src),
            predecessors: self.predecessor_list(src),
        }
    }

    fn neighbors_directed(&self, src: &VertexId, dir: Direction) -> Self::NeighborsIter<'_> {
        match dir {
            Direction::Outgoing => NeighborsIter {
                src: *src,
                successor: self.successor(*src),
                predecessors: [].iter(),
            },
            Direction::Incoming => NeighborsIter {
                src: *src,
                successor: None,
                predecessors: self.predecessor_list(src),
            },
        }
    }
}

impl Functional {
    fn predecessor_list(&self, src: &VertexId) -> slice::Iter<'_, VertexId> {
        self.predecessors
            .get(src.as_usize())
            .map(|list| list.iter())
            .unwrap_or_default()
    }
}

pub struct NeighborsIter<'a> {
    src: VertexId,
    successor: Option<VertexId>,
    predecessors: slice::Iter<'a, VertexId>,
}

impl Iterator for NeighborsIter<'_> {
    type Item = NeighborRef<VertexId, EdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(next) = self.successor.take() {
            return Some(NeighborRef {
                id: next,
                edge: EdgeId::from_usize(self.src.as_usize()),
                src: self.src,
                dir: Direction::Outgoing,
            });
        }

        self.predecessors.next().map(|&prev| NeighborRef {
            id: prev,
            edge: EdgeId::from_usize(prev.as_usize()),
            src: self.src,
            dir: Direction::Incoming,
        })
    }
}
