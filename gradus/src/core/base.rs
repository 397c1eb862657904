use super::{
    id::IdType,
    marker::{Direction, EdgeType},
};

/// The minimal capability every graph exposes: the types of its identifiers
/// and its orientation.
pub trait GraphBase {
    type VertexId: IdType;
    type EdgeId: IdType;
    type EdgeType: EdgeType;

    /// Expected number of vertices, used for preallocating traversal state.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }
}

/// A neighbor of vertex `src` reached over `edge`.
///
/// `dir` tells whether the edge is outgoing from or incoming to `src`. In
/// undirected graphs it is always [`Outgoing`](Direction::Outgoing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRef<VI, EI> {
    pub id: VI,
    pub edge: EI,
    pub src: VI,
    pub dir: Direction,
}

macro_rules! deref_graph_base {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type VertexId = G::VertexId;
            type EdgeId = G::EdgeId;
            type EdgeType = G::EdgeType;

            fn vertex_count_hint(&self) -> Option<usize> {
                (**self).vertex_count_hint()
            }
        }
    }
}

deref_graph_base!(&);
deref_graph_base!(&mut);
