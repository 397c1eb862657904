use super::base::GraphBase;

pub trait EdgeSet: GraphBase {
    type EdgesByIdIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    fn edges_by_id(&self) -> Self::EdgesByIdIter<'_>;

    fn edge_count(&self) -> usize {
        self.edges_by_id().count()
    }

    /// Returns `(from, to)` of an edge, `None` if the edge does not exist.
    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)>;

    fn contains_edge(&self, id: &Self::EdgeId) -> bool {
        self.endpoints(id).is_some()
    }
}

/// Access to edge attributes (typically weights).
pub trait GraphRef<E>: EdgeSet {
    fn edge(&self, id: &Self::EdgeId) -> Option<&E>;
}

macro_rules! deref_edge_set {
    ($($ref_kind:tt)*) => {
        impl<G> EdgeSet for $($ref_kind)* G
        where
            G: EdgeSet,
        {
            type EdgesByIdIter<'a> = G::EdgesByIdIter<'a>
            where
                Self: 'a;

            fn edges_by_id(&self) -> Self::EdgesByIdIter<'_> {
                (**self).edges_by_id()
            }

            fn edge_count(&self) -> usize {
                (**self).edge_count()
            }

            fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
                (**self).endpoints(id)
            }
        }

        impl<E, G> GraphRef<E> for $($ref_kind)* G
        where
            G: GraphRef<E>,
        {
            fn edge(&self, id: &Self::EdgeId) -> Option<&E> {
                (**self).edge(id)
            }
        }
    }
}

deref_edge_set!(&);
deref_edge_set!(&mut);
