use std::{marker::PhantomData, ops::Range};

use super::{base::GraphBase, id::IntegerIdType};

pub trait VertexSet: GraphBase {
    type VerticesByIdIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// All vertex IDs in ascending order.
    fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_>;

    fn vertex_count(&self) -> usize {
        self.vertices_by_id().count()
    }

    /// Upper bound on the integer representation of the vertex IDs.
    fn vertex_bound(&self) -> usize
    where
        Self::VertexId: IntegerIdType,
    {
        self.vertices_by_id()
            .map(|v| v.into())
            .max()
            .map(|max: usize| max + 1)
            .unwrap_or_default()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertices_by_id().any(|v| &v == id)
    }
}

/// Iterator over a contiguous range of integer IDs.
#[derive(Debug, Clone)]
pub struct RangeIds<I> {
    range: Range<usize>,
    ty: PhantomData<fn() -> I>,
}

impl<I> From<Range<usize>> for RangeIds<I> {
    fn from(range: Range<usize>) -> Self {
        Self {
            range,
            ty: PhantomData,
        }
    }
}

impl<I: IntegerIdType> Iterator for RangeIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<I: IntegerIdType> DoubleEndedIterator for RangeIds<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(I::from)
    }
}

impl<I: IntegerIdType> ExactSizeIterator for RangeIds<I> {}

macro_rules! deref_vertex_set {
    ($($ref_kind:tt)*) => {
        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            type VerticesByIdIter<'a> = G::VerticesByIdIter<'a>
            where
                Self: 'a;

            fn vertices_by_id(&self) -> Self::VerticesByIdIter<'_> {
                (**self).vertices_by_id()
            }

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn vertex_bound(&self) -> usize
            where
                Self::VertexId: IntegerIdType,
            {
                (**self).vertex_bound()
            }

            fn contains_vertex(&self, id: &Self::VertexId) -> bool {
                (**self).contains_vertex(id)
            }
        }
    }
}

deref_vertex_set!(&);
deref_vertex_set!(&mut);
