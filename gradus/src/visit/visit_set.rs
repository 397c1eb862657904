use std::{
    collections::HashSet,
    hash::BuildHasher,
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use fixedbitset::FixedBitSet;

use crate::core::id::{IdType, IntegerIdType};

/// A set of visited vertices or edges.
pub trait VisitSet<I: IdType> {
    /// Marks the element as visited.
    ///
    /// Returns `true` when this is the first time the element is visited.
    fn visit(&mut self, id: I) -> bool;

    fn is_visited(&self, id: &I) -> bool;

    fn visited_count(&self) -> usize;
}

impl<I: IdType, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }
}

impl<I: IntegerIdType> VisitSet<I> for TypedBitSet<I> {
    fn visit(&mut self, id: I) -> bool {
        let index = id.as_usize();
        if self.inner.len() <= index {
            self.inner.grow(index + 1);
        }
        !self.inner.put(index)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.inner.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.inner.count_ones(..)
    }
}

/// Tiny [`FixedBitSet`] wrapper adding the type of the elements the set holds.
///
/// The set grows on demand, so it never needs to know the vertex bound in
/// advance.
#[derive(Debug, Clone)]
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<fn() -> T>,
}

impl<T> TypedBitSet<T> {
    pub fn new() -> Self {
        Self {
            inner: FixedBitSet::new(),
            ty: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl<T> Default for TypedBitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TypedBitSet<T> {
    type Target = FixedBitSet;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TypedBitSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use crate::core::id::VertexId;

    use super::*;

    #[test]
    fn bit_set_grows() {
        let mut set = TypedBitSet::<VertexId>::new();

        assert!(set.visit(VertexId::from(10usize)));
        assert!(!set.visit(VertexId::from(10usize)));
        assert!(set.is_visited(&VertexId::from(10usize)));
        assert!(!set.is_visited(&VertexId::from(3usize)));
        assert!(!set.is_visited(&VertexId::from(100usize)));
        assert_eq!(set.visited_count(), 1);
    }
}
