//! Traits and types used for identifying vertices and edges in graphs.
//!
//! All types that are supposed to be used as vertex/edge identifiers must
//! implement [`IdType`]. Dense storages additionally require
//! [`IntegerIdType`] so that algorithms can index into contiguous arrays.

use std::{fmt, hash::Hash};

/// A unique identification of a vertex or edge in a graph.
///
/// In the storages of this crate, the ID is an integer in `0..n`. For implicit
/// graphs (e.g., squares on a chessboard), an ID can be of any form as long as
/// it is cheap to clone, hashable and totally ordered.
pub trait IdType: Clone + Ord + Hash + fmt::Debug {
    /// Determines if the ID type is representable by a contiguous integer. See
    /// [`IntegerIdType`] for more details.
    fn is_integer() -> bool;

    /// Converts an ID into the corresponding `u64`.
    fn as_bits(&self) -> u64;

    /// Converts an `u64` into the corresponding ID.
    fn from_bits(bits: u64) -> Self;

    fn as_usize(&self) -> usize {
        self.as_bits() as usize
    }

    fn from_usize(id: usize) -> Self {
        Self::from_bits(id as u64)
    }
}

/// Type-level specification that an ID type is representable by integer.
///
/// All integer values up to some upper bound must be valid IDs and there must
/// be no discontinuity, so that `0..vertex_bound` can index a vector.
pub trait IntegerIdType: IdType + Copy + From<usize> + Into<usize> {}

/// Identifies a vertex in a storage of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct VertexId(u32);

/// Identifies an edge in a storage of this crate.
///
/// Edge IDs are assigned in insertion order, starting from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EdgeId(u32);

macro_rules! impl_int_id {
    ($id_ty:ident) => {
        impl IdType for $id_ty {
            fn is_integer() -> bool {
                true
            }

            fn as_bits(&self) -> u64 {
                self.0 as u64
            }

            fn from_bits(bits: u64) -> Self {
                Self(bits as u32)
            }
        }

        impl IntegerIdType for $id_ty {}

        impl From<usize> for $id_ty {
            fn from(id: usize) -> Self {
                Self(id as u32)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.0 as usize
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_int_id!(VertexId);
impl_int_id!(EdgeId);

// For edge ids of implicit graphs that are represented as a pair of vertex ids.
impl<T: IdType, U: IdType> IdType for (T, U) {
    fn is_integer() -> bool {
        false
    }

    fn as_bits(&self) -> u64 {
        let (lhs, rhs) = self;
        lhs.as_bits() << 32 | (rhs.as_bits() & u32::MAX as u64)
    }

    fn from_bits(bits: u64) -> Self {
        (T::from_bits(bits >> 32), U::from_bits(bits & u32::MAX as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversions() {
        let v = VertexId::from(42usize);
        assert_eq!(v.as_usize(), 42);
        assert_eq!(usize::from(v), 42);
        assert_eq!(VertexId::from_bits(7), VertexId::from(7usize));
        assert_eq!(v.to_string(), "42");
    }

    #[test]
    fn pair_bits() {
        let pair = (VertexId::from(3usize), VertexId::from(9usize));
        assert!(!<(VertexId, VertexId)>::is_integer());
        assert_eq!(<(VertexId, VertexId)>::from_bits(pair.as_bits()), pair);
    }
}
