use std::{fmt, ops::Add};

/// Integer edge weight.
///
/// Only integers are supported, because the shortest path algorithms in this
/// crate index buckets by distance.
pub trait Weight: Ord + Add<Self, Output = Self> + Clone + fmt::Debug + Sized {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_unsigned() -> bool;

    /// Returns the weight as `u64`, or `None` if it is negative.
    fn to_bits(&self) -> Option<u64>;
}

pub trait GetWeight<E, W>
where
    W: Weight,
{
    fn get(&self, edge: &E) -> W;

    fn get_const(&self) -> Option<W> {
        None
    }

    fn is_const(&self) -> bool {
        self.get_const().is_some()
    }
}

pub trait IsConstWeight {}

impl<F, E, W> GetWeight<E, W> for F
where
    F: Fn(&E) -> W,
    W: Weight,
{
    fn get(&self, edge: &E) -> W {
        (self)(edge)
    }
}

/// The edge attribute is the weight itself.
#[derive(Debug)]
pub struct Identity;

impl<E> GetWeight<E, E> for Identity
where
    E: Weight,
{
    fn get(&self, edge: &E) -> E {
        edge.clone()
    }
}

/// Every edge has weight one. Distances are then hop counts.
#[derive(Debug)]
pub struct Unit;

impl<E> GetWeight<E, usize> for Unit {
    fn get(&self, _edge: &E) -> usize {
        1
    }

    fn get_const(&self) -> Option<usize> {
        Some(1)
    }
}

impl IsConstWeight for Unit {}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            #[allow(unused_comparisons)]
            fn to_bits(&self) -> Option<u64> {
                if *self < 0 {
                    None
                } else {
                    Some(*self as u64)
                }
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(isize, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(usize, true);
