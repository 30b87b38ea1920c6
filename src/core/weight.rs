use std::cmp::Ordering;

mod ordered_float;

use ordered_float::OrderedFloat;

/// An edge weight or path distance.
///
/// The value returned by [`inf`](Weight::inf) is the sentinel for "no edge" or
/// "unreachable". All arithmetic on weights goes through
/// [`saturating_add`](Weight::saturating_add) so that sums involving the
/// sentinel clamp at the sentinel instead of wrapping around into a small,
/// deceptively finite value.
pub trait Weight: PartialOrd + Clone + Sized {
    /// Type that establishes total order of the weights, used in priority
    /// queues. For types where `Self: Ord`, this is `Self`.
    type Ord: Ord + From<Self> + Into<Self>;

    /// Weight of a path of zero length.
    fn zero() -> Self;

    /// The unreachability sentinel.
    fn inf() -> Self;

    /// Returns `true` if the type is unsigned, that is, it can't represent
    /// negative weights.
    fn is_unsigned() -> bool;

    /// Adds two weights, clamping the result at [`inf`](Weight::inf) instead
    /// of overflowing.
    fn saturating_add(&self, rhs: &Self) -> Self;
}

/// A value accompanied by a weight, ordered by the weight only.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn saturating_add(&self, rhs: &Self) -> Self {
                // The sentinel is MAX, so saturation lands exactly on it.
                <$ty>::saturating_add(*self, *rhs)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn saturating_add(&self, rhs: &Self) -> Self {
                // IEEE infinity absorbs any finite addend.
                *self + *rhs
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
