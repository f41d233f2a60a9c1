use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Distances between
/// integer coordinates saturate at the type's maximum value rather than overflowing, so
/// points far apart compare as equally distant instead of faulting.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Default
    + Debug
    + Send
    + Sync
    + Bounded
{
    /// Absolute difference between two values, `|self - other|`.
    ///
    /// Integer types saturate at their maximum value instead of overflowing.
    fn axis_gap(self, other: Self) -> Self;

    /// `self + d * d`, saturating at the maximum value for integer types.
    fn add_square(self, d: Self) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl IndexableNum for $t {
                #[inline]
                fn axis_gap(self, other: Self) -> Self {
                    let gap = if self >= other {
                        self.checked_sub(other)
                    } else {
                        other.checked_sub(self)
                    };
                    gap.unwrap_or(<$t as Bounded>::max_value())
                }

                #[inline]
                fn add_square(self, d: Self) -> Self {
                    d.checked_mul(d)
                        .and_then(|sq| self.checked_add(sq))
                        .unwrap_or(<$t as Bounded>::max_value())
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl IndexableNum for $t {
                #[inline]
                fn axis_gap(self, other: Self) -> Self {
                    (self - other).abs()
                }

                #[inline]
                fn add_square(self, d: Self) -> Self {
                    self + d * d
                }
            }
        )*
    };
}

impl_integer!(i8, u8, i16, u16, i32, u32);
impl_float!(f32, f64);

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
