//! Numeric strategies for the predicate families.
//!
//! Integral and floating payloads share one generic implementation per
//! family; the difference in remainder and subtraction semantics lives in
//! the [`Numeric`] impls below.

use std::fmt::Debug;

use num_traits::{One, Zero};

/// Whether a numeric payload uses integral or floating arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Integral,
    Floating,
}

/// Arithmetic needed by the parity, divisibility and tolerance families.
///
/// Integral remainders follow the sign of the dividend, so `-3 % 2` is `-1`
/// and a negative odd integer is neither odd (remainder `1`) nor even.
/// Floating remainders use the payload's own precision (`f32 % f32`,
/// `f64 % f64`, both with `fmod` semantics) and are compared exactly.
pub trait Numeric: Copy + PartialOrd + Zero + One + Debug + Send + Sync + 'static {
    /// Arithmetic strategy of this type.
    const KIND: NumericKind;

    /// `self % divisor`, or `None` where integral division is undefined
    /// (zero divisor, `MIN % -1`).
    fn remainder(self, divisor: Self) -> Option<Self>;

    /// `self - other`, or `None` on integral overflow.
    fn difference(self, other: Self) -> Option<Self>;

    /// The value two.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_integral {
    ($($t:ty),+) => {
        $(
            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::Integral;

                #[inline]
                fn remainder(self, divisor: Self) -> Option<Self> {
                    self.checked_rem(divisor)
                }

                #[inline]
                fn difference(self, other: Self) -> Option<Self> {
                    self.checked_sub(other)
                }
            }
        )+
    };
}

macro_rules! impl_floating {
    ($($t:ty),+) => {
        $(
            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::Floating;

                #[inline]
                fn remainder(self, divisor: Self) -> Option<Self> {
                    Some(self % divisor)
                }

                #[inline]
                fn difference(self, other: Self) -> Option<Self> {
                    Some(self - other)
                }
            }
        )+
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_floating!(f32, f64);
