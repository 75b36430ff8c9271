//! Equality families.

use matchforge_core::{decapsulate, decapsulate_array, report_failure, Predicate, PredicateArena, ValueBox};

use super::Payload;

/// Matches values equal (`==`) to the expected one.
#[derive(Debug, Clone)]
pub struct IsEqual<T> {
    expected: T,
}

impl<T> IsEqual<T> {
    #[inline]
    pub fn new(expected: T) -> Self {
        Self { expected }
    }
}

impl<T> Predicate for IsEqual<T>
where
    T: PartialEq + Payload,
{
    fn execute(&self, _: &PredicateArena, value: &ValueBox) -> bool {
        let Some(actual) = decapsulate::<T>(value) else {
            return false;
        };
        report_failure(*actual == self.expected, || {
            format!("Predicate IsEqual({:?}) failed for value {:?}", self.expected, actual)
        })
    }
}

/// Element types compared by their in-memory representation.
///
/// Floats compare by bit pattern: `NaN` matches an identical `NaN`, and
/// `0.0` does not match `-0.0`.
pub trait ByteComparable {
    fn same_bytes(&self, other: &Self) -> bool;
}

macro_rules! impl_byte_comparable_int {
    ($($t:ty),+) => {
        $(
            impl ByteComparable for $t {
                #[inline]
                fn same_bytes(&self, other: &Self) -> bool {
                    self.to_ne_bytes() == other.to_ne_bytes()
                }
            }
        )+
    };
}

macro_rules! impl_byte_comparable_float {
    ($($t:ty),+) => {
        $(
            impl ByteComparable for $t {
                #[inline]
                fn same_bytes(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }
            }
        )+
    };
}

impl_byte_comparable_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_byte_comparable_float!(f32, f64);

impl ByteComparable for bool {
    #[inline]
    fn same_bytes(&self, other: &Self) -> bool {
        *self as u8 == *other as u8
    }
}

impl ByteComparable for char {
    #[inline]
    fn same_bytes(&self, other: &Self) -> bool {
        *self as u32 == *other as u32
    }
}

impl<T: ByteComparable, const N: usize> ByteComparable for [T; N] {
    #[inline]
    fn same_bytes(&self, other: &Self) -> bool {
        self.iter().zip(other).all(|(a, b)| a.same_bytes(b))
    }
}

/// Matches fixed-size arrays element by element on their representation.
///
/// The box must hold exactly `[T; N]`; an array of another length or
/// element type fails the type check.
#[derive(Debug, Clone)]
pub struct IsEqualArray<T, const N: usize> {
    expected: [T; N],
}

impl<T, const N: usize> IsEqualArray<T, N> {
    #[inline]
    pub fn new(expected: [T; N]) -> Self {
        Self { expected }
    }
}

impl<T, const N: usize> Predicate for IsEqualArray<T, N>
where
    T: ByteComparable + Payload,
{
    fn execute(&self, _: &PredicateArena, value: &ValueBox) -> bool {
        let Some(actual) = decapsulate_array::<T, N>(value) else {
            return false;
        };
        report_failure(self.expected.same_bytes(actual), || {
            format!("Predicate IsEqual({:?}) failed for value {:?}", self.expected, actual)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<P: Predicate + 'static>(predicate: P, value: ValueBox) -> bool {
        let mut arena = PredicateArena::new();
        let handle = arena.own(predicate);
        arena.execute(handle, &value)
    }

    const EXPECTED: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    const ACTUAL: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 10];

    #[test]
    fn test_scalar() {
        assert!(check(IsEqual::new(42), ValueBox::new(42)));
        assert!(!check(IsEqual::new(42), ValueBox::new(24)));
        assert!(check(IsEqual::new(1.25_f64), ValueBox::new(1.25_f64)));
        assert!(!check(IsEqual::new(42), ValueBox::new(42_u8)));
    }

    #[test]
    fn test_structured_values() {
        let expected = vec![0_u8, 1, 2, 3, 4, 5, 6, 7, 8, 10];
        assert!(check(IsEqual::new(expected.clone()), ValueBox::new(expected)));
        assert!(check(IsEqual::new(String::from("a")), ValueBox::new(String::from("a"))));
    }

    #[test]
    fn test_arrays() {
        assert!(!check(IsEqualArray::new(EXPECTED), ValueBox::new(ACTUAL)));
        assert!(check(IsEqualArray::new(ACTUAL), ValueBox::new(ACTUAL)));
        assert!(check(IsEqualArray::new(EXPECTED), ValueBox::new(EXPECTED)));
    }

    #[test]
    fn test_array_type_check_precedes_content() {
        let same_layout: [i32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert!(!check(IsEqualArray::new(EXPECTED), ValueBox::new(same_layout)));
        assert!(check(IsEqualArray::new(same_layout), ValueBox::new(same_layout)));
        assert!(!check(IsEqualArray::new(same_layout), ValueBox::new(EXPECTED)));
        assert!(!check(IsEqualArray::new([0_u8, 1, 2]), ValueBox::new(EXPECTED)));
    }

    #[test]
    fn test_float_arrays_compare_bits() {
        assert!(check(IsEqualArray::new([f64::NAN]), ValueBox::new([f64::NAN])));
        assert!(!check(IsEqualArray::new([0.0_f64]), ValueBox::new([-0.0_f64])));
        assert!(check(IsEqual::new(0.0_f64), ValueBox::new(-0.0_f64)));
    }

    #[test]
    fn test_nested_arrays() {
        let grid = [[1_u16, 2], [3, 4]];
        assert!(check(IsEqualArray::new(grid), ValueBox::new(grid)));
        assert!(!check(IsEqualArray::new(grid), ValueBox::new([[1_u16, 2], [3, 5]])));
    }
}
