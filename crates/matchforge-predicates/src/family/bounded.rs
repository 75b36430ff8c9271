//! Two-parameter tests: ranges and tolerance.

use std::marker::PhantomData;

use matchforge_core::{decapsulate, report_failure, Predicate, PredicateArena, ValueBox};

use super::Payload;
use crate::numeric::Numeric;

/// A test relating the payload to two parameters.
pub trait Bounds<T>: Send + Sync + 'static {
    /// Name used in failure messages.
    const NAME: &'static str;

    fn holds(value: &T, first: &T, second: &T) -> bool;
}

/// `low <= value <= high`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InBetween;

/// `value < low || value > high`; the bounds themselves are inside.
#[derive(Debug, Clone, Copy, Default)]
pub struct Outside;

/// `|value - target| <= epsilon`.
///
/// The distance is taken in the direction that cannot underflow, so
/// unsigned payloads work. An integral distance too large for `T` exceeds
/// any `epsilon`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEqualEpsilon;

impl<T: PartialOrd> Bounds<T> for InBetween {
    const NAME: &'static str = "InBetween";

    #[inline]
    fn holds(value: &T, low: &T, high: &T) -> bool {
        value >= low && value <= high
    }
}

impl<T: PartialOrd> Bounds<T> for Outside {
    const NAME: &'static str = "Outside";

    #[inline]
    fn holds(value: &T, low: &T, high: &T) -> bool {
        value < low || value > high
    }
}

impl<T: Numeric> Bounds<T> for IsEqualEpsilon {
    const NAME: &'static str = "IsEqualEpsilon";

    #[inline]
    fn holds(value: &T, target: &T, epsilon: &T) -> bool {
        let distance = if value >= target {
            value.difference(*target)
        } else {
            target.difference(*value)
        };
        distance.is_some_and(|d| d <= *epsilon)
    }
}

/// Applies `B` between a `T` payload and two fixed parameters.
pub struct Bounded<B, T> {
    first: T,
    second: T,
    _phantom: PhantomData<fn() -> B>,
}

impl<B, T> Bounded<B, T> {
    #[inline]
    pub fn new(first: T, second: T) -> Self {
        Self {
            first,
            second,
            _phantom: PhantomData,
        }
    }
}

impl<B, T> Predicate for Bounded<B, T>
where
    B: Bounds<T>,
    T: Payload,
{
    fn execute(&self, _: &PredicateArena, value: &ValueBox) -> bool {
        let Some(actual) = decapsulate::<T>(value) else {
            return false;
        };
        report_failure(B::holds(actual, &self.first, &self.second), || {
            format!(
                "Predicate {}({:?}, {:?}) failed for value {:?}",
                B::NAME,
                self.first,
                self.second,
                actual
            )
        })
    }
}
