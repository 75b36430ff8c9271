//! One-parameter relations.

use std::marker::PhantomData;

use matchforge_core::{decapsulate, report_failure, Predicate, PredicateArena, ValueBox};

use super::Payload;
use crate::numeric::Numeric;

/// A test relating the payload to one parameter.
pub trait Relation<T>: Send + Sync + 'static {
    /// Name used in failure messages.
    const NAME: &'static str;

    fn holds(value: &T, param: &T) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsLesserThan;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsLesserEq;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsGreaterThan;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsGreaterEq;

/// Remainder by the parameter equals zero.
///
/// An integral zero divisor never divides anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsDivisibleBy;

impl<T: PartialOrd> Relation<T> for IsLesserThan {
    const NAME: &'static str = "IsLesserThan";

    #[inline]
    fn holds(value: &T, param: &T) -> bool {
        value < param
    }
}

impl<T: PartialOrd> Relation<T> for IsLesserEq {
    const NAME: &'static str = "IsLesserEq";

    #[inline]
    fn holds(value: &T, param: &T) -> bool {
        value <= param
    }
}

impl<T: PartialOrd> Relation<T> for IsGreaterThan {
    const NAME: &'static str = "IsGreaterThan";

    #[inline]
    fn holds(value: &T, param: &T) -> bool {
        value > param
    }
}

impl<T: PartialOrd> Relation<T> for IsGreaterEq {
    const NAME: &'static str = "IsGreaterEq";

    #[inline]
    fn holds(value: &T, param: &T) -> bool {
        value >= param
    }
}

impl<T: Numeric> Relation<T> for IsDivisibleBy {
    const NAME: &'static str = "IsDivisibleBy";

    #[inline]
    fn holds(value: &T, param: &T) -> bool {
        value.remainder(*param) == Some(T::zero())
    }
}

/// Applies relation `R` between a `T` payload and a fixed parameter.
pub struct Compare<R, T> {
    param: T,
    _phantom: PhantomData<fn() -> R>,
}

impl<R, T> Compare<R, T> {
    #[inline]
    pub fn new(param: T) -> Self {
        Self {
            param,
            _phantom: PhantomData,
        }
    }

    #[inline]
    pub fn param(&self) -> &T {
        &self.param
    }
}

impl<R, T> Predicate for Compare<R, T>
where
    R: Relation<T>,
    T: Payload,
{
    fn execute(&self, _: &PredicateArena, value: &ValueBox) -> bool {
        let Some(actual) = decapsulate::<T>(value) else {
            return false;
        };
        report_failure(R::holds(actual, &self.param), || {
            format!("Predicate {}({:?}) failed for value {:?}", R::NAME, self.param, actual)
        })
    }
}
