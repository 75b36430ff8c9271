//! Parameterless classifiers.
//!
//! These predicates have no state, so the factory keeps one instance per
//! payload type in the arena (see `PredicateArena::own_cached`).

use std::marker::PhantomData;

use matchforge_core::{decapsulate, report_failure, Predicate, PredicateArena, ValueBox};
use num_traits::Zero;

use super::Payload;
use crate::numeric::Numeric;

/// A parameterless test over `T`.
pub trait Classifier<T>: Send + Sync + 'static {
    /// Name used in failure messages.
    const NAME: &'static str;

    fn accepts(value: &T) -> bool;
}

/// Remainder by two equals one.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsOdd;

/// Remainder by two equals zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsEven;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsZero;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNonZero;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsPositive;

#[derive(Debug, Clone, Copy, Default)]
pub struct IsNegative;

impl<T: Numeric> Classifier<T> for IsOdd {
    const NAME: &'static str = "IsOdd";

    #[inline]
    fn accepts(value: &T) -> bool {
        value.remainder(T::two()) == Some(T::one())
    }
}

impl<T: Numeric> Classifier<T> for IsEven {
    const NAME: &'static str = "IsEven";

    #[inline]
    fn accepts(value: &T) -> bool {
        value.remainder(T::two()) == Some(T::zero())
    }
}

impl<T: Zero + PartialOrd> Classifier<T> for IsZero {
    const NAME: &'static str = "IsZero";

    #[inline]
    fn accepts(value: &T) -> bool {
        *value == T::zero()
    }
}

impl<T: Zero + PartialOrd> Classifier<T> for IsNonZero {
    const NAME: &'static str = "IsNonZero";

    #[inline]
    fn accepts(value: &T) -> bool {
        *value != T::zero()
    }
}

impl<T: Zero + PartialOrd> Classifier<T> for IsPositive {
    const NAME: &'static str = "IsPositive";

    #[inline]
    fn accepts(value: &T) -> bool {
        *value > T::zero()
    }
}

impl<T: Zero + PartialOrd> Classifier<T> for IsNegative {
    const NAME: &'static str = "IsNegative";

    #[inline]
    fn accepts(value: &T) -> bool {
        *value < T::zero()
    }
}

/// Applies classifier `C` to a `T` payload.
pub struct Classify<C, T> {
    _phantom: PhantomData<fn() -> (C, T)>,
}

impl<C, T> Classify<C, T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C, T> Default for Classify<C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, T> Predicate for Classify<C, T>
where
    C: Classifier<T>,
    T: Payload,
{
    fn execute(&self, _: &PredicateArena, value: &ValueBox) -> bool {
        let Some(actual) = decapsulate::<T>(value) else {
            return false;
        };
        report_failure(C::accepts(actual), || {
            format!("Predicate {}() failed for value {:?}", C::NAME, actual)
        })
    }
}
