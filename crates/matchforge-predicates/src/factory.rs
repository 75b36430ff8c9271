//! Factory methods on the arena.
//!
//! Every method builds a predicate, moves it into the arena and returns the
//! handle. Parameterless classifiers are shared per payload type until the
//! arena is reset.

use matchforge_core::{PredicateArena, PredicateHandle, SubTest};
use num_traits::Zero;

use crate::combinator::{Aggregation, MatchCombinator};
use crate::family::{
    Bounded, ByteComparable, Classify, Compare, InBetween, IsDivisibleBy, IsEqual, IsEqualArray,
    IsEqualEpsilon, IsEven, IsGreaterEq, IsGreaterThan, IsLesserEq, IsLesserThan, IsNegative,
    IsNonZero, IsOdd, IsPositive, IsZero, Outside, Payload,
};
use crate::numeric::Numeric;
use crate::polarity::{Polarity, PolarityPredicate};
use crate::with_args::{BoundArgs, WithArgs};

/// Builds predicates into an arena.
///
/// # Example
///
/// ```
/// use matchforge_core::{PredicateArena, SubTest, ValueBox};
/// use matchforge_predicates::PredicateFactory;
///
/// let mut arena = PredicateArena::new();
/// let big = arena.is_greater_than(10);
/// let even = arena.is_even::<i32>();
/// let both = arena.match_all([big.into(), even.into()]);
///
/// assert!(arena.execute(both, &ValueBox::new(42)));
/// assert!(!arena.execute(both, &ValueBox::new(43)));
/// assert!(!arena.execute(both, &ValueBox::new(8)));
/// ```
pub trait PredicateFactory {
    /// Succeeds iff `test` returns true.
    fn obey(&mut self, test: impl Into<SubTest>) -> PredicateHandle;

    /// Succeeds iff `test` returns false.
    fn resist(&mut self, test: impl Into<SubTest>) -> PredicateHandle;

    /// Succeeds iff every sub-test succeeds.
    fn match_all<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle;

    /// Succeeds iff at least one sub-test succeeds.
    fn match_any<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle;

    /// Succeeds iff exactly one sub-test succeeds.
    fn match_one<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle;

    /// Succeeds iff no sub-test succeeds.
    fn match_none<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle;

    /// Calls `func(value, &args.0, &args.1, ...)`.
    fn with_args<F, P>(&mut self, func: F, args: P) -> PredicateHandle
    where
        F: Send + Sync + 'static,
        P: BoundArgs<F>;

    fn is_equal<T: PartialEq + Payload>(&mut self, expected: T) -> PredicateHandle;

    fn is_equal_array<T, const N: usize>(&mut self, expected: [T; N]) -> PredicateHandle
    where
        T: ByteComparable + Payload;

    fn is_odd<T: Numeric>(&mut self) -> PredicateHandle;

    fn is_even<T: Numeric>(&mut self) -> PredicateHandle;

    fn is_zero<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle;

    fn is_non_zero<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle;

    fn is_positive<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle;

    fn is_negative<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle;

    fn is_divisible_by<T: Numeric>(&mut self, divisor: T) -> PredicateHandle;

    fn is_lesser_than<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle;

    fn is_lesser_eq<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle;

    fn is_greater_than<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle;

    fn is_greater_eq<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle;

    /// `low <= value <= high`.
    fn in_between<T: PartialOrd + Payload>(&mut self, low: T, high: T) -> PredicateHandle;

    /// `value < low || value > high`.
    fn outside<T: PartialOrd + Payload>(&mut self, low: T, high: T) -> PredicateHandle;

    /// `|value - target| <= epsilon`.
    fn is_equal_epsilon<T: Numeric>(&mut self, target: T, epsilon: T) -> PredicateHandle;
}

impl PredicateFactory for PredicateArena {
    fn obey(&mut self, test: impl Into<SubTest>) -> PredicateHandle {
        self.own(PolarityPredicate::new(Polarity::Obey, test.into()))
    }

    fn resist(&mut self, test: impl Into<SubTest>) -> PredicateHandle {
        self.own(PolarityPredicate::new(Polarity::Resist, test.into()))
    }

    fn match_all<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle {
        self.own(MatchCombinator::new(Aggregation::All, tests))
    }

    fn match_any<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle {
        self.own(MatchCombinator::new(Aggregation::Any, tests))
    }

    fn match_one<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle {
        self.own(MatchCombinator::new(Aggregation::One, tests))
    }

    fn match_none<const N: usize>(&mut self, tests: [SubTest; N]) -> PredicateHandle {
        self.own(MatchCombinator::new(Aggregation::None, tests))
    }

    fn with_args<F, P>(&mut self, func: F, args: P) -> PredicateHandle
    where
        F: Send + Sync + 'static,
        P: BoundArgs<F>,
    {
        self.own(WithArgs::new(func, args))
    }

    fn is_equal<T: PartialEq + Payload>(&mut self, expected: T) -> PredicateHandle {
        self.own(IsEqual::new(expected))
    }

    fn is_equal_array<T, const N: usize>(&mut self, expected: [T; N]) -> PredicateHandle
    where
        T: ByteComparable + Payload,
    {
        self.own(IsEqualArray::new(expected))
    }

    fn is_odd<T: Numeric>(&mut self) -> PredicateHandle {
        self.own_cached(Classify::<IsOdd, T>::new)
    }

    fn is_even<T: Numeric>(&mut self) -> PredicateHandle {
        self.own_cached(Classify::<IsEven, T>::new)
    }

    fn is_zero<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle {
        self.own_cached(Classify::<IsZero, T>::new)
    }

    fn is_non_zero<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle {
        self.own_cached(Classify::<IsNonZero, T>::new)
    }

    fn is_positive<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle {
        self.own_cached(Classify::<IsPositive, T>::new)
    }

    fn is_negative<T: Zero + PartialOrd + Payload>(&mut self) -> PredicateHandle {
        self.own_cached(Classify::<IsNegative, T>::new)
    }

    fn is_divisible_by<T: Numeric>(&mut self, divisor: T) -> PredicateHandle {
        self.own(Compare::<IsDivisibleBy, T>::new(divisor))
    }

    fn is_lesser_than<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle {
        self.own(Compare::<IsLesserThan, T>::new(param))
    }

    fn is_lesser_eq<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle {
        self.own(Compare::<IsLesserEq, T>::new(param))
    }

    fn is_greater_than<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle {
        self.own(Compare::<IsGreaterThan, T>::new(param))
    }

    fn is_greater_eq<T: PartialOrd + Payload>(&mut self, param: T) -> PredicateHandle {
        self.own(Compare::<IsGreaterEq, T>::new(param))
    }

    fn in_between<T: PartialOrd + Payload>(&mut self, low: T, high: T) -> PredicateHandle {
        self.own(Bounded::<InBetween, T>::new(low, high))
    }

    fn outside<T: PartialOrd + Payload>(&mut self, low: T, high: T) -> PredicateHandle {
        self.own(Bounded::<Outside, T>::new(low, high))
    }

    fn is_equal_epsilon<T: Numeric>(&mut self, target: T, epsilon: T) -> PredicateHandle {
        self.own(Bounded::<IsEqualEpsilon, T>::new(target, epsilon))
    }
}
