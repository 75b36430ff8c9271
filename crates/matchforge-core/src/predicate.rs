//! The predicate trait and the sub-test sum type.

use std::fmt;

use crate::arena::{PredicateArena, PredicateHandle};
use crate::value::ValueBox;

/// Signature of a plain test function.
pub type TestFn = fn(&ValueBox) -> bool;

/// A boolean test over a [`ValueBox`].
///
/// Nested predicates are resolved through the arena passed to
/// [`execute`](Predicate::execute), which is always the arena that owns
/// `self`.
///
/// # Example
///
/// ```
/// use matchforge_core::{decapsulate, Predicate, PredicateArena, ValueBox};
///
/// struct IsFortyTwo;
///
/// impl Predicate for IsFortyTwo {
///     fn execute(&self, _: &PredicateArena, value: &ValueBox) -> bool {
///         decapsulate::<i32>(value).is_some_and(|v| *v == 42)
///     }
/// }
///
/// let mut arena = PredicateArena::new();
/// let handle = arena.own(IsFortyTwo);
/// assert!(arena.execute(handle, &ValueBox::new(42)));
/// assert!(!arena.execute(handle, &ValueBox::new(41)));
/// ```
pub trait Predicate: Send + Sync {
    /// Returns true if `value` is accepted.
    fn execute(&self, arena: &PredicateArena, value: &ValueBox) -> bool;

    /// Handles of arena-owned predicates this one evaluates.
    ///
    /// The arena checks them when `self` is taken into ownership.
    fn nested(&self) -> Vec<PredicateHandle> {
        Vec::new()
    }
}

/// One operand of a wrapper or combinator.
pub enum SubTest {
    /// A plain function.
    Function(TestFn),
    /// A closure.
    Closure(Box<dyn Fn(&ValueBox) -> bool + Send + Sync>),
    /// A predicate previously issued by the same arena.
    Nested(PredicateHandle),
}

impl SubTest {
    /// Wraps a plain function.
    #[inline]
    pub fn function(f: TestFn) -> Self {
        Self::Function(f)
    }

    /// Wraps a closure.
    #[inline]
    pub fn closure<F>(f: F) -> Self
    where
        F: Fn(&ValueBox) -> bool + Send + Sync + 'static,
    {
        Self::Closure(Box::new(f))
    }

    /// Refers to an arena-owned predicate.
    #[inline]
    pub fn nested(handle: PredicateHandle) -> Self {
        Self::Nested(handle)
    }

    /// Evaluates this sub-test against `value`.
    #[inline]
    pub fn evaluate(&self, arena: &PredicateArena, value: &ValueBox) -> bool {
        match self {
            Self::Function(f) => f(value),
            Self::Closure(f) => f(value),
            Self::Nested(handle) => arena.execute(*handle, value),
        }
    }

    /// Returns the nested handle, if this sub-test is one.
    #[inline]
    pub fn handle(&self) -> Option<PredicateHandle> {
        match self {
            Self::Nested(handle) => Some(*handle),
            _ => None,
        }
    }
}

impl From<PredicateHandle> for SubTest {
    fn from(handle: PredicateHandle) -> Self {
        Self::Nested(handle)
    }
}

impl From<TestFn> for SubTest {
    fn from(f: TestFn) -> Self {
        Self::Function(f)
    }
}

impl fmt::Debug for SubTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function"),
            Self::Closure(_) => f.write_str("Closure"),
            Self::Nested(handle) => f.debug_tuple("Nested").field(handle).finish(),
        }
    }
}
