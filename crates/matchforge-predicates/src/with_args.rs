//! Binding extra arguments to multi-argument test functions.

use matchforge_core::{Predicate, PredicateArena, ValueBox};

/// A tuple of arguments that can be passed after the value to `F`.
///
/// Implemented for tuples of one to five elements.
pub trait BoundArgs<F>: Send + Sync + 'static {
    /// Calls `f(value, &self.0, &self.1, ...)`.
    fn call(&self, f: &F, value: &ValueBox) -> bool;
}

macro_rules! impl_bound_args {
    ($($arg:ident),+) => {
        impl<F, $($arg),+> BoundArgs<F> for ($($arg,)+)
        where
            F: Fn(&ValueBox, $(&$arg),+) -> bool,
            $($arg: Send + Sync + 'static),+
        {
            #[inline]
            #[allow(non_snake_case)]
            fn call(&self, f: &F, value: &ValueBox) -> bool {
                let ($($arg,)+) = self;
                f(value, $($arg),+)
            }
        }
    };
}

impl_bound_args!(A);
impl_bound_args!(A, B);
impl_bound_args!(A, B, C);
impl_bound_args!(A, B, C, D);
impl_bound_args!(A, B, C, D, E);

/// A test function with its trailing arguments bound.
///
/// # Example
///
/// ```
/// use matchforge_core::{decapsulate, Predicate, PredicateArena, ValueBox};
/// use matchforge_predicates::WithArgs;
///
/// fn is_between(value: &ValueBox, low: &i32, high: &i32) -> bool {
///     decapsulate::<i32>(value).is_some_and(|v| low <= v && v <= high)
/// }
///
/// let mut arena = PredicateArena::new();
/// let teens = arena.own(WithArgs::new(is_between, (13, 19)));
/// assert!(arena.execute(teens, &ValueBox::new(15)));
/// assert!(!arena.execute(teens, &ValueBox::new(20)));
/// ```
pub struct WithArgs<F, P> {
    func: F,
    args: P,
}

impl<F, P> WithArgs<F, P> {
    #[inline]
    pub fn new(func: F, args: P) -> Self {
        Self { func, args }
    }
}

impl<F, P> Predicate for WithArgs<F, P>
where
    F: Send + Sync,
    P: BoundArgs<F>,
{
    #[inline]
    fn execute(&self, _: &PredicateArena, value: &ValueBox) -> bool {
        self.args.call(&self.func, value)
    }
}
