//! Parameterized predicate families.
//!
//! Each family shape is one generic struct parameterized by a marker type
//! (which test to run) and the payload type `T`:
//! - [`IsEqual`] / [`IsEqualArray`]: equality
//! - [`Classify`]: parameterless classifiers (`IsOdd`, `IsZero`, ...)
//! - [`Compare`]: one-parameter relations (`IsLesserThan`, `IsDivisibleBy`, ...)
//! - [`Bounded`]: two-parameter tests (`InBetween`, `Outside`, `IsEqualEpsilon`)
//!
//! Every family decapsulates the box as `T` first and fails on a type
//! mismatch before looking at the value.

mod bounded;
mod classify;
mod compare;
mod equality;

use std::fmt::Debug;

pub use bounded::{Bounded, Bounds, InBetween, IsEqualEpsilon, Outside};
pub use classify::{Classifier, Classify, IsEven, IsNegative, IsNonZero, IsOdd, IsPositive, IsZero};
pub use compare::{
    Compare, IsDivisibleBy, IsGreaterEq, IsGreaterThan, IsLesserEq, IsLesserThan, Relation,
};
pub use equality::{ByteComparable, IsEqual, IsEqualArray};

/// Anything a family can hold as a parameter and print in a failure message.
pub trait Payload: Debug + Send + Sync + 'static {}

impl<T> Payload for T where T: Debug + Send + Sync + 'static {}
