//! Predicate families and combinators for MatchForge.
//!
//! This crate builds on `matchforge-core`:
//! - Parameterized families (`IsEqual`, `Classify`, `Compare`, `Bounded`)
//! - Polarity wrappers (`Obey` / `Resist`)
//! - Logical combinators (`MatchAll`, `MatchAny`, `MatchOne`, `MatchNone`)
//! - Argument binding (`WithArgs`)
//! - `PredicateFactory`, the arena extension that builds all of the above

pub mod combinator;
pub mod factory;
pub mod family;
pub mod numeric;
pub mod polarity;
pub mod with_args;

pub use combinator::{Aggregation, MatchCombinator};
pub use factory::PredicateFactory;
pub use family::{ByteComparable, Payload};
pub use numeric::{Numeric, NumericKind};
pub use polarity::{Polarity, PolarityPredicate};
pub use with_args::{BoundArgs, WithArgs};
