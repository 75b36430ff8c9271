//! MatchForge - Composable value matching in Rust
//!
//! Wrap any value in a [`ValueBox`], build predicates into a
//! [`PredicateArena`], and ask the arena whether a predicate accepts a box.
//!
//! # Example
//!
//! ```rust
//! use matchforge::prelude::*;
//!
//! let mut arena = PredicateArena::new();
//! let teen = arena.in_between(13, 19);
//! let odd = arena.is_odd::<i32>();
//! let odd_teen = arena.match_all([teen.into(), odd.into()]);
//!
//! assert!(arena.execute(odd_teen, &encapsulate(15)));
//! assert!(!arena.execute(odd_teen, &encapsulate(16)));
//! assert!(!arena.execute(odd_teen, &encapsulate(15_u8)));
//!
//! arena.reset();
//! assert!(arena.try_execute(odd_teen, &encapsulate(15)).is_err());
//! ```

// Core types
pub use matchforge_core::{
    decapsulate, decapsulate_array, diagnostics, encapsulate, report_failure, ArenaError,
    DiagnosticSink, Predicate, PredicateArena, PredicateHandle, SubTest, TestFn, TraceProvider,
    TypeMismatch, ValueBox,
};

// Families and combinators
pub use matchforge_predicates::{
    combinator, family, numeric, Aggregation, BoundArgs, ByteComparable, MatchCombinator,
    Numeric, NumericKind, Payload, Polarity, PolarityPredicate, PredicateFactory, WithArgs,
};

// Configuration
pub use matchforge_config::{ConfigError, DiagnosticMode, DiagnosticsConfig, MatchConfig};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{decapsulate, decapsulate_array, encapsulate, report_failure};
    pub use super::{ArenaError, PredicateArena, PredicateFactory, PredicateHandle, SubTest, ValueBox};
}
