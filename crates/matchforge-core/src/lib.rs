//! MatchForge Core - type-erased values and the predicate arena
//!
//! This crate provides the fundamental abstractions for MatchForge:
//! - `ValueBox`: a value of any type plus its type identity
//! - `Predicate`: a boolean test over a `ValueBox`
//! - `PredicateArena`: owner of predicates, handing out checked handles
//! - `diagnostics`: the failure-reporting sink

pub mod arena;
pub mod diagnostics;
pub mod error;
pub mod predicate;
pub mod value;


pub use arena::{PredicateArena, PredicateHandle};
pub use diagnostics::{report_failure, DiagnosticSink, TraceProvider};
pub use error::{ArenaError, TypeMismatch};
pub use predicate::{Predicate, SubTest, TestFn};
pub use value::{decapsulate, decapsulate_array, encapsulate, ValueBox};
