//! Error types for MatchForge core

use thiserror::Error;

/// A value box was asked for a type it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The actual value has type '{actual}' while the expected was '{expected}'")]
pub struct TypeMismatch {
    /// Type stored in the box.
    pub actual: &'static str,
    /// Type requested by the caller.
    pub expected: &'static str,
}

/// Errors from resolving a predicate handle against an arena.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The handle was issued before the last reset of its arena.
    #[error("stale predicate handle #{index} from generation {handle_generation} (arena is at generation {arena_generation})")]
    StaleHandle {
        index: u32,
        handle_generation: u32,
        arena_generation: u32,
    },

    /// The handle was issued by a different arena.
    #[error("predicate handle #{index} belongs to arena {handle_arena}, not arena {arena}")]
    ForeignHandle {
        index: u32,
        handle_arena: u32,
        arena: u32,
    },
}
