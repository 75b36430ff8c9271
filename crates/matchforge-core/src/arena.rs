//! Ownership store for predicates.
//!
//! Factories move predicates into a [`PredicateArena`] and get back a
//! [`PredicateHandle`]. Handles carry the arena id and the generation they
//! were issued in, so a handle that outlived [`PredicateArena::reset`] or
//! that belongs to another arena is detected instead of dereferenced.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{info, trace};

use crate::error::ArenaError;
use crate::predicate::Predicate;
use crate::value::ValueBox;

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(0);

/// A generation-checked reference to an arena-owned predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredicateHandle {
    arena: u32,
    index: u32,
    generation: u32,
}

impl PredicateHandle {
    /// Slot index inside the owning arena.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Arena generation the handle was issued in.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for PredicateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}:{}", self.index, self.arena, self.generation)
    }
}

/// Owns every predicate built through it until the next [`reset`](Self::reset).
///
/// Parameterless predicates taken in through [`own_cached`](Self::own_cached)
/// are kept once per predicate type and share the arena's lifetime.
pub struct PredicateArena {
    id: u32,
    generation: u32,
    predicates: Vec<Box<dyn Predicate>>,
    cached: HashMap<TypeId, PredicateHandle>,
}

impl PredicateArena {
    /// Creates an empty arena with a process-unique id.
    pub fn new() -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            predicates: Vec::new(),
            cached: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn at_generation(generation: u32) -> Self {
        Self {
            generation,
            ..Self::new()
        }
    }

    /// Takes ownership of `predicate` and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if `predicate` wraps a handle that is stale or was issued by
    /// another arena.
    pub fn own<P>(&mut self, predicate: P) -> PredicateHandle
    where
        P: Predicate + 'static,
    {
        for nested in predicate.nested() {
            if let Err(err) = self.resolve(nested) {
                panic!("cannot take a predicate wrapping an invalid handle: {err}");
            }
        }

        let Ok(index) = u32::try_from(self.predicates.len()) else {
            panic!("predicate arena #{} is full", self.id);
        };
        let handle = PredicateHandle {
            arena: self.id,
            index,
            generation: self.generation,
        };
        self.predicates.push(Box::new(predicate));

        trace!(
            event = "predicate_owned",
            handle = %handle,
            predicate = std::any::type_name::<P>(),
        );
        handle
    }

    /// Returns the shared instance of `P`, building it on first use.
    ///
    /// Meant for predicates without parameters, where every instance of the
    /// type behaves the same. The cache is cleared by [`reset`](Self::reset).
    pub fn own_cached<P, F>(&mut self, make: F) -> PredicateHandle
    where
        P: Predicate + 'static,
        F: FnOnce() -> P,
    {
        if let Some(handle) = self.cached.get(&TypeId::of::<P>()) {
            return *handle;
        }
        let handle = self.own(make());
        self.cached.insert(TypeId::of::<P>(), handle);
        handle
    }

    /// Drops every owned predicate. All handles issued so far become stale.
    ///
    /// # Panics
    ///
    /// Panics once the generation counter is exhausted, since a wrapped
    /// counter would revive handles from an earlier generation.
    pub fn reset(&mut self) {
        let Some(generation) = self.generation.checked_add(1) else {
            panic!("predicate arena #{} ran out of generations", self.id);
        };
        let released = self.predicates.len();
        self.predicates.clear();
        self.cached.clear();
        self.generation = generation;

        info!(
            event = "arena_reset",
            arena = self.id,
            released = released,
            generation = self.generation,
        );
    }

    /// Resolves `handle` to the predicate it refers to.
    pub fn resolve(&self, handle: PredicateHandle) -> Result<&dyn Predicate, ArenaError> {
        if handle.arena != self.id {
            return Err(ArenaError::ForeignHandle {
                index: handle.index,
                handle_arena: handle.arena,
                arena: self.id,
            });
        }
        let stale = || ArenaError::StaleHandle {
            index: handle.index,
            handle_generation: handle.generation,
            arena_generation: self.generation,
        };
        if handle.generation != self.generation {
            return Err(stale());
        }
        self.predicates
            .get(handle.index as usize)
            .map(|p| &**p)
            .ok_or_else(stale)
    }

    /// Returns true if `handle` can be evaluated by this arena.
    #[inline]
    pub fn contains(&self, handle: PredicateHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Runs the predicate behind `handle` against `value`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale or foreign. Use
    /// [`try_execute`](Self::try_execute) to get the error instead.
    pub fn execute(&self, handle: PredicateHandle, value: &ValueBox) -> bool {
        match self.resolve(handle) {
            Ok(predicate) => predicate.execute(self, value),
            Err(err) => panic!("{err}"),
        }
    }

    /// Runs the predicate behind `handle`, reporting an invalid handle as an error.
    pub fn try_execute(&self, handle: PredicateHandle, value: &ValueBox) -> Result<bool, ArenaError> {
        let predicate = self.resolve(handle)?;
        Ok(predicate.execute(self, value))
    }

    /// Number of owned predicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Number of resets so far.
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Default for PredicateArena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PredicateArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateArena")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("predicates", &self.predicates.len())
            .field("cached", &self.cached.len())
            .finish()
    }
}
