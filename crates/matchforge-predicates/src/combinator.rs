//! Logical combinators over a fixed list of sub-tests.
//!
//! Every sub-test is evaluated, even once the outcome is decided, so each
//! failing sub-test still reaches the diagnostic sink.

use matchforge_core::{report_failure, Predicate, PredicateArena, PredicateHandle, SubTest, ValueBox};
use smallvec::SmallVec;

/// How sub-test results are folded into one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregation {
    /// Every result is true.
    All,
    /// At least one result is true.
    Any,
    /// Exactly one result is true.
    One,
    /// No result is true.
    None,
}

impl Aggregation {
    /// Folds `results`.
    ///
    /// # Example
    ///
    /// ```
    /// use matchforge_predicates::Aggregation;
    ///
    /// assert!(Aggregation::One.aggregate(&[false, true]));
    /// assert!(!Aggregation::One.aggregate(&[true, true]));
    /// assert!(!Aggregation::One.aggregate(&[false, false]));
    /// ```
    pub fn aggregate(self, results: &[bool]) -> bool {
        let hits = results.iter().filter(|r| **r).count();
        match self {
            Self::All => hits == results.len(),
            Self::Any => hits > 0,
            Self::One => hits == 1,
            Self::None => hits == 0,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::All => "MatchAll",
            Self::Any => "MatchAny",
            Self::One => "MatchOne",
            Self::None => "MatchNone",
        }
    }
}

/// Aggregates `N` sub-tests. `N` must be at least one.
#[derive(Debug)]
pub struct MatchCombinator<const N: usize> {
    aggregation: Aggregation,
    tests: [SubTest; N],
}

impl<const N: usize> MatchCombinator<N> {
    /// Creates a combinator. An empty list is rejected at compile time.
    pub fn new(aggregation: Aggregation, tests: [SubTest; N]) -> Self {
        const { assert!(N > 0, "a combinator needs at least one sub-test") };
        Self { aggregation, tests }
    }

    #[inline]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }
}

impl<const N: usize> Predicate for MatchCombinator<N> {
    fn execute(&self, arena: &PredicateArena, value: &ValueBox) -> bool {
        let results: SmallVec<[bool; 8]> = self
            .tests
            .iter()
            .map(|test| test.evaluate(arena, value))
            .collect();

        report_failure(self.aggregation.aggregate(&results), || {
            format!(
                "Predicate {}() failed with sub-test results {:?}",
                self.aggregation.name(),
                results.as_slice()
            )
        })
    }

    fn nested(&self) -> Vec<PredicateHandle> {
        self.tests.iter().filter_map(SubTest::handle).collect()
    }
}
