//! Obey / Resist wrappers.

use matchforge_core::{report_failure, Predicate, PredicateArena, PredicateHandle, SubTest, ValueBox};

/// Which outcome of the wrapped sub-test counts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Succeeds when the sub-test returns true.
    Obey,
    /// Succeeds when the sub-test returns false.
    Resist,
}

impl Polarity {
    #[inline]
    fn expected(self) -> bool {
        matches!(self, Self::Obey)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Obey => "Obey",
            Self::Resist => "Resist",
        }
    }
}

/// Passes through or inverts a single sub-test.
#[derive(Debug)]
pub struct PolarityPredicate {
    polarity: Polarity,
    test: SubTest,
}

impl PolarityPredicate {
    pub fn new(polarity: Polarity, test: SubTest) -> Self {
        Self { polarity, test }
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl Predicate for PolarityPredicate {
    fn execute(&self, arena: &PredicateArena, value: &ValueBox) -> bool {
        let outcome = self.test.evaluate(arena, value);
        report_failure(outcome == self.polarity.expected(), || {
            format!(
                "Predicate {}() failed: the sub-test returned {} for a value of type '{}'",
                self.polarity.name(),
                outcome,
                value.type_name()
            )
        })
    }

    fn nested(&self) -> Vec<PredicateHandle> {
        self.test.handle().into_iter().collect()
    }
}
