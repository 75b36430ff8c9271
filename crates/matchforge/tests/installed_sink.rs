//! Installing diagnostics from configuration.
//!
//! Kept in its own test binary: installation replaces the process-wide sink.

use std::panic::{catch_unwind, AssertUnwindSafe};

use matchforge::prelude::*;
use matchforge::{diagnostics, DiagnosticMode, MatchConfig};
use matchforge_test::RecordingSink;

#[test]
fn test_install_and_clear() {
    let mut arena = PredicateArena::new();
    let eq = arena.is_equal(42);

    MatchConfig::new()
        .with_mode(DiagnosticMode::Log)
        .install()
        .unwrap();
    assert!(diagnostics::has_sink());
    assert!(!arena.execute(eq, &encapsulate(24)));

    // A scoped sink still wins over the installed one.
    let sink = RecordingSink::new();
    diagnostics::with_scoped_sink(sink.clone(), || {
        assert!(!arena.execute(eq, &encapsulate(24)));
    });
    assert_eq!(sink.len(), 1);

    MatchConfig::new().install().unwrap();
    assert!(!diagnostics::has_sink());

    let panicking = MatchConfig::new().with_mode(DiagnosticMode::Panic);
    panicking.install().unwrap();
    let outcome = catch_unwind(AssertUnwindSafe(|| arena.execute(eq, &encapsulate(24))));
    assert!(outcome.is_err());
    assert!(arena.execute(eq, &encapsulate(42)));

    MatchConfig::new().install().unwrap();
}
