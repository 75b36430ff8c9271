//! A diagnostic sink that records what it receives.

use std::sync::{Arc, Mutex, PoisonError};

use matchforge_core::DiagnosticSink;

/// Collects reported messages. Clones share the same buffer.
///
/// # Example
///
/// ```
/// use matchforge_core::diagnostics::with_scoped_sink;
/// use matchforge_core::ValueBox;
/// use matchforge_test::fixtures::is_42;
/// use matchforge_test::RecordingSink;
///
/// let sink = RecordingSink::new();
/// with_scoped_sink(sink.clone(), || is_42(&ValueBox::new(41)));
/// assert_eq!(sink.messages(), vec!["41 is not fortytwo".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every message reported so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of messages reported so far.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, _result: bool, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
