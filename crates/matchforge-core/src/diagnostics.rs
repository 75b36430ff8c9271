//! Failure reporting.
//!
//! The engine itself only produces booleans. When a predicate or a type
//! check fails, [`report_failure`] formats a message and hands it to the
//! installed [`DiagnosticSink`]. Nothing is installed by default, so
//! failures are silent apart from a `debug` tracing event.
//!
//! A sink installed with [`with_scoped_sink`] takes precedence over the
//! global one for the current thread only.

use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn, Level};

/// Receives failure messages.
pub trait DiagnosticSink: Send + Sync {
    /// Called with the failed result and the formatted message.
    fn report(&self, result: bool, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(bool, &str) + Send + Sync,
{
    fn report(&self, result: bool, message: &str) {
        self(result, message)
    }
}

/// Captures a call stack for inclusion in failure messages.
pub trait TraceProvider: Send + Sync {
    fn capture(&self) -> String;
}

/// Trace provider backed by [`std::backtrace::Backtrace`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceProvider;

impl TraceProvider for BacktraceProvider {
    fn capture(&self) -> String {
        Backtrace::force_capture().to_string()
    }
}

/// Forwards failures to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, result: bool, message: &str) {
        warn!(event = "match_failed", result, message);
    }
}

/// Panics on the first failure.
///
/// Useful to stop a debugger at the failing check.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicSink;

impl DiagnosticSink for PanicSink {
    fn report(&self, _result: bool, message: &str) {
        panic!("match failed: {message}");
    }
}

static SINK: RwLock<Option<Arc<dyn DiagnosticSink>>> = RwLock::new(None);
static TRACE_PROVIDER: RwLock<Option<Arc<dyn TraceProvider>>> = RwLock::new(None);

thread_local! {
    static SCOPED_SINK: RefCell<Option<Arc<dyn DiagnosticSink>>> = const { RefCell::new(None) };
}

/// Installs the process-wide sink, replacing any previous one.
pub fn set_sink(sink: impl DiagnosticSink + 'static) {
    *SINK.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(sink));
}

/// Removes the process-wide sink.
pub fn clear_sink() {
    *SINK.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Installs the provider used to append a call stack to failure messages.
pub fn set_trace_provider(provider: impl TraceProvider + 'static) {
    *TRACE_PROVIDER.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(provider));
}

/// Stops appending call stacks to failure messages.
pub fn clear_trace_provider() {
    *TRACE_PROVIDER.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Returns true if a sink would receive failures on this thread.
pub fn has_sink() -> bool {
    current_sink().is_some()
}

/// Runs `f` with `sink` receiving this thread's failures.
///
/// The previous scoped sink is restored afterwards, even if `f` panics.
pub fn with_scoped_sink<R>(sink: impl DiagnosticSink + 'static, f: impl FnOnce() -> R) -> R {
    struct Restore(Option<Arc<dyn DiagnosticSink>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            SCOPED_SINK.with(|slot| *slot.borrow_mut() = previous);
        }
    }

    let previous = SCOPED_SINK.with(|slot| slot.borrow_mut().replace(Arc::new(sink)));
    let _restore = Restore(previous);
    f()
}

fn current_sink() -> Option<Arc<dyn DiagnosticSink>> {
    SCOPED_SINK
        .with(|slot| slot.borrow().clone())
        .or_else(|| SINK.read().unwrap_or_else(PoisonError::into_inner).clone())
}

fn current_trace_provider() -> Option<Arc<dyn TraceProvider>> {
    TRACE_PROVIDER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Reports `result` if it is a failure and returns it unchanged.
///
/// `message` is only evaluated when somebody listens: an installed sink or
/// a `debug`-level tracing subscriber.
///
/// # Example
///
/// ```
/// use matchforge_core::{decapsulate, report_failure, ValueBox};
///
/// fn is_42(value: &ValueBox) -> bool {
///     let Some(v) = decapsulate::<i32>(value) else {
///         return false;
///     };
///     report_failure(*v == 42, || format!("{v} is not fortytwo"))
/// }
///
/// assert!(is_42(&ValueBox::new(42)));
/// assert!(!is_42(&ValueBox::new(41)));
/// ```
pub fn report_failure<F>(result: bool, message: F) -> bool
where
    F: FnOnce() -> String,
{
    if result {
        return result;
    }

    let sink = current_sink();
    if sink.is_none() && !tracing::enabled!(Level::DEBUG) {
        return result;
    }

    let mut message = message();
    debug!(event = "predicate_failed", message = %message);

    if let Some(sink) = sink {
        if let Some(provider) = current_trace_provider() {
            message.push('\n');
            message.push_str(&provider.capture());
        }
        sink.report(result, &message);
    }

    result
}
