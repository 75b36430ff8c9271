//! Console logging for MatchForge.
//!
//! Sets up a `tracing` subscriber so failures reported through
//! [`TracingSink`](crate::diagnostics::TracingSink) and the engine's own
//! events reach stderr.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// is honoured; without it MatchForge logs at `info`. Does nothing if
/// another global subscriber is already set.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("matchforge=info,matchforge_core=info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}
