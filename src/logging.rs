//! Tracing subscriber setup.
//!
//! Filter comes from `RUST_LOG`, defaulting to `info`. Logs go to stderr so
//! the binary's stdout stays machine-readable.

use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALISED: OnceCell<()> = OnceCell::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    INITIALISED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);
        // Another subscriber may already be set (e.g. by a host application)
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}
