//! Performance instrumentation for the pointer-event hot path.
//!
//! Pointer handlers run on every move event of every contact, so they must stay
//! well under a frame. This module provides:
//!
//! - **Scoped timers**: RAII-style timing for a handler or block
//! - **Conditional compilation**: `profile_scope!` compiles to nothing unless
//!   the `profiling` feature is enabled
//! - **Threshold logging**: `measure_and_log` for occasional slow work such as
//!   writing the progress file
//!
//! ```ignore
//! fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
//!     profile_scope!("handle_pointer_move");
//!     // ...
//! }
//! ```

use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Budget for a single pointer event, in milliseconds.
pub const POINTER_EVENT_BUDGET_MS: f64 = 1.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::POINTER_EVENT_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// A scoped timer that reports its duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        trace!(operation = self.name, elapsed_ms = format!("{:.3}", elapsed_ms), "[PERF]");

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Measure execution time and log if it exceeds the threshold.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}
