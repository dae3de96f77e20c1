//! Performance instrumentation for the pointer-event hot paths.
//!
//! A drag produces a move event burst (60+ per second), so the handlers
//! must stay well under the frame budget. This module provides RAII scoped
//! timers and a `profile_scope!` macro that compiles to nothing unless the
//! `profiling` feature is enabled.
//!
//! ## Usage
//!
//! ```ignore
//! use freedrag::profile_scope;
//!
//! fn pointer_moved() {
//!     profile_scope!("pointer_moved");
//!     // ... handler body ...
//! }
//! ```

use crate::constants::SLOW_HANDLER_WARN_MS;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that logs when a scope exceeds its threshold.
///
/// Emits a `trace!` with the elapsed time on every drop (profiling builds)
/// and a `warn!` when the threshold is exceeded.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    /// Timer with an explicit slow-scope threshold in milliseconds.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    /// Timer with the default hot-path threshold
    /// ([`SLOW_HANDLER_WARN_MS`]).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_HANDLER_WARN_MS)
    }

    /// Elapsed time so far in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        #[cfg(feature = "profiling")]
        trace!(name = self.name, elapsed_ms, "scope timing");
        if elapsed_ms > self.threshold_ms {
            warn!(
                name = self.name,
                elapsed_ms,
                threshold_ms = self.threshold_ms,
                "slow pointer-event scope"
            );
        }
    }
}
