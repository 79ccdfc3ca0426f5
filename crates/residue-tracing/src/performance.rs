//! Performance-focused tracing utilities
//!
//! RAII spans that measure wall-clock duration and log it on drop, with an
//! optional microsecond threshold to keep fast paths quiet.

use std::time::Instant;

/// RAII guard that measures span duration and conditionally logs based on threshold.
///
/// The span is timed from creation and logged when dropped, but only if the
/// duration exceeds the optional threshold.
///
/// # Example
///
/// ```rust
/// use residue_tracing::performance::PerformanceSpan;
///
/// {
///     let _span = PerformanceSpan::new("expensive_operation", Some(1000));
///     // ... operation code ...
/// } // Logged only if duration > 1000μs
/// ```
pub struct PerformanceSpan {
    name: String,
    threshold_us: Option<u64>,
    start: Instant,
    span: tracing::Span,
}

impl PerformanceSpan {
    /// Create a new performance span with optional threshold filtering.
    ///
    /// `threshold_us` is the minimum duration in microseconds to log;
    /// `None` always logs.
    pub fn new(name: impl Into<String>, threshold_us: Option<u64>) -> Self {
        let name = name.into();
        let span = tracing::debug_span!("perf", name = %name);
        Self {
            name,
            threshold_us,
            start: Instant::now(),
            span,
        }
    }

    /// Create a performance span attached to an explicit `tracing` span,
    /// typically one carrying extra fields. Used by the `perf_span!` macro.
    pub fn with_span(name: impl Into<String>, span: tracing::Span, threshold_us: Option<u64>) -> Self {
        Self {
            name: name.into(),
            threshold_us,
            start: Instant::now(),
            span,
        }
    }

    /// Elapsed time since the span was created.
    pub fn elapsed_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl Drop for PerformanceSpan {
    fn drop(&mut self) {
        let duration_us = self.elapsed_us();
        if let Some(threshold) = self.threshold_us {
            if duration_us < threshold {
                return;
            }
        }
        tracing::debug!(
            parent: &self.span,
            name = %self.name,
            duration_us,
            "perf span complete"
        );
    }
}
