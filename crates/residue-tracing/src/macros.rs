//! Convenience macros for performance tracing

/// Create a performance span with automatic field capture.
///
/// Returns a [`crate::performance::PerformanceSpan`] guard that logs the
/// measured duration when dropped.
///
/// # Syntax
///
/// ```text
/// perf_span!("name")
/// perf_span!("name", field1 = value1)
/// perf_span!("name", field1 = value1, field2 = value2, ...)
/// ```
///
/// # Example
///
/// ```rust
/// use residue_tracing::perf_span;
///
/// {
///     let _span = perf_span!("mod_exp", workers = 4);
///     // ... operation code ...
/// } // Automatically logs duration with fields
/// ```
#[macro_export]
macro_rules! perf_span {
    ($name:expr) => {
        $crate::performance::PerformanceSpan::new($name, None)
    };
    ($name:expr, $($rest:tt)+) => {
        $crate::performance::PerformanceSpan::with_span(
            $name,
            tracing::debug_span!("perf", name = $name, $($rest)+),
            None,
        )
    };
}
