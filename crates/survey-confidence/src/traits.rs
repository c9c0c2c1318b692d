//! Core traits for standard error estimation

use survey_core::{Result, SampleSummary, SummaryKind};

/// Standard error of a summary statistic
///
/// One implementation exists per [`SummaryKind`]; each validates the
/// summary against the invariants of its kind before computing anything.
pub trait StandardErrorEstimator {
    /// Calculate the standard error of `summary.statistic`
    fn standard_error(&self, summary: SampleSummary) -> Result<f64>;

    /// The kind of summary this estimator accepts
    fn kind(&self) -> SummaryKind;

    /// Human-readable name of the estimator
    fn name(&self) -> &'static str;
}
