//! Normal-approximation confidence intervals from summary statistics

use crate::standard_error::{self, pool_standard_errors};
use crate::types::{ConfidenceLevel, IntervalResult};
use survey_core::{Error, Result, SampleSummary, SummaryKind};
use tracing::{debug, instrument};

/// Default coverage probability
pub const DEFAULT_COVERAGE: f64 = 0.95;

/// Interval estimator for proportions, means and their differences
///
/// The estimator is a plain value carrying the coverage level; every
/// method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntervalEstimator {
    level: ConfidenceLevel,
}

impl IntervalEstimator {
    /// Create an estimator with the given coverage level
    pub fn new(level: ConfidenceLevel) -> Self {
        Self { level }
    }

    /// Create an estimator from a raw coverage probability
    pub fn with_coverage(coverage: f64) -> Result<Self> {
        Ok(Self::new(ConfidenceLevel::new(coverage)?))
    }

    /// The configured coverage level
    pub fn level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Standard error of a sample proportion
    pub fn standard_error_proportion(&self, summary: SampleSummary) -> Result<f64> {
        standard_error::standard_error_proportion(summary)
    }

    /// Standard error of a sample mean
    pub fn standard_error_mean(&self, summary: SampleSummary) -> Result<f64> {
        standard_error::standard_error_mean(summary)
    }

    /// Pool two independent standard errors
    pub fn pool_standard_errors(&self, se_a: f64, se_b: f64) -> Result<f64> {
        pool_standard_errors(se_a, se_b)
    }

    /// Interval `point_estimate ± z * standard_error` at the configured level
    pub fn confidence_interval(
        &self,
        point_estimate: f64,
        standard_error: f64,
    ) -> Result<IntervalResult> {
        if point_estimate.is_nan() || point_estimate.is_infinite() {
            return Err(Error::non_finite("point estimate"));
        }
        if standard_error.is_nan() || standard_error.is_infinite() {
            return Err(Error::non_finite("standard error"));
        }
        if standard_error < 0.0 {
            return Err(Error::negative("Standard error", standard_error));
        }

        let critical_value = self.level.critical_value()?;
        let margin = critical_value * standard_error;
        debug!(
            "critical value {:.6} at {}, margin {:.6}",
            critical_value, self.level, margin
        );

        let lower = point_estimate - margin;
        let upper = point_estimate + margin;
        if !(margin.is_finite() && lower.is_finite() && upper.is_finite()) {
            return Err(Error::overflow("interval bound"));
        }

        Ok(IntervalResult::new(
            point_estimate,
            standard_error,
            lower,
            upper,
            self.level.value(),
        ))
    }

    /// Interval for a single group's statistic
    #[instrument(skip(self), fields(coverage = self.level.value()))]
    pub fn summary_interval(
        &self,
        summary: SampleSummary,
        kind: SummaryKind,
    ) -> Result<IntervalResult> {
        let se = standard_error::standard_error(summary, kind)?;
        debug!("{} standard error: {:.6}", kind, se);
        self.confidence_interval(summary.statistic, se)
    }

    /// Interval for `a.statistic - b.statistic` from two independent groups
    #[instrument(skip(self), fields(coverage = self.level.value()))]
    pub fn difference_interval(
        &self,
        a: SampleSummary,
        b: SampleSummary,
        kind: SummaryKind,
    ) -> Result<IntervalResult> {
        let se_a = standard_error::standard_error(a, kind)?;
        let se_b = standard_error::standard_error(b, kind)?;
        let pooled = pool_standard_errors(se_a, se_b)?;
        debug!(
            "{} standard errors: a={:.6}, b={:.6}, pooled={:.6}",
            kind, se_a, se_b, pooled
        );

        let difference = a.statistic - b.statistic;
        if difference.is_infinite() {
            return Err(Error::overflow("difference of group statistics"));
        }

        self.confidence_interval(difference, pooled)
    }
}

/// Interval `point_estimate ± z * standard_error` at the given coverage
///
/// # Example
/// ```rust
/// use survey_confidence::confidence_interval;
///
/// let ci = confidence_interval(0.2, 0.01, 0.95).unwrap();
/// assert!(ci.lower_bound < 0.2 && ci.upper_bound > 0.2);
/// ```
pub fn confidence_interval(
    point_estimate: f64,
    standard_error: f64,
    coverage: f64,
) -> Result<IntervalResult> {
    IntervalEstimator::with_coverage(coverage)?.confidence_interval(point_estimate, standard_error)
}

/// Interval for the difference of two independent group statistics
///
/// Computes each group's standard error according to `kind`, pools them
/// and centres the interval on `a.statistic - b.statistic`.
pub fn difference_interval(
    a: SampleSummary,
    b: SampleSummary,
    kind: SummaryKind,
    coverage: f64,
) -> Result<IntervalResult> {
    IntervalEstimator::with_coverage(coverage)?.difference_interval(a, b, kind)
}

/// Interval for a single group's proportion or mean
pub fn summary_interval(
    summary: SampleSummary,
    kind: SummaryKind,
    coverage: f64,
) -> Result<IntervalResult> {
    IntervalEstimator::with_coverage(coverage)?.summary_interval(summary, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_estimator() {
        let estimator = IntervalEstimator::default();
        assert_eq!(estimator.level().value(), DEFAULT_COVERAGE);
    }

    #[test]
    fn test_confidence_interval_bounds() {
        let ci = confidence_interval(10.0, 2.0, 0.95).unwrap();
        let z = 1.959963984540054;

        assert_abs_diff_eq!(ci.lower_bound, 10.0 - z * 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ci.upper_bound, 10.0 + z * 2.0, epsilon = 1e-9);
        assert_eq!(ci.point_estimate, 10.0);
        assert_eq!(ci.standard_error, 2.0);
        assert_eq!(ci.coverage, 0.95);
    }

    #[test]
    fn test_zero_standard_error_collapses_interval() {
        let ci = confidence_interval(0.5, 0.0, 0.99).unwrap();
        assert_eq!(ci.lower_bound, 0.5);
        assert_eq!(ci.upper_bound, 0.5);
        assert_eq!(ci.width(), 0.0);
    }

    #[test]
    fn test_confidence_levels() {
        let ci_90 = confidence_interval(0.0, 1.0, 0.90).unwrap();
        let ci_95 = confidence_interval(0.0, 1.0, 0.95).unwrap();
        let ci_99 = confidence_interval(0.0, 1.0, 0.99).unwrap();

        assert!(ci_90.width() < ci_95.width());
        assert!(ci_95.width() < ci_99.width());
    }

    #[test]
    fn test_confidence_interval_rejects_invalid_input() {
        assert!(confidence_interval(1.0, -0.1, 0.95).is_err());
        assert!(confidence_interval(1.0, 0.1, 0.0).is_err());
        assert!(confidence_interval(1.0, 0.1, 1.0).is_err());
        assert!(confidence_interval(f64::NAN, 0.1, 0.95).is_err());
        assert!(confidence_interval(1.0, f64::INFINITY, 0.95).is_err());
    }

    #[test]
    fn test_summary_interval() {
        let ci = summary_interval(SampleSummary::mean(100, 50.0, 10.0), SummaryKind::Mean, 0.95)
            .unwrap();
        assert_abs_diff_eq!(ci.standard_error, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ci.margin_of_error(), 1.959963984540054, epsilon = 1e-9);
        assert!(ci.contains(50.0));
    }

    #[test]
    fn test_difference_interval_orientation() {
        let a = SampleSummary::proportion(400, 0.6);
        let b = SampleSummary::proportion(400, 0.4);

        let ab = difference_interval(a, b, SummaryKind::Proportion, 0.95).unwrap();
        let ba = difference_interval(b, a, SummaryKind::Proportion, 0.95).unwrap();

        assert_abs_diff_eq!(ab.point_estimate, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.lower_bound, -ba.upper_bound, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.standard_error, ba.standard_error, epsilon = 1e-15);
        assert!(ab.excludes_zero());
    }

    #[test]
    fn test_huge_standard_error_is_rejected_not_infinite() {
        let err = confidence_interval(1.0, 1e308, 0.99).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("overflows"));

        // Just below the overflow threshold the bounds stay finite
        let ci = confidence_interval(0.0, 1e307, 0.95).unwrap();
        assert!(ci.lower_bound.is_finite() && ci.upper_bound.is_finite());
    }

    #[test]
    fn test_overflowing_difference_is_rejected() {
        let a = SampleSummary::mean(10, 1e308, 1.0);
        let b = SampleSummary::mean(10, -1e308, 1.0);

        let err = difference_interval(a, b, SummaryKind::Mean, 0.95).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("difference of group statistics"));
        assert!(!err.to_string().contains("NaN"));
    }

    #[test]
    fn test_difference_interval_propagates_group_errors() {
        let good = SampleSummary::mean(10, 1.0, 1.0);
        let bad = SampleSummary::mean(10, 1.0, -1.0);
        assert!(difference_interval(good, bad, SummaryKind::Mean, 0.95).is_err());
        assert!(difference_interval(bad, good, SummaryKind::Mean, 0.95).is_err());
    }
}
