//! Closed-form standard errors and the pooling rule

use crate::traits::StandardErrorEstimator;
use survey_core::{Error, Result, SampleSummary, SummaryKind};

/// Standard error of a sample proportion, `sqrt(p (1 - p) / n)`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionStandardError;

impl StandardErrorEstimator for ProportionStandardError {
    fn standard_error(&self, summary: SampleSummary) -> Result<f64> {
        summary.validate(SummaryKind::Proportion)?;

        let p = summary.statistic;
        // All-or-nothing samples carry no sampling variance
        if p == 0.0 || p == 1.0 {
            return Ok(0.0);
        }
        Ok((p * (1.0 - p) / summary.count as f64).sqrt())
    }

    fn kind(&self) -> SummaryKind {
        SummaryKind::Proportion
    }

    fn name(&self) -> &'static str {
        "Proportion Standard Error"
    }
}

/// Standard error of a sample mean, `s / sqrt(n)`
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanStandardError;

impl StandardErrorEstimator for MeanStandardError {
    fn standard_error(&self, summary: SampleSummary) -> Result<f64> {
        summary.validate(SummaryKind::Mean)?;
        Ok(summary.dispersion / (summary.count as f64).sqrt())
    }

    fn kind(&self) -> SummaryKind {
        SummaryKind::Mean
    }

    fn name(&self) -> &'static str {
        "Mean Standard Error"
    }
}

/// The standard error estimator matching a summary kind
pub fn estimator_for(kind: SummaryKind) -> &'static dyn StandardErrorEstimator {
    match kind {
        SummaryKind::Proportion => &ProportionStandardError,
        SummaryKind::Mean => &MeanStandardError,
    }
}

/// Standard error of a sample proportion
///
/// Returns exactly `0.0` when the proportion is 0 or 1.
pub fn standard_error_proportion(summary: SampleSummary) -> Result<f64> {
    ProportionStandardError.standard_error(summary)
}

/// Standard error of a sample mean
pub fn standard_error_mean(summary: SampleSummary) -> Result<f64> {
    MeanStandardError.standard_error(summary)
}

/// Standard error of `summary.statistic` for the given kind
pub fn standard_error(summary: SampleSummary, kind: SummaryKind) -> Result<f64> {
    estimator_for(kind).standard_error(summary)
}

/// Combine two standard errors with `sqrt(se_a^2 + se_b^2)`
///
/// The pooling rule is only valid when the two estimates are independent
/// (e.g. computed from disjoint groups). Nothing in the values themselves
/// can reveal dependence, so this is the caller's responsibility.
pub fn pool_standard_errors(se_a: f64, se_b: f64) -> Result<f64> {
    for se in [se_a, se_b] {
        if se.is_nan() || se.is_infinite() {
            return Err(Error::non_finite("standard error"));
        }
        if se < 0.0 {
            return Err(Error::negative("Standard error", se));
        }
    }
    let pooled = se_a.hypot(se_b);
    if pooled.is_infinite() {
        return Err(Error::overflow("pooled standard error"));
    }
    Ok(pooled)
}
