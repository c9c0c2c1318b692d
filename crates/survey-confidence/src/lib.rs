//! Confidence intervals for survey proportions and means
//!
//! This crate turns per-group summary statistics into normal-approximation
//! confidence intervals:
//!
//! - **Standard errors**: `sqrt(p (1 - p) / n)` for proportions, `s / sqrt(n)`
//!   for means
//! - **Pooling**: `sqrt(se_a^2 + se_b^2)` for two independent groups
//! - **Intervals**: `estimate ± z * se`, with `z` taken from the inverse
//!   standard normal CDF so any coverage in (0, 1) is supported
//!
//! # Examples
//!
//! ## Difference of two proportions
//!
//! ```rust
//! use survey_confidence::{difference_interval, SampleSummary, SummaryKind};
//!
//! let male = SampleSummary::proportion(2753, 0.513258);
//! let female = SampleSummary::proportion(2972, 0.304845);
//!
//! let ci = difference_interval(male, female, SummaryKind::Proportion, 0.95).unwrap();
//! println!("{}", ci);
//! assert!(ci.excludes_zero());
//! ```
//!
//! ## Reusing a configured estimator
//!
//! ```rust
//! use survey_confidence::{ConfidenceLevel, IntervalEstimator, SampleSummary, SummaryKind};
//!
//! let estimator = IntervalEstimator::new(ConfidenceLevel::NINETY_NINE);
//! let bmi = SampleSummary::mean(2976, 29.939946, 7.753319);
//! let ci = estimator.summary_interval(bmi, SummaryKind::Mean).unwrap();
//! assert!(ci.contains(29.939946));
//! ```

mod estimator;
mod standard_error;
mod traits;
mod types;

// Re-exports
pub use estimator::{
    confidence_interval, difference_interval, summary_interval, IntervalEstimator,
    DEFAULT_COVERAGE,
};
pub use standard_error::{
    estimator_for, pool_standard_errors, standard_error, standard_error_mean,
    standard_error_proportion, MeanStandardError, ProportionStandardError,
};
pub use survey_core::{Error, Result, SampleSummary, SummaryKind};
pub use traits::StandardErrorEstimator;
pub use types::{ConfidenceLevel, IntervalResult};
