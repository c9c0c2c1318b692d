//! Survey statistics toolkit
//!
//! Umbrella crate re-exporting the survey-stats workspace:
//!
//! - [`survey_core`]: summary statistics, errors and normal-distribution math
//! - [`survey_confidence`]: standard errors and confidence intervals

pub use survey_confidence;
pub use survey_core;

pub use survey_confidence::{
    confidence_interval, difference_interval, summary_interval, ConfidenceLevel,
    IntervalEstimator, IntervalResult, DEFAULT_COVERAGE,
};
pub use survey_core::{Error, Result, SampleSummary, SummaryKind};
