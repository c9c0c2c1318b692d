//! Core types for survey statistical analysis
//!
//! This crate provides the pieces shared by every survey-stats crate:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`SampleSummary`] / [`SummaryKind`]: per-group summary statistics
//! - [`math::distributions::normal`]: standard normal quantiles and
//!   critical values
//!
//! # Example
//!
//! ```rust
//! use survey_core::{SampleSummary, SummaryKind};
//!
//! let bmi = [24.1, 31.7, 27.3, 22.9, 35.2];
//! let summary = SampleSummary::from_observations(&bmi).unwrap();
//! assert_eq!(summary.count, 5);
//! assert!(summary.validate(SummaryKind::Mean).is_ok());
//! ```

pub mod error;
pub mod math;
pub mod summary;

pub use error::{Error, Result};
pub use summary::{SampleSummary, SummaryKind};
