//! Common types for confidence intervals

use std::fmt;
use survey_core::{math::distributions::normal, Error, Result};

/// A two-sided confidence interval around a point estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalResult {
    /// The point estimate (center of interval)
    pub point_estimate: f64,
    /// Standard error the interval was built from
    pub standard_error: f64,
    /// Lower bound of the interval
    pub lower_bound: f64,
    /// Upper bound of the interval
    pub upper_bound: f64,
    /// Coverage probability (e.g., 0.95 for 95% CI)
    pub coverage: f64,
}

impl IntervalResult {
    /// Create a new interval result
    pub fn new(
        point_estimate: f64,
        standard_error: f64,
        lower_bound: f64,
        upper_bound: f64,
        coverage: f64,
    ) -> Self {
        Self {
            point_estimate,
            standard_error,
            lower_bound,
            upper_bound,
            coverage,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &IntervalResult) -> bool {
        self.lower_bound <= other.upper_bound && other.lower_bound <= self.upper_bound
    }

    /// Whether a difference interval rules out "no difference"
    pub fn excludes_zero(&self) -> bool {
        !self.contains(0.0)
    }
}

impl fmt::Display for IntervalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.6}, {:.6}], estimate: {:.6}",
            self.coverage * 100.0,
            self.lower_bound,
            self.upper_bound,
            self.point_estimate
        )
    }
}

/// Coverage level with validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// Fails with `InvalidInput` unless `level` lies strictly inside (0, 1).
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_coverage(level));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Two-sided standard normal critical value for this level
    pub fn critical_value(&self) -> Result<f64> {
        normal::two_sided_critical_value(self.0)
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
