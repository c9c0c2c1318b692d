//! Mathematical utilities for survey statistical analysis
//!
//! This module provides the distribution functions needed for
//! normal-approximation confidence intervals.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use crate::{Error, Result};
        use statrs::distribution::{ContinuousCDF, Normal};

        /// The standard normal distribution N(0, 1)
        pub fn standard() -> Result<Normal> {
            Normal::new(0.0, 1.0).map_err(|e| {
                Error::Computation(format!("Failed to create normal distribution: {}", e))
            })
        }

        /// Inverse CDF (quantile function) of the standard normal distribution
        ///
        /// `p` must lie strictly inside (0, 1); the quantile is infinite at
        /// the endpoints.
        pub fn quantile(p: f64) -> Result<f64> {
            if !(p > 0.0 && p < 1.0) {
                return Err(Error::InvalidInput(format!(
                    "Probability {p} must be in (0, 1)"
                )));
            }
            Ok(standard()?.inverse_cdf(p))
        }

        /// Two-sided critical value `z` such that `P(|Z| <= z) = coverage`
        ///
        /// Evaluated through the lower tail, which keeps precision for
        /// coverage levels very close to 1.
        pub fn two_sided_critical_value(coverage: f64) -> Result<f64> {
            if !(coverage > 0.0 && coverage < 1.0) {
                return Err(Error::invalid_coverage(coverage));
            }
            let tail = (1.0 - coverage) / 2.0;
            let z = -quantile(tail)?;
            if !z.is_finite() {
                return Err(Error::invalid_coverage(coverage));
            }
            Ok(z)
        }

    }
}
