//! Per-group summary statistics
//!
//! A [`SampleSummary`] is the only view of the data the interval routines
//! ever see: a count, a point statistic and a dispersion. Callers aggregate
//! their raw columns into summaries; the constructors below cover the two
//! aggregations survey work needs (a tally of yes/no answers and the
//! mean/standard deviation of a measurement).

use crate::{Error, Result};
use std::fmt;

/// Which kind of statistic a summary carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryKind {
    /// Sample proportion of binomial data
    Proportion,
    /// Sample mean of continuous data
    Mean,
}

impl SummaryKind {
    /// Get the name of the summary kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Proportion => "proportion",
            Self::Mean => "mean",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary statistics for a single group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of observations
    pub count: usize,
    /// Sample proportion or sample mean
    pub statistic: f64,
    /// Sample standard deviation (implied by the proportion for binomial data)
    pub dispersion: f64,
}

impl SampleSummary {
    /// Create a summary from its raw parts without validation
    pub fn new(count: usize, statistic: f64, dispersion: f64) -> Self {
        Self {
            count,
            statistic,
            dispersion,
        }
    }

    /// Summary of binomial data with sample proportion `p`
    ///
    /// The dispersion is the per-observation standard deviation
    /// `sqrt(p (1 - p))`; it is NaN when `p` lies outside [0, 1].
    pub fn proportion(count: usize, p: f64) -> Self {
        Self::new(count, p, (p * (1.0 - p)).sqrt())
    }

    /// Summary of continuous data with sample mean and standard deviation
    pub fn mean(count: usize, mean: f64, std_dev: f64) -> Self {
        Self::new(count, mean, std_dev)
    }

    /// Proportion summary from a tally of `successes` out of `count`
    pub fn from_successes(successes: usize, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::empty_sample());
        }
        if successes > count {
            return Err(Error::InvalidInput(format!(
                "Successes ({successes}) exceed the sample count ({count})"
            )));
        }
        Ok(Self::proportion(count, successes as f64 / count as f64))
    }

    /// Proportion summary from a column of yes/no answers
    pub fn from_indicators(indicators: &[bool]) -> Result<Self> {
        let successes = indicators.iter().filter(|&&x| x).count();
        Self::from_successes(successes, indicators.len())
    }

    /// Mean summary from raw observations
    ///
    /// Uses the `n - 1` denominator for the standard deviation; a single
    /// observation has dispersion 0.
    pub fn from_observations(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::empty_sample());
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("sample"));
        }

        let n = sample.len();
        let mean = sample.iter().sum::<f64>() / n as f64;
        let std_dev = if n < 2 {
            0.0
        } else {
            let ss = sample.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
            (ss / (n - 1) as f64).sqrt()
        };

        Ok(Self::mean(n, mean, std_dev))
    }

    /// Check the invariants that apply to a summary of the given kind
    pub fn validate(&self, kind: SummaryKind) -> Result<()> {
        if self.count == 0 {
            return Err(Error::empty_sample());
        }
        if !self.statistic.is_finite() {
            return Err(Error::non_finite("summary statistic"));
        }
        match kind {
            SummaryKind::Proportion => {
                if !(0.0..=1.0).contains(&self.statistic) {
                    return Err(Error::invalid_proportion(self.statistic));
                }
            }
            SummaryKind::Mean => {
                if self.dispersion.is_nan() || self.dispersion.is_infinite() {
                    return Err(Error::non_finite("summary dispersion"));
                }
                if self.dispersion < 0.0 {
                    return Err(Error::negative("Dispersion", self.dispersion));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, statistic={:.6}, dispersion={:.6}",
            self.count, self.statistic, self.dispersion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_proportion_dispersion() {
        let s = SampleSummary::proportion(100, 0.25);
        assert_eq!(s.count, 100);
        assert_relative_eq!(s.dispersion, (0.25f64 * 0.75).sqrt());

        assert_eq!(SampleSummary::proportion(10, 0.0).dispersion, 0.0);
        assert_eq!(SampleSummary::proportion(10, 1.0).dispersion, 0.0);
    }

    #[test]
    fn test_from_successes() {
        let s = SampleSummary::from_successes(906, 2972).unwrap();
        assert_eq!(s.count, 2972);
        assert_relative_eq!(s.statistic, 906.0 / 2972.0);

        assert!(SampleSummary::from_successes(0, 0).unwrap_err().is_invalid_input());
        assert!(SampleSummary::from_successes(11, 10).is_err());
    }

    #[test]
    fn test_from_indicators() {
        let answers = [true, false, false, true, true, false, false, false];
        let s = SampleSummary::from_indicators(&answers).unwrap();
        assert_eq!(s.count, 8);
        assert_relative_eq!(s.statistic, 0.375);

        assert!(SampleSummary::from_indicators(&[]).is_err());
    }

    #[test]
    fn test_from_observations() {
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = SampleSummary::from_observations(&sample).unwrap();
        assert_eq!(s.count, 8);
        assert_relative_eq!(s.statistic, 5.0);
        assert_relative_eq!(s.dispersion, 2.138089935299395, epsilon = 1e-12);
    }

    #[test]
    fn test_from_observations_single_value() {
        let s = SampleSummary::from_observations(&[42.0]).unwrap();
        assert_eq!(s.statistic, 42.0);
        assert_eq!(s.dispersion, 0.0);
    }

    #[test]
    fn test_from_observations_rejects_bad_input() {
        assert!(SampleSummary::from_observations(&[]).is_err());
        assert!(SampleSummary::from_observations(&[1.0, f64::NAN]).is_err());
        assert!(SampleSummary::from_observations(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(SampleSummary::proportion(10, 0.5).validate(SummaryKind::Proportion).is_ok());
        assert!(SampleSummary::proportion(0, 0.5).validate(SummaryKind::Proportion).is_err());
        assert!(SampleSummary::proportion(10, 1.5).validate(SummaryKind::Proportion).is_err());
        assert!(SampleSummary::proportion(10, -0.1).validate(SummaryKind::Proportion).is_err());

        assert!(SampleSummary::mean(10, 3.0, 1.0).validate(SummaryKind::Mean).is_ok());
        assert!(SampleSummary::mean(10, 3.0, -1.0).validate(SummaryKind::Mean).is_err());
        assert!(SampleSummary::mean(0, 3.0, 1.0).validate(SummaryKind::Mean).is_err());
        assert!(SampleSummary::mean(10, f64::NAN, 1.0).validate(SummaryKind::Mean).is_err());
        // Means are unbounded
        assert!(SampleSummary::mean(10, 1.5, 0.2).validate(SummaryKind::Mean).is_ok());
    }

    #[test]
    fn test_display() {
        let s = SampleSummary::mean(3, 1.5, 0.25);
        assert_eq!(format!("{}", s), "n=3, statistic=1.500000, dispersion=0.250000");
        assert_eq!(format!("{}", SummaryKind::Proportion), "proportion");
    }
}
