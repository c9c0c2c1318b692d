//! Smoking-rate and BMI differences by sex in a health survey
//!
//! Run with `RUST_LOG=debug` to see the intermediate standard errors.

use survey_stats::{ConfidenceLevel, IntervalEstimator, SampleSummary, SummaryKind};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Survey Differences by Sex ===\n");

    let estimator = IntervalEstimator::default();

    // Example 1: proportion of current smokers
    println!("1. Smoking rate (male - female)");
    let female = SampleSummary::proportion(2972, 0.304845);
    let male = SampleSummary::proportion(2753, 0.513258);
    let ci = estimator.difference_interval(male, female, SummaryKind::Proportion)?;
    println!("  female: {}", female);
    println!("  male:   {}", male);
    println!("  {}", ci);
    println!("  standard error: {:.7}", ci.standard_error);

    // Example 2: mean body-mass index
    println!("\n2. BMI (female - male)");
    let female = SampleSummary::mean(2976, 29.939946, 7.753319);
    let male = SampleSummary::mean(2759, 28.778072, 6.252568);
    let ci = estimator.difference_interval(female, male, SummaryKind::Mean)?;
    println!("  female: {}", female);
    println!("  male:   {}", male);
    println!("  {}", ci);
    println!("  standard error: {:.6}", ci.standard_error);

    // Example 3: the same BMI difference at other coverage levels
    println!("\n3. BMI difference across coverage levels");
    for level in [ConfidenceLevel::NINETY, ConfidenceLevel::NINETY_FIVE, ConfidenceLevel::NINETY_NINE] {
        let ci = IntervalEstimator::new(level).difference_interval(female, male, SummaryKind::Mean)?;
        println!("  {}: width {:.6}", ci, ci.width());
    }

    Ok(())
}
