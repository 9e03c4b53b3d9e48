//! Statistical inference (standard errors, p-values, confidence intervals).

mod coefficient;
mod prediction;

pub use coefficient::{coefficient_inference, CoefficientInference};
pub use prediction::{predict, predict_with_interval};

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::core::RegressionError;

/// Reject confidence levels outside the open interval (0, 1).
pub(crate) fn check_level(level: f64) -> Result<(), RegressionError> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(RegressionError::InvalidConfidenceLevel(level))
    }
}

/// Two-sided critical value t*(df, (1 + level) / 2).
pub(crate) fn t_critical(df: f64, level: f64) -> f64 {
    let t_dist = StudentsT::new(0.0, 1.0, df).expect("valid t-distribution parameters");
    t_dist.inverse_cdf((1.0 + level) / 2.0)
}

/// Two-sided p-value for a t-statistic with the given degrees of freedom.
pub(crate) fn two_sided_p(t: f64, df: f64) -> f64 {
    if !t.is_finite() {
        return f64::NAN;
    }
    let t_dist = StudentsT::new(0.0, 1.0, df).expect("valid t-distribution parameters");
    2.0 * (1.0 - t_dist.cdf(t.abs()))
}
