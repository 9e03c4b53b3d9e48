//! Coefficient inference calculations.

use crate::core::{FittedModel, RegressionError};
use crate::inference::{check_level, t_critical, two_sided_p};

/// Inference statistics for a single model term.
///
/// Derived entirely from the fitted model; recomputable at any time and at
/// any confidence level. The fields are exactly what a coefficient-table
/// renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientInference {
    /// Term label: `"(Intercept)"` or the predictor column name.
    pub term: String,
    /// Point estimate.
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// t-statistic, estimate / standard error.
    pub t_statistic: f64,
    /// Two-sided p-value against the t-distribution with n − 2 df.
    pub p_value: f64,
    /// Lower confidence bound.
    pub ci_lower: f64,
    /// Upper confidence bound.
    pub ci_upper: f64,
}

/// Compute standard errors, t-statistics, p-values, and confidence intervals
/// for the intercept and slope.
///
/// `se(b1) = s / √Sxx` and `se(b0) = s·√(1/n + x̄²/Sxx)`, with intervals
/// `coef ± t*(n−2, (1+level)/2)·se`.
///
/// An exact fit has `s = 0`; its t-statistics and p-values are NaN and the
/// intervals collapse onto the estimates.
pub fn coefficient_inference(
    model: &FittedModel,
    level: f64,
) -> Result<Vec<CoefficientInference>, RegressionError> {
    check_level(level)?;

    let df = model.residual_df() as f64;
    let n = model.n_observations() as f64;
    let s = model.rmse();

    let se_slope = s / model.sxx().sqrt();
    let se_intercept = s * (1.0 / n + model.x_mean().powi(2) / model.sxx()).sqrt();
    let t_crit = t_critical(df, level);

    let terms = [
        ("(Intercept)".to_string(), model.intercept(), se_intercept),
        (model.predictor().to_string(), model.slope(), se_slope),
    ];

    let rows = terms
        .into_iter()
        .map(|(term, estimate, std_error)| {
            let t_statistic = if std_error > 0.0 {
                estimate / std_error
            } else {
                f64::NAN
            };
            let margin = t_crit * std_error;

            CoefficientInference {
                term,
                estimate,
                std_error,
                t_statistic,
                p_value: two_sided_p(t_statistic, df),
                ci_lower: estimate - margin,
                ci_upper: estimate + margin,
            }
        })
        .collect();

    Ok(rows)
}
