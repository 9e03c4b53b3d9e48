//! Leverage (hat diagonal) for the single-predictor design.

use faer::Col;

use crate::core::FittedModel;

/// Compute leverage values hᵢ = 1/n + (xᵢ − x̄)²/Sxx.
///
/// Leverage measures how strongly an observation's predictor value pulls its
/// own fitted value.
///
/// # Properties
/// - hᵢ ∈ [1/n, 1]
/// - Σ hᵢ = 2 (intercept + slope)
pub fn leverage(model: &FittedModel) -> Col<f64> {
    let n = model.n_observations() as f64;
    let x = model.x();
    Col::from_fn(model.n_observations(), |i| {
        1.0 / n + (x[i] - model.x_mean()).powi(2) / model.sxx()
    })
}

/// Indices of observations with leverage above the threshold.
///
/// The default threshold is 2p/n with p = 2 parameters.
pub fn high_leverage_points(leverage: &Col<f64>, threshold: Option<f64>) -> Vec<usize> {
    let n = leverage.nrows();
    let cutoff = threshold.unwrap_or(4.0 / n as f64);

    leverage
        .iter()
        .enumerate()
        .filter(|(_, &h)| h > cutoff)
        .map(|(i, _)| i)
        .collect()
}
