//! Standardized residuals.

use faer::Col;

/// Compute standardized residuals eᵢ / (s·√(1 − hᵢ)).
///
/// The denominator accounts for the varying variance residuals inherit from
/// leverage. An exact fit has `s = 0`; its zero residuals standardize to
/// zero rather than NaN.
pub fn standardized_residuals(residuals: &Col<f64>, leverage: &Col<f64>, mse: f64) -> Col<f64> {
    let n = residuals.nrows();

    if mse <= 0.0 || !mse.is_finite() {
        return Col::from_fn(n, |i| {
            if residuals[i].abs() < 1e-14 {
                0.0
            } else {
                f64::NAN
            }
        });
    }

    let s = mse.sqrt();
    Col::from_fn(n, |i| {
        let denominator = s * (1.0 - leverage[i]).max(1e-14).sqrt();
        residuals[i] / denominator
    })
}

/// Indices of observations with |standardized residual| above the threshold.
///
/// Common thresholds are 2 or 3.
pub fn residual_outliers(standardized: &Col<f64>, threshold: f64) -> Vec<usize> {
    standardized
        .iter()
        .enumerate()
        .filter(|(_, &r)| r.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
