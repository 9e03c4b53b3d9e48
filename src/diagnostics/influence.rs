//! Influence measures.

use faer::Col;

/// Compute Cook's distance for each observation.
///
/// Dᵢ = (eᵢ² / (p·MSE)) · (hᵢ / (1 − hᵢ)²) with p = 2 parameters. Measures
/// how much the fitted line moves when observation i is deleted.
///
/// Observations with Dᵢ > 4/n (or Dᵢ > 1) are typically considered
/// influential.
pub fn cooks_distance(residuals: &Col<f64>, leverage: &Col<f64>, mse: f64) -> Col<f64> {
    let n = residuals.nrows();

    if mse <= 0.0 || !mse.is_finite() {
        return Col::from_fn(n, |_| f64::NAN);
    }

    Col::from_fn(n, |i| {
        let e = residuals[i];
        let one_minus_h = (1.0 - leverage[i]).max(1e-14);

        let d = (e * e / (2.0 * mse)) * (leverage[i] / (one_minus_h * one_minus_h));
        if d.is_finite() {
            d.max(0.0)
        } else {
            f64::NAN
        }
    })
}

/// Indices of observations with Cook's distance above the threshold.
///
/// The default threshold is 4/n.
pub fn influential_cooks(cooks: &Col<f64>, threshold: Option<f64>) -> Vec<usize> {
    let n = cooks.nrows();
    let cutoff = threshold.unwrap_or(4.0 / n as f64);

    cooks
        .iter()
        .enumerate()
        .filter(|(_, &d)| d > cutoff)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooks_distance_non_negative() {
        let residuals = Col::from_fn(10, |i| i as f64 - 4.5);
        let leverage = Col::from_fn(10, |_| 0.2);

        let cooks = cooks_distance(&residuals, &leverage, 2.0);
        for &d in cooks.iter() {
            assert!(d >= 0.0);
        }
    }

    #[test]
    fn test_zero_mse_yields_nan() {
        let residuals = Col::zeros(4);
        let leverage = Col::from_fn(4, |_| 0.5);

        let cooks = cooks_distance(&residuals, &leverage, 0.0);
        for &d in cooks.iter() {
            assert!(d.is_nan());
        }
    }

    #[test]
    fn test_influential_detection() {
        let cooks = Col::from_fn(10, |i| if i == 2 { 1.5 } else { 0.01 });
        assert_eq!(influential_cooks(&cooks, None), vec![2]);
    }
}
