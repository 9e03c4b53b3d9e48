//! Interval estimation for model predictions.

use faer::Col;

use crate::core::{FittedModel, IntervalType, Prediction, RegressionError};
use crate::inference::{check_level, t_critical};

/// Point predictions b0 + b1·x₀ for a set of predictor values.
pub fn predict(model: &FittedModel, x_values: &[f64]) -> Col<f64> {
    Col::from_fn(x_values.len(), |i| {
        model.intercept() + model.slope() * x_values[i]
    })
}

/// Predictions with confidence or prediction intervals, one entry per query
/// value in query order.
///
/// For each x₀ the leverage of the query point is
/// `h₀ = 1/n + (x₀ − x̄)²/Sxx`; the standard error is `s·√h₀` for the mean
/// response and `s·√(1 + h₀)` for a new observation, with bounds
/// `ŷ₀ ± t*(n−2, (1+level)/2)·se`.
///
/// Queries outside the observed predictor range are permitted; compare
/// against [`FittedModel::predictor_range`] to flag extrapolations.
pub fn predict_with_interval(
    model: &FittedModel,
    x_values: &[f64],
    interval: IntervalType,
    level: f64,
) -> Result<Vec<Prediction>, RegressionError> {
    check_level(level)?;
    if x_values.is_empty() {
        return Err(RegressionError::EmptyQuery);
    }

    let n = model.n_observations() as f64;
    let df = model.residual_df() as f64;
    let mse = model.mse();
    let t_crit = t_critical(df, level);

    let predictions = x_values
        .iter()
        .map(|&x0| {
            let fit = model.intercept() + model.slope() * x0;
            let h0 = 1.0 / n + (x0 - model.x_mean()).powi(2) / model.sxx();

            let variance = match interval {
                IntervalType::Confidence => mse * h0,
                IntervalType::Prediction => mse * (1.0 + h0),
            };
            let se = variance.sqrt();
            let margin = t_crit * se;

            Prediction {
                x: x0,
                fit,
                se,
                lower: fit - margin,
                upper: fit + margin,
            }
        })
        .collect();

    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DataTable;
    use crate::solvers::fit;

    fn model() -> FittedModel {
        let table = DataTable::new()
            .with_column("x", vec![1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap()
            .with_column("y", vec![2.0, 4.0, 5.0, 4.0, 5.0])
            .unwrap();
        fit(&table, "y", "x").expect("model should fit")
    }

    #[test]
    fn test_point_predictions() {
        let preds = predict(&model(), &[0.0, 10.0]);
        assert!((preds[0] - 2.2).abs() < 1e-12);
        assert!((preds[1] - 8.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_query_rejected() {
        let err = predict_with_interval(&model(), &[], IntervalType::Confidence, 0.95).unwrap_err();
        assert!(matches!(err, RegressionError::EmptyQuery));
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = predict_with_interval(&model(), &[3.0], IntervalType::Confidence, 1.0).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidConfidenceLevel(_)));
    }

    #[test]
    fn test_entries_follow_query_order() {
        let preds =
            predict_with_interval(&model(), &[5.0, 1.0, 3.0], IntervalType::Confidence, 0.95)
                .unwrap();
        assert_eq!(preds.len(), 3);
        assert_eq!(preds[0].x, 5.0);
        assert_eq!(preds[1].x, 1.0);
        assert_eq!(preds[2].x, 3.0);
        for p in &preds {
            assert!(p.lower <= p.fit && p.fit <= p.upper);
        }
    }

    #[test]
    fn test_extrapolation_permitted() {
        let m = model();
        let (lo, hi) = m.predictor_range();
        assert_eq!((lo, hi), (1.0, 5.0));

        let preds =
            predict_with_interval(&m, &[100.0], IntervalType::Confidence, 0.95).unwrap();
        assert!(preds[0].fit.is_finite());
        assert!(preds[0].upper > preds[0].lower);
    }
}
