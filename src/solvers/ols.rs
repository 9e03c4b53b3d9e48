//! Ordinary least squares for one response and one predictor.

use faer::Col;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::core::{CompleteCases, DataTable, FittedModel, RegressionError};

/// Predictor spread below which the column is treated as constant.
const DEFAULT_SPREAD_TOLERANCE: f64 = 1e-10;

/// Ordinary least squares fitter for `response ~ predictor`.
///
/// With a single centered predictor the normal equations have a closed-form
/// solution, so no decomposition or iterative refinement is involved:
/// `b1 = Σ(xᵢ − x̄)(yᵢ − ȳ) / Σ(xᵢ − x̄)²` and `b0 = ȳ − b1·x̄`.
///
/// # Example
///
/// ```rust,ignore
/// use simplefit::{DataTable, OlsFitter};
///
/// let table = DataTable::new()
///     .with_column("ph", ph_values)?
///     .with_column("growth", growth_values)?;
///
/// let model = OlsFitter::new().fit(&table, "growth", "ph")?;
/// println!("R² = {:.4}", model.r_squared());
/// ```
#[derive(Debug, Clone)]
pub struct OlsFitter {
    spread_tolerance: f64,
}

impl Default for OlsFitter {
    fn default() -> Self {
        Self {
            spread_tolerance: DEFAULT_SPREAD_TOLERANCE,
        }
    }
}

impl OlsFitter {
    /// Create a fitter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spread tolerance used to detect a constant predictor.
    pub fn spread_tolerance(mut self, tolerance: f64) -> Self {
        self.spread_tolerance = tolerance;
        self
    }

    /// Fit `response ~ predictor` over the complete cases of the table.
    ///
    /// Rows where either value is missing are dropped first and recorded on
    /// the returned model. Fails if a column is absent, fewer than 3 complete
    /// observations remain, or the predictor has no spread.
    pub fn fit(
        &self,
        table: &DataTable,
        response: &str,
        predictor: &str,
    ) -> Result<FittedModel, RegressionError> {
        let y_raw = table.require_column(response)?;
        let x_raw = table.require_column(predictor)?;

        let (x, y, cases) = CompleteCases::extract(x_raw, y_raw);
        let n = x.nrows();

        // Two complete observations leave zero residual degrees of freedom.
        if n < 3 {
            return Err(RegressionError::InsufficientObservations { needed: 3, got: n });
        }

        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        for &v in x.iter() {
            x_min = x_min.min(v);
            x_max = x_max.max(v);
        }
        if x_max - x_min <= self.spread_tolerance {
            return Err(RegressionError::ConstantPredictor {
                name: predictor.to_string(),
            });
        }

        let n_f = n as f64;
        let x_mean: f64 = x.iter().sum::<f64>() / n_f;
        let y_mean: f64 = y.iter().sum::<f64>() / n_f;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for i in 0..n {
            let dx = x[i] - x_mean;
            sxx += dx * dx;
            sxy += dx * (y[i] - y_mean);
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        let fitted_values = Col::from_fn(n, |i| intercept + slope * x[i]);
        let residuals = Col::from_fn(n, |i| y[i] - fitted_values[i]);

        let rss: f64 = residuals.iter().map(|&e| e * e).sum();
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

        // TSS == 0 means the response never varies; R² is reported as 0 and
        // flagged undefined via FittedModel::r_squared_defined.
        let r_squared = if tss > 0.0 {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let df_resid = (n - 2) as f64;
        let mse = rss / df_resid;
        let rmse = mse.sqrt();

        let adj_r_squared = if tss > 0.0 {
            1.0 - (1.0 - r_squared) * (n_f - 1.0) / df_resid
        } else {
            f64::NAN
        };

        let ess = tss - rss;
        let f_statistic = if mse > 0.0 { ess / mse } else { f64::NAN };
        let f_pvalue = if f_statistic.is_finite() {
            let f_dist = FisherSnedecor::new(1.0, df_resid).ok();
            f_dist.map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
        } else {
            f64::NAN
        };

        let log_likelihood = if mse > 0.0 {
            -0.5 * n_f * (1.0 + (2.0 * std::f64::consts::PI).ln() + mse.ln())
        } else {
            f64::NAN
        };

        let k = 2.0; // intercept + slope
        let aic = 2.0 * k - 2.0 * log_likelihood;
        let aicc = if n_f - k - 1.0 > 0.0 {
            aic + 2.0 * k * (k + 1.0) / (n_f - k - 1.0)
        } else {
            f64::NAN
        };
        let bic = k * n_f.ln() - 2.0 * log_likelihood;

        Ok(FittedModel {
            response: response.to_string(),
            predictor: predictor.to_string(),
            intercept,
            slope,
            x,
            y,
            fitted_values,
            residuals,
            n_observations: n,
            x_mean,
            y_mean,
            sxx,
            rss,
            tss,
            r_squared,
            adj_r_squared,
            mse,
            rmse,
            f_statistic,
            f_pvalue,
            log_likelihood,
            aic,
            aicc,
            bic,
            cases,
        })
    }
}

/// Fit `response ~ predictor` with default settings.
pub fn fit(
    table: &DataTable,
    response: &str,
    predictor: &str,
) -> Result<FittedModel, RegressionError> {
    OlsFitter::new().fit(table, response, predictor)
}
