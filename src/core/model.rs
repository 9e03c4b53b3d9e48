//! The fitted simple-regression model.

use faer::Col;

use crate::core::{CompleteCases, IntervalType, Prediction, RegressionError};
use crate::diagnostics::DiagnosticRow;
use crate::inference::CoefficientInference;

/// Result of fitting one response against one predictor by ordinary least
/// squares.
///
/// Created once by [`OlsFitter::fit`] and immutable thereafter: inference,
/// prediction, and diagnostics all read from it without touching it, so two
/// models may be consumed from different threads with no coordination.
///
/// [`OlsFitter::fit`]: crate::solvers::OlsFitter::fit
#[derive(Debug, Clone)]
pub struct FittedModel {
    pub(crate) response: String,
    pub(crate) predictor: String,

    pub(crate) intercept: f64,
    pub(crate) slope: f64,

    pub(crate) x: Col<f64>,
    pub(crate) y: Col<f64>,
    pub(crate) fitted_values: Col<f64>,
    pub(crate) residuals: Col<f64>,

    pub(crate) n_observations: usize,
    pub(crate) x_mean: f64,
    pub(crate) y_mean: f64,
    pub(crate) sxx: f64,

    pub(crate) rss: f64,
    pub(crate) tss: f64,
    pub(crate) r_squared: f64,
    pub(crate) adj_r_squared: f64,
    pub(crate) mse: f64,
    pub(crate) rmse: f64,
    pub(crate) f_statistic: f64,
    pub(crate) f_pvalue: f64,
    pub(crate) log_likelihood: f64,
    pub(crate) aic: f64,
    pub(crate) aicc: f64,
    pub(crate) bic: f64,

    pub(crate) cases: CompleteCases,
}

impl FittedModel {
    /// Name of the response column.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Name of the predictor column.
    pub fn predictor(&self) -> &str {
        &self.predictor
    }

    /// Intercept estimate b0.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Slope estimate b1.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Predictor values used for the fit (complete cases only).
    pub fn x(&self) -> &Col<f64> {
        &self.x
    }

    /// Response values used for the fit (complete cases only).
    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// Fitted values ŷᵢ = b0 + b1·xᵢ.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.fitted_values
    }

    /// Residuals eᵢ = yᵢ − ŷᵢ.
    pub fn residuals(&self) -> &Col<f64> {
        &self.residuals
    }

    /// Number of complete observations used.
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Residual degrees of freedom, n − 2.
    pub fn residual_df(&self) -> usize {
        self.n_observations - 2
    }

    /// Mean of the fitted predictor values.
    pub fn x_mean(&self) -> f64 {
        self.x_mean
    }

    /// Mean of the fitted response values.
    pub fn y_mean(&self) -> f64 {
        self.y_mean
    }

    /// Centered predictor sum of squares Σ(xᵢ − x̄)².
    pub fn sxx(&self) -> f64 {
        self.sxx
    }

    /// Residual sum of squares.
    pub fn rss(&self) -> f64 {
        self.rss
    }

    /// Total sum of squares.
    pub fn tss(&self) -> f64 {
        self.tss
    }

    /// Coefficient of determination, clamped to [0, 1].
    ///
    /// Reported as 0 when the response has zero variance; check
    /// [`r_squared_defined`](Self::r_squared_defined) to distinguish that
    /// case from a genuinely uninformative fit.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Whether R² is meaningful (TSS > 0).
    pub fn r_squared_defined(&self) -> bool {
        self.tss > 0.0
    }

    /// Adjusted R² (NaN when R² is undefined).
    pub fn adj_r_squared(&self) -> f64 {
        self.adj_r_squared
    }

    /// Mean squared error, RSS / (n − 2).
    pub fn mse(&self) -> f64 {
        self.mse
    }

    /// Residual standard error, √MSE.
    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    /// F-statistic for overall model significance (NaN for an exact fit).
    pub fn f_statistic(&self) -> f64 {
        self.f_statistic
    }

    /// P-value for the F-statistic.
    pub fn f_pvalue(&self) -> f64 {
        self.f_pvalue
    }

    /// Gaussian log-likelihood of the fit.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Akaike Information Criterion.
    pub fn aic(&self) -> f64 {
        self.aic
    }

    /// Corrected AIC for small samples.
    pub fn aicc(&self) -> f64 {
        self.aicc
    }

    /// Bayesian Information Criterion.
    pub fn bic(&self) -> f64 {
        self.bic
    }

    /// Bookkeeping for rows dropped as incomplete before the fit.
    pub fn complete_cases(&self) -> &CompleteCases {
        &self.cases
    }

    /// Observed predictor range (min, max) over the fitting sample.
    ///
    /// Queries outside this range are extrapolations; prediction never
    /// rejects them, so callers wanting to flag extrapolated values compare
    /// against this range.
    pub fn predictor_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in self.x.iter() {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Residuals expanded to the original table length, NaN at rows that
    /// were dropped as incomplete.
    pub fn residuals_expanded(&self) -> Col<f64> {
        self.cases.expand(&self.residuals)
    }

    /// Fitted values expanded to the original table length, NaN at rows that
    /// were dropped as incomplete.
    pub fn fitted_expanded(&self) -> Col<f64> {
        self.cases.expand(&self.fitted_values)
    }

    /// Standard errors, t-statistics, p-values, and confidence intervals for
    /// the intercept and slope.
    pub fn coefficient_inference(
        &self,
        level: f64,
    ) -> Result<Vec<CoefficientInference>, RegressionError> {
        crate::inference::coefficient_inference(self, level)
    }

    /// Point predictions for a set of predictor values.
    pub fn predict(&self, x_values: &[f64]) -> Col<f64> {
        crate::inference::predict(self, x_values)
    }

    /// Predictions with confidence or prediction intervals.
    pub fn predict_with_interval(
        &self,
        x_values: &[f64],
        interval: IntervalType,
        level: f64,
    ) -> Result<Vec<Prediction>, RegressionError> {
        crate::inference::predict_with_interval(self, x_values, interval, level)
    }

    /// Per-observation diagnostics in fitting-sample order.
    pub fn diagnostics(&self) -> Result<Vec<DiagnosticRow>, RegressionError> {
        crate::diagnostics::diagnose(self)
    }
}
