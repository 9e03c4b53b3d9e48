//! Prediction types for interval estimation.

/// Type of interval to compute for predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalType {
    /// Confidence interval for the mean response E[Y|X=x₀].
    /// Narrower, accounts only for uncertainty in the coefficient estimates.
    #[default]
    Confidence,

    /// Prediction interval for a new observation Y|X=x₀.
    /// Wider, also accounts for residual variance.
    Prediction,
}

/// One predicted value with its standard error and interval bounds.
///
/// Entries are independent of each other; a prediction sweep yields one
/// `Prediction` per query value, in query order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// The queried predictor value.
    pub x: f64,
    /// Point prediction b0 + b1·x.
    pub fit: f64,
    /// Standard error of the prediction.
    pub se: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
}

impl Prediction {
    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
