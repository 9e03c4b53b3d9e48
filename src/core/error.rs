//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised while building tables, fitting a model, or querying one.
///
/// Every variant is a deterministic input-validation failure detected at the
/// call site; nothing is retried and there is no partial-result mode.
#[derive(Debug, Error)]
pub enum RegressionError {
    /// The named column does not exist in the table.
    #[error("column not found: '{name}'")]
    ColumnNotFound { name: String },

    /// A column's length does not match the table's row count.
    #[error("column '{name}' has {got} rows but the table has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A column with the same name already exists in the table.
    #[error("duplicate column: '{name}'")]
    DuplicateColumn { name: String },

    /// Too few complete (non-missing, paired) observations remain to fit.
    #[error("insufficient observations: need at least {needed} complete cases, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    /// The predictor column has no variation, so the slope is undefined.
    #[error("predictor '{name}' is constant; slope is undefined")]
    ConstantPredictor { name: String },

    /// An observation's leverage reached 1, leaving no residual variance.
    #[error("leverage {leverage} at observation {index} leaves no residual variance")]
    DegenerateLeverage { index: usize, leverage: f64 },

    /// Confidence level outside the open interval (0, 1).
    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),

    /// A prediction was requested for an empty set of query points.
    #[error("no query values supplied for prediction")]
    EmptyQuery,
}
