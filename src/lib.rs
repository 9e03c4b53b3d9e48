//! Simple linear regression with full statistical inference.
//!
//! This library fits one response column against one predictor column from a
//! [`DataTable`] and exposes everything a report or plotting layer needs:
//! coefficients, standard errors, t-statistics, p-values, confidence
//! intervals, mean-response and new-observation intervals, and
//! per-observation diagnostics. It renders no text and draws no pixels; it
//! produces the numbers those collaborators consume.
//!
//! # Example
//!
//! ```rust,ignore
//! use simplefit::prelude::*;
//!
//! let table = DataTable::new()
//!     .with_column("ph", vec![7.8, 7.9, 8.0, 8.1, 8.2, 8.3])?
//!     .with_column("growth", vec![2.1, 1.9, 1.6, 1.4, 1.1, 0.9])?;
//!
//! // Fit growth ~ ph
//! let model = fit(&table, "growth", "ph")?;
//! println!("R² = {:.4}", model.r_squared());
//!
//! // Coefficient table
//! for row in model.coefficient_inference(0.95)? {
//!     println!("{:12} {:8.4} (p = {:.4})", row.term, row.estimate, row.p_value);
//! }
//!
//! // Mean-response band over a grid
//! let band = model.predict_with_interval(&[7.8, 8.0, 8.2], IntervalType::Confidence, 0.95)?;
//!
//! // Residual / leverage panels
//! let panels = model.diagnostics()?;
//! ```

pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CompleteCases, DataTable, FittedModel, IntervalType, Prediction, RegressionError,
    };
    pub use crate::diagnostics::{diagnose, DiagnosticRow};
    pub use crate::inference::{coefficient_inference, CoefficientInference};
    pub use crate::solvers::{fit, OlsFitter};
}

pub use crate::core::{
    CompleteCases, DataTable, FittedModel, IntervalType, Prediction, RegressionError,
};
pub use crate::diagnostics::{diagnose, DiagnosticRow};
pub use crate::inference::{coefficient_inference, CoefficientInference};
pub use crate::solvers::{fit, OlsFitter};
