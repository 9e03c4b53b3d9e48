//! Per-observation diagnostics for residual and leverage panels.
//!
//! [`diagnose`] assembles everything a diagnostic-plot layer needs: fitted
//! values and raw residuals for residuals-vs-fitted panels, standardized
//! residuals for scale panels, and leverage with Cook's distance for
//! influence panels.
//!
//! # Example
//!
//! ```rust,ignore
//! use simplefit::diagnostics::{diagnose, high_leverage_points, leverage};
//!
//! let rows = diagnose(&model)?;
//! for row in &rows {
//!     println!("{:.3} {:.3} {:.3}", row.fitted, row.std_residual, row.leverage);
//! }
//!
//! let flagged = high_leverage_points(&leverage(&model), None);
//! ```

mod influence;
mod leverage;
mod residuals;

pub use influence::{cooks_distance, influential_cooks};
pub use leverage::{high_leverage_points, leverage};
pub use residuals::{residual_outliers, standardized_residuals};

use crate::core::{FittedModel, RegressionError};

/// Margin below 1.0 at which a leverage value counts as degenerate.
const LEVERAGE_LIMIT: f64 = 1.0 - 1e-12;

/// Per-observation diagnostic values, in fitting-sample order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticRow {
    /// Predictor value.
    pub x: f64,
    /// Fitted value ŷᵢ.
    pub fitted: f64,
    /// Raw residual eᵢ.
    pub residual: f64,
    /// Standardized residual eᵢ / (s·√(1 − hᵢ)).
    pub std_residual: f64,
    /// Leverage (hat value) hᵢ.
    pub leverage: f64,
    /// Cook's distance Dᵢ.
    pub cooks_distance: f64,
}

/// Compute the full diagnostic set for a fitted model.
///
/// Fails with [`RegressionError::DegenerateLeverage`] if any observation's
/// leverage is numerically 1, which cannot happen for n ≥ 3 with a
/// non-constant predictor.
pub fn diagnose(model: &FittedModel) -> Result<Vec<DiagnosticRow>, RegressionError> {
    let lev = leverage(model);

    for (i, &h) in lev.iter().enumerate() {
        if h >= LEVERAGE_LIMIT {
            return Err(RegressionError::DegenerateLeverage {
                index: i,
                leverage: h,
            });
        }
    }

    let std_resid = standardized_residuals(model.residuals(), &lev, model.mse());
    let cooks = cooks_distance(model.residuals(), &lev, model.mse());

    let rows = (0..model.n_observations())
        .map(|i| DiagnosticRow {
            x: model.x()[i],
            fitted: model.fitted_values()[i],
            residual: model.residuals()[i],
            std_residual: std_resid[i],
            leverage: lev[i],
            cooks_distance: cooks[i],
        })
        .collect();

    Ok(rows)
}
