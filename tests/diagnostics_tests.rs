//! Diagnostics integration tests.

mod common;

use approx::assert_relative_eq;
use simplefit::diagnostics::{
    cooks_distance, high_leverage_points, influential_cooks, leverage, residual_outliers,
    standardized_residuals,
};
use simplefit::{diagnose, fit, DataTable};

// ============================================================================
// Leverage Tests
// ============================================================================

#[test]
fn test_classic_sample_leverage() {
    let model = fit(&common::classic_table(), "y", "x").expect("fit should succeed");
    let lev = leverage(&model);

    // h_i = 1/5 + (x_i − 3)²/10
    let expected = [0.6, 0.3, 0.2, 0.3, 0.6];
    for (i, &want) in expected.iter().enumerate() {
        assert_relative_eq!(lev[i], want, epsilon = 1e-12);
    }

    let sum: f64 = lev.iter().sum();
    assert_relative_eq!(sum, 2.0, epsilon = 1e-12);
}

#[test]
fn test_high_leverage_detection() {
    let mut x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    x[19] = 80.0;
    let y: Vec<f64> = x.iter().map(|&v| 0.5 + 1.5 * v + (v * 0.2).cos()).collect();

    let table = DataTable::new()
        .with_column("x", x)
        .unwrap()
        .with_column("y", y)
        .unwrap();
    let model = fit(&table, "y", "x").expect("fit should succeed");

    let high = high_leverage_points(&leverage(&model), None);
    assert!(high.contains(&19), "the outlying x should be high leverage");
}

// ============================================================================
// Standardized Residual Tests
// ============================================================================

#[test]
fn test_classic_sample_standardized_residuals() {
    let model = fit(&common::classic_table(), "y", "x").expect("fit should succeed");
    let lev = leverage(&model);
    let std_resid = standardized_residuals(model.residuals(), &lev, model.mse());

    // e / (s·√(1 − h)) with s = √0.8
    let expected = [-1.414214, 0.801784, 1.25, -0.801784, -0.353553];
    for (i, &want) in expected.iter().enumerate() {
        assert_relative_eq!(std_resid[i], want, epsilon = 1e-5);
    }
}

#[test]
fn test_outlier_flagging() {
    let mut y: Vec<f64> = (0..25).map(|i| 1.0 + 0.5 * i as f64).collect();
    y[12] += 40.0; // gross outlier
    let table = DataTable::new()
        .with_column("x", (0..25).map(|i| i as f64).collect())
        .unwrap()
        .with_column("y", y)
        .unwrap();

    let model = fit(&table, "y", "x").expect("fit should succeed");
    let rows = diagnose(&model).unwrap();
    let std_resid = standardized_residuals(model.residuals(), &leverage(&model), model.mse());

    let outliers = residual_outliers(&std_resid, 3.0);
    assert_eq!(outliers, vec![12]);
    assert!(rows[12].std_residual > 3.0);
}

// ============================================================================
// Influence Tests
// ============================================================================

#[test]
fn test_cooks_distance_flags_influential_point() {
    let mut x: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let mut y: Vec<f64> = x.iter().map(|&v| 2.0 + 0.5 * v + (v * 0.7).sin() * 0.2).collect();
    x[19] = 60.0;
    y[19] = 0.0; // far off the line, far out in x

    let table = DataTable::new()
        .with_column("x", x)
        .unwrap()
        .with_column("y", y)
        .unwrap();
    let model = fit(&table, "y", "x").expect("fit should succeed");

    let cooks = cooks_distance(model.residuals(), &leverage(&model), model.mse());
    let influential = influential_cooks(&cooks, None);

    assert!(influential.contains(&19));
}

// ============================================================================
// Full Diagnostic Rows
// ============================================================================

#[test]
fn test_diagnostic_rows_classic_sample() {
    let model = fit(&common::classic_table(), "y", "x").expect("fit should succeed");
    let rows = diagnose(&model).unwrap();

    assert_eq!(rows.len(), 5);

    // Third observation: x = 3, fitted 4.0, residual 1.0, h = 0.2
    let row = &rows[2];
    assert_relative_eq!(row.x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(row.fitted, 4.0, epsilon = 1e-12);
    assert_relative_eq!(row.residual, 1.0, epsilon = 1e-12);
    assert_relative_eq!(row.leverage, 0.2, epsilon = 1e-12);
    assert_relative_eq!(row.std_residual, 1.25, epsilon = 1e-12);
    // D = (1/(2·0.8)) · (0.2/0.64)
    assert_relative_eq!(row.cooks_distance, 0.1953125, epsilon = 1e-10);
}

#[test]
fn test_diagnostic_rows_preserve_order() {
    let table = common::noisy_table(40, 1.0, -0.3, 0.5, 21);
    let model = fit(&table, "y", "x").expect("fit should succeed");
    let rows = diagnose(&model).unwrap();

    assert_eq!(rows.len(), model.n_observations());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.x, model.x()[i]);
        assert_eq!(row.fitted, model.fitted_values()[i]);
        assert_eq!(row.residual, model.residuals()[i]);
    }
}

#[test]
fn test_exact_fit_diagnostics_are_clean() {
    let table = DataTable::new()
        .with_column("x", vec![1.0, 2.0, 3.0, 4.0, 5.0])
        .unwrap()
        .with_column("y", vec![2.0, 4.0, 6.0, 8.0, 10.0])
        .unwrap();
    let model = fit(&table, "y", "x").expect("fit should succeed");

    let rows = diagnose(&model).unwrap();
    for row in rows {
        assert_eq!(row.residual, 0.0);
        assert_eq!(row.std_residual, 0.0);
        assert!(row.leverage < 1.0);
    }
}
