//! # Abalone Growth vs. Water pH
//!
//! Fits shell growth against water pH for a small abalone rearing trial,
//! prints the coefficient table, sweeps a mean-response band over the
//! observed pH range, and lists the observations a diagnostic panel would
//! highlight.
//!
//! Run with: `cargo run --example abalone`

use simplefit::diagnostics::{high_leverage_points, leverage};
use simplefit::{fit, DataTable, IntervalType};

fn main() -> Result<(), simplefit::RegressionError> {
    println!("=== Abalone growth vs. water pH ===\n");

    // One tank lost its growth measurement; the row drops out of the fit.
    let table = DataTable::new()
        .with_column(
            "ph",
            vec![
                7.62, 7.70, 7.78, 7.85, 7.91, 7.98, 8.02, 8.05, 8.08, 8.11, 8.15, 8.20,
            ],
        )?
        .with_optional_column(
            "growth_mm",
            vec![
                Some(1.05),
                Some(1.21),
                Some(1.19),
                None,
                Some(1.44),
                Some(1.58),
                Some(1.66),
                Some(1.59),
                Some(1.78),
                Some(1.70),
                Some(1.85),
                Some(1.98),
            ],
        )?;

    let model = fit(&table, "growth_mm", "ph")?;

    println!(
        "n = {} complete tanks ({} dropped as incomplete)",
        model.n_observations(),
        model.complete_cases().n_removed
    );
    println!("growth_mm = {:.3} + {:.3}·ph", model.intercept(), model.slope());
    println!(
        "R² = {:.4} (adjusted {:.4}), residual SE = {:.4}\n",
        model.r_squared(),
        model.adj_r_squared(),
        model.rmse()
    );

    println!("Coefficients (95% CI):");
    for row in model.coefficient_inference(0.95)? {
        println!(
            "  {:12} {:8.4}  se {:6.4}  t {:6.2}  p {:.4}  [{:7.4}, {:7.4}]",
            row.term, row.estimate, row.std_error, row.t_statistic, row.p_value, row.ci_lower,
            row.ci_upper
        );
    }

    println!("\nMean-response band over the observed pH range:");
    let (lo, hi) = model.predictor_range();
    let grid: Vec<f64> = (0..7).map(|i| lo + (hi - lo) * i as f64 / 6.0).collect();
    for p in model.predict_with_interval(&grid, IntervalType::Confidence, 0.95)? {
        println!(
            "  ph {:5.2}  fit {:5.3}  [{:5.3}, {:5.3}]",
            p.x, p.fit, p.lower, p.upper
        );
    }

    println!("\nDiagnostics:");
    let rows = model.diagnostics()?;
    for (i, row) in rows.iter().enumerate() {
        println!(
            "  #{:<2} fitted {:5.3}  resid {:7.3}  std {:6.2}  leverage {:.3}  cook {:.3}",
            i, row.fitted, row.residual, row.std_residual, row.leverage, row.cooks_distance
        );
    }

    let flagged = high_leverage_points(&leverage(&model), None);
    if flagged.is_empty() {
        println!("\nNo high-leverage tanks.");
    } else {
        println!("\nHigh-leverage tanks: {:?}", flagged);
    }

    Ok(())
}
