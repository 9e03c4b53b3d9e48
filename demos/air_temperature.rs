//! # Air Temperature vs. Elevation
//!
//! Fits station air temperature against elevation to recover a local lapse
//! rate, then predicts temperatures for unsampled elevations, flagging the
//! queries that extrapolate beyond the sampled range.
//!
//! Run with: `cargo run --example air_temperature`

use simplefit::{fit, DataTable, IntervalType};

fn main() -> Result<(), simplefit::RegressionError> {
    println!("=== Air temperature vs. elevation ===\n");

    let table = DataTable::new()
        .with_column(
            "elevation_m",
            vec![
                95.0, 210.0, 340.0, 455.0, 580.0, 690.0, 810.0, 935.0, 1050.0, 1180.0, 1320.0,
                1460.0, 1575.0, 1700.0,
            ],
        )?
        .with_column(
            "temp_c",
            vec![
                16.4, 15.9, 14.8, 14.1, 13.4, 12.5, 12.0, 11.1, 10.3, 9.6, 8.5, 7.8, 7.1, 6.2,
            ],
        )?;

    let model = fit(&table, "temp_c", "elevation_m")?;

    println!(
        "temp_c = {:.3} {:+.5}·elevation_m   (lapse rate {:.2} °C/km)",
        model.intercept(),
        model.slope(),
        model.slope() * 1000.0
    );
    println!("R² = {:.4}, residual SE = {:.3} °C\n", model.r_squared(), model.rmse());

    println!("Coefficients (95% CI):");
    for row in model.coefficient_inference(0.95)? {
        println!(
            "  {:12} {:9.5}  se {:8.5}  t {:7.2}  p {:.2e}",
            row.term, row.estimate, row.std_error, row.t_statistic, row.p_value
        );
    }

    // Predictions at stations we never sampled, including two extrapolations.
    let queries = [50.0, 400.0, 1000.0, 1600.0, 2200.0];
    let (lo, hi) = model.predictor_range();

    println!("\nPredicted mean temperature (95% CI):");
    for p in model.predict_with_interval(&queries, IntervalType::Confidence, 0.95)? {
        let note = if p.x < lo || p.x > hi {
            "  (extrapolated)"
        } else {
            ""
        };
        println!(
            "  {:6.0} m  {:5.2} °C  [{:5.2}, {:5.2}]{}",
            p.x, p.fit, p.lower, p.upper, note
        );
    }

    println!("\nExpected range for a single new reading at 1000 m:");
    let single = model.predict_with_interval(&[1000.0], IntervalType::Prediction, 0.95)?;
    println!(
        "  {:5.2} °C  [{:5.2}, {:5.2}]",
        single[0].fit, single[0].lower, single[0].upper
    );

    Ok(())
}
