//! Common test utilities and data generators.

use simplefit::DataTable;

/// The textbook five-point sample: x = 1..5, y = [2, 4, 5, 4, 5].
///
/// Fitting y ~ x gives b0 = 2.2, b1 = 0.6, R² = 0.6, s = √0.8 exactly.
pub fn classic_table() -> DataTable {
    DataTable::new()
        .with_column("x", vec![1.0, 2.0, 3.0, 4.0, 5.0])
        .expect("columns are well formed")
        .with_column("y", vec![2.0, 4.0, 5.0, 4.0, 5.0])
        .expect("columns are well formed")
}

/// Generate a noisy linear table: y = intercept + slope·x + noise.
///
/// Deterministic "random" noise for reproducibility.
pub fn noisy_table(n: usize, intercept: f64, slope: f64, noise_std: f64, seed: u64) -> DataTable {
    let mut rng_state = seed;
    let mut next_rand = move || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| intercept + slope * xi + noise_std * next_rand())
        .collect();

    DataTable::new()
        .with_column("x", x)
        .expect("columns are well formed")
        .with_column("y", y)
        .expect("columns are well formed")
}
