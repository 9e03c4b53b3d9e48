//! Complete-case extraction for missing values.
//!
//! A row enters the fit only when both the response and the predictor are
//! present; `NaN` marks a missing value. The extraction records which rows
//! were dropped so fit outputs can be expanded back to the original row
//! order, mirroring R's `na.exclude` bookkeeping.

use faer::Col;

/// Record of which rows survived complete-case extraction for one fit.
#[derive(Debug, Clone)]
pub struct CompleteCases {
    /// Row count before extraction.
    pub n_original: usize,

    /// Row count after extraction.
    pub n_clean: usize,

    /// Mask over the original rows (true = row had a missing value).
    pub missing_mask: Vec<bool>,

    /// Original indices of the rows that were kept.
    pub kept_indices: Vec<usize>,

    /// Number of rows removed.
    pub n_removed: usize,
}

impl CompleteCases {
    /// Drop rows where either value is missing, returning the clean pair and
    /// the bookkeeping record.
    pub(crate) fn extract(x: &Col<f64>, y: &Col<f64>) -> (Col<f64>, Col<f64>, CompleteCases) {
        let n = x.nrows();

        let missing_mask: Vec<bool> = (0..n).map(|i| x[i].is_nan() || y[i].is_nan()).collect();
        let kept_indices: Vec<usize> = missing_mask
            .iter()
            .enumerate()
            .filter_map(|(i, &missing)| (!missing).then_some(i))
            .collect();

        let n_clean = kept_indices.len();
        let x_clean = Col::from_fn(n_clean, |i| x[kept_indices[i]]);
        let y_clean = Col::from_fn(n_clean, |i| y[kept_indices[i]]);

        let cases = CompleteCases {
            n_original: n,
            n_clean,
            n_removed: n - n_clean,
            missing_mask,
            kept_indices,
        };

        (x_clean, y_clean, cases)
    }

    /// Check whether any rows were removed.
    pub fn has_removed(&self) -> bool {
        self.n_removed > 0
    }

    /// Expand a clean-length vector to original length, padding removed
    /// positions with NaN.
    ///
    /// Lets callers align residuals or fitted values with their source rows:
    /// with rows 2 and 3 removed, `[r0, r1, r4]` expands to
    /// `[r0, r1, NaN, NaN, r4]`.
    pub fn expand(&self, clean_values: &Col<f64>) -> Col<f64> {
        if !self.has_removed() {
            return clean_values.clone();
        }

        let mut expanded = Col::zeros(self.n_original);
        let mut clean_idx = 0;

        for (orig_idx, &missing) in self.missing_mask.iter().enumerate() {
            if missing {
                expanded[orig_idx] = f64::NAN;
            } else {
                expanded[orig_idx] = clean_values[clean_idx];
                clean_idx += 1;
            }
        }

        expanded
    }
}
