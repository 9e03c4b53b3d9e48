//! Named-column tabular container.
//!
//! A [`DataTable`] holds an ordered set of named `f64` columns of equal
//! length. `NaN` is the designated missing marker; the [`with_optional_column`]
//! constructor maps `Option<f64>` onto it so callers never encode missingness
//! with a numeric sentinel.
//!
//! [`with_optional_column`]: DataTable::with_optional_column

use faer::Col;

use crate::core::RegressionError;

#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Col<f64>,
}

/// An in-memory table of named numeric columns, paired row-wise.
///
/// The first column added fixes the row count; every later column must match
/// it. Column order is preserved and names are unique.
///
/// # Example
///
/// ```rust,ignore
/// use simplefit::DataTable;
///
/// let table = DataTable::new()
///     .with_column("elevation", vec![120.0, 450.0, 980.0])?
///     .with_optional_column("temperature", vec![Some(14.2), None, Some(8.1)])?;
///
/// assert_eq!(table.n_rows(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<Column>,
}

impl DataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (0 for an empty table).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.nrows())
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Add a column, consuming and returning the table for chaining.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, RegressionError> {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Add a column where `None` marks a missing value.
    pub fn with_optional_column(
        self,
        name: impl Into<String>,
        values: Vec<Option<f64>>,
    ) -> Result<Self, RegressionError> {
        let mapped = values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect();
        self.with_column(name, mapped)
    }

    /// Add a column in place.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), RegressionError> {
        let name = name.into();

        if self.columns.iter().any(|c| c.name == name) {
            return Err(RegressionError::DuplicateColumn { name });
        }

        if !self.columns.is_empty() && values.len() != self.n_rows() {
            return Err(RegressionError::LengthMismatch {
                name,
                expected: self.n_rows(),
                got: values.len(),
            });
        }

        let values = Col::from_fn(values.len(), |i| values[i]);
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Col<f64>> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.values)
    }

    /// Look up a column by name, failing with [`RegressionError::ColumnNotFound`].
    pub fn require_column(&self, name: &str) -> Result<&Col<f64>, RegressionError> {
        self.column(name).ok_or_else(|| RegressionError::ColumnNotFound {
            name: name.to_string(),
        })
    }

    /// Check whether a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
