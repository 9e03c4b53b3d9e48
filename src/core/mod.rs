//! Core types for regression analysis.

mod error;
mod missing;
mod model;
mod prediction;
mod table;

pub use error::RegressionError;
pub use missing::CompleteCases;
pub use model::FittedModel;
pub use prediction::{IntervalType, Prediction};
pub use table::DataTable;
