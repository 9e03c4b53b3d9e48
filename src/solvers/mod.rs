//! Model fitting.

mod ols;

pub use ols::{fit, OlsFitter};
