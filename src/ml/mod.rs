//! Tree-ensemble regressors used for price inference.
//!
//! Both families load from JSON exports and evaluate entirely in Rust.

pub mod catboost;
pub mod gradient_boosting;
mod handle;

pub use handle::{ModelHandle, ModelLoadError, Regressor};
