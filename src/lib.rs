//! Library exports for reuse in benchmarks and tests.
/// Static explanations attached to known feature names.
pub mod annotations;
/// Application directory resolution.
pub mod app_dirs;
/// Dashboard controller, state and egui renderer.
pub mod egui_app;
/// Input form layout and values.
pub mod form;
/// Feature-importance ranking.
pub mod importance;
/// Prediction pipeline from inputs to price.
pub mod inference;
/// Tracing setup.
pub mod logging;
/// Tree-ensemble regressors loaded from JSON exports.
pub mod ml;
/// Model selection and loading.
pub mod registry;
/// Ordered feature names of a model.
pub mod schema;
