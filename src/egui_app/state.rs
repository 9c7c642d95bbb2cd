//! Shared state types for the dashboard UI.

mod form;
mod importance;
mod selection;
mod status;

pub use form::*;
pub use importance::*;
pub use selection::*;
pub use status::*;

use crate::inference::PredictionResult;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub selection: SelectionState,
    pub form: FormState,
    /// Result of the last explicit prediction; cleared when inputs or model change.
    pub prediction: Option<PredictionResult>,
    pub importance: ImportanceState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            selection: SelectionState::default(),
            form: FormState::default(),
            prediction: None,
            importance: ImportanceState::default(),
        }
    }
}
