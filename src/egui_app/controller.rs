//! Bridges the model registry and inference pipeline to the egui UI.

use std::sync::Arc;

use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::importance;
use crate::inference;
use crate::ml::ModelHandle;
use crate::registry::{ModelRegistry, PropertyType, Segment};
use crate::schema::schema_of;

/// Maintains dashboard state for the current model selection.
pub struct DashboardController {
    pub ui: UiState,
    registry: Arc<ModelRegistry>,
}

impl DashboardController {
    /// Create a controller and activate the default model.
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            registry,
        };
        controller.activate_model();
        controller
    }

    /// Model matching the sidebar selection.
    pub fn active_model(&self) -> &ModelHandle {
        let selection = self.ui.selection;
        self.registry
            .get(selection.property, selection.active_segment())
    }

    pub fn select_property(&mut self, property: PropertyType) {
        if self.ui.selection.property == property {
            return;
        }
        self.ui.selection.property = property;
        self.activate_model();
    }

    pub fn select_segment(&mut self, segment: Segment) {
        if self.ui.selection.segment == segment {
            return;
        }
        self.ui.selection.segment = segment;
        if self.ui.selection.property.has_segments() {
            self.activate_model();
        }
    }

    /// Rebuild schema, inputs and importance report for the selected model.
    fn activate_model(&mut self) {
        let handle = self.active_model();
        let title = handle.title().to_string();
        let schema = schema_of(handle);
        let table = importance::report(handle, &schema);
        tracing::info!("Active model: {title} ({} features)", schema.len());
        self.ui.form = FormState::for_schema(title.clone(), schema);
        self.ui.importance.table = table;
        self.ui.importance.sort = TableSort::default();
        self.ui.prediction = None;
        self.set_status(format!("Model aktif: {title}"), StatusTone::Info);
    }

    /// Overwrite one input value.
    pub fn set_input(&mut self, feature: &str, value: f64) {
        match self.ui.form.row.get_mut(feature) {
            Some(slot) => {
                if *slot == value {
                    return;
                }
                *slot = value;
            }
            None => {
                tracing::warn!("Ignoring edit for unknown feature {feature}");
                return;
            }
        }
        self.ui.prediction = None;
    }

    /// Apply the control's step increment `direction` times (use `-1.0` to decrement).
    pub fn step_input(&mut self, feature: &str, direction: f64) {
        let step = self
            .ui
            .form
            .layout
            .fields()
            .iter()
            .find(|field| field.name == feature)
            .map(|field| field.control.step);
        let Some(step) = step else {
            return;
        };
        if self.ui.form.row.step(feature, step * direction).is_some() {
            self.ui.prediction = None;
        }
    }

    /// Run inference on the current inputs; only called from the predict button.
    pub fn request_prediction(&mut self) {
        let result = inference::predict(self.active_model(), &self.ui.form.row);
        match result {
            Ok(prediction) => {
                self.ui.prediction = Some(prediction);
                self.set_status("Prediksi berhasil!", StatusTone::Success);
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                self.ui.prediction = None;
                self.set_status(format!("Prediksi gagal: {err}"), StatusTone::Error);
            }
        }
    }

    /// Re-order the importance table view by a column header click.
    pub fn sort_importance_by(&mut self, column: ImportanceColumn) {
        self.ui.importance.sort = self.ui.importance.sort.toggled(column);
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::with_tone(text, tone);
    }
}
