use super::*;
use crate::form::{FORM_COLUMNS, FormField};

/// Edit captured while the grid is drawn, applied once drawing is done.
enum FieldEdit {
    Set(String, f64),
    Step(String, f64),
}

impl EguiApp {
    pub(super) fn render_input_grid(&mut self, ui: &mut egui::Ui) {
        let form = &self.controller.ui.form;
        if form.layout.fields().is_empty() {
            ui.label(RichText::new("Model tidak memiliki fitur.").color(style::palette().text_muted));
            return;
        }
        let mut edits = Vec::new();
        ui.columns(FORM_COLUMNS, |columns| {
            for (column_ui, fields) in columns.iter_mut().zip(form.layout.columns()) {
                for field in fields {
                    let value = form.row.get(&field.name).unwrap_or(field.control.default);
                    render_field(column_ui, field, value, &mut edits);
                    column_ui.add_space(6.0);
                }
            }
        });
        for edit in edits {
            match edit {
                FieldEdit::Set(name, value) => self.controller.set_input(&name, value),
                FieldEdit::Step(name, direction) => self.controller.step_input(&name, direction),
            }
        }
    }
}

fn render_field(ui: &mut egui::Ui, field: &FormField, value: f64, edits: &mut Vec<FieldEdit>) {
    ui.label(&field.name);
    ui.push_id(field.index, |ui| {
        ui.horizontal(|ui| {
            let mut edited = value;
            let drag = egui::DragValue::new(&mut edited)
                .speed(field.control.step)
                .min_decimals(2);
            let response = ui.add_sized(egui::vec2((ui.available_width() - 56.0).max(40.0), 20.0), drag);
            if response.changed() {
                edits.push(FieldEdit::Set(field.name.clone(), edited));
            }
            if ui.small_button("−").clicked() {
                edits.push(FieldEdit::Step(field.name.clone(), -1.0));
            }
            if ui.small_button("+").clicked() {
                edits.push(FieldEdit::Step(field.name.clone(), 1.0));
            }
        });
    });
}
