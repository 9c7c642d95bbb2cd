use super::*;
use crate::registry::{PropertyType, Segment};

impl EguiApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("model_settings")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Pengaturan Model");
                ui.add_space(12.0);
                self.render_property_combo(ui);
                if self.controller.ui.selection.property.has_segments() {
                    ui.add_space(8.0);
                    self.render_segment_combo(ui);
                }
            });
    }

    fn render_property_combo(&mut self, ui: &mut egui::Ui) {
        let current = self.controller.ui.selection.property;
        let mut chosen = current;
        ui.label("Pilih Jenis Properti");
        egui::ComboBox::from_id_salt("property_type_combo")
            .width(200.0)
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for property in PropertyType::ALL {
                    ui.selectable_value(&mut chosen, property, property.label());
                }
            });
        if chosen != current {
            self.controller.select_property(chosen);
        }
    }

    fn render_segment_combo(&mut self, ui: &mut egui::Ui) {
        let current = self.controller.ui.selection.segment;
        let mut chosen = current;
        ui.label("Pilih Segment Model Ruko");
        egui::ComboBox::from_id_salt("ruko_segment_combo")
            .width(200.0)
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for segment in Segment::ALL {
                    ui.selectable_value(&mut chosen, segment, segment.label());
                }
            });
        if chosen != current {
            self.controller.select_segment(chosen);
        }
    }
}
