use super::*;
use crate::egui_app::state::ImportanceColumn;

const INTERPRETATION_INTRO: &str = "Bobot variabel menunjukkan seberapa besar kontribusi relatif \
setiap variabel dalam mempengaruhi prediksi harga tanah per meter persegi. Variabel dengan bobot \
tertinggi merupakan faktor yang paling dominan dalam pengambilan keputusan model.";

impl EguiApp {
    pub(super) fn render_importance(&mut self, ui: &mut egui::Ui) {
        ui.heading("Feature Importance");
        ui.add_space(6.0);
        importance_chart::render(ui, &self.controller.ui.importance.table);
        ui.add_space(12.0);
        ui.heading("📝 Interpretasi Bobot Variabel");
        ui.label(INTERPRETATION_INTRO);
        ui.add_space(12.0);
        ui.heading("📌 Bobot Variabel dan Keterangan");
        self.render_importance_table(ui);
        ui.add_space(12.0);
        self.render_top_features(ui);
    }

    fn render_importance_table(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let sort = self.controller.ui.importance.sort;
        let mut clicked = None;
        egui::Grid::new("importance_table")
            .striped(true)
            .num_columns(5)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for column in [
                    ImportanceColumn::Feature,
                    ImportanceColumn::Score,
                    ImportanceColumn::Kind,
                ] {
                    let arrow = match (sort.column == column, sort.descending) {
                        (true, true) => " ▼",
                        (true, false) => " ▲",
                        (false, _) => "",
                    };
                    let header = RichText::new(format!("{}{arrow}", column.label())).strong();
                    if ui.add(egui::Button::new(header).frame(false)).clicked() {
                        clicked = Some(column);
                    }
                }
                ui.label(RichText::new("Keterangan").strong());
                ui.label(RichText::new("Interpretasi").strong());
                ui.end_row();

                for row in self.controller.ui.importance.sorted_rows() {
                    ui.label(&row.feature);
                    ui.label(format!("{:.6}", row.score));
                    ui.label(RichText::new(row.kind).color(palette.text_muted));
                    ui.label(row.description);
                    ui.label(row.interpretation);
                    ui.end_row();
                }
            });
        if let Some(column) = clicked {
            self.controller.sort_importance_by(column);
        }
    }

    fn render_top_features(&self, ui: &mut egui::Ui) {
        let narrative = self.controller.ui.importance.table.narrative();
        if narrative.is_empty() {
            return;
        }
        ui.label(RichText::new("Variabel paling berpengaruh:").strong());
        for (feature, interpretation) in narrative {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(RichText::new(feature).strong());
                ui.label(format!(": {interpretation}"));
            });
        }
    }
}
