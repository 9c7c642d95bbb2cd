use super::*;
use crate::inference::PredictionResult;

impl EguiApp {
    pub(super) fn render_prediction(&mut self, ui: &mut egui::Ui) {
        let button = egui::Button::new(RichText::new("🔮 Prediksi Harga").size(16.0));
        if ui.add(button).clicked() {
            self.controller.request_prediction();
        }
        let Some(prediction) = self.controller.ui.prediction else {
            return;
        };
        ui.add_space(8.0);
        Frame::new()
            .fill(style::success_fill())
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Prediksi berhasil!").color(style::palette().success));
            });
        ui.add_space(8.0);
        render_metrics(ui, &prediction);
    }
}

fn render_metrics(ui: &mut egui::Ui, prediction: &PredictionResult) {
    ui.columns(2, |columns| {
        metric(&mut columns[0], "log(Harga)", prediction.log_display());
        metric(&mut columns[1], "Harga per m² (Rp)", prediction.value_display());
    });
}

fn metric(ui: &mut egui::Ui, label: &str, value: String) {
    ui.label(RichText::new(label).color(style::palette().text_muted));
    ui.label(RichText::new(value).size(28.0).strong());
}
