//! egui renderer for the dashboard.

mod importance_chart;
mod importance_panel;
mod input_grid;
mod prediction_panel;
mod sidebar;
pub mod style;

use std::sync::Arc;

use crate::egui_app::controller::DashboardController;
use crate::registry::ModelRegistry;
use eframe::egui::{self, Frame, Margin, RichText, Vec2};

/// Smallest window size that keeps three input columns readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(960.0, 640.0);
const PAGE_TITLE: &str = "Dashboard Prediksi Harga Tanah per m²";

/// Renders the dashboard using the shared controller state.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self {
            controller: DashboardController::new(registry),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(style::palette().bg_primary).inner_margin(Margin::same(4)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 6.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                });
            });
    }

    fn render_main(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("dashboard_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(RichText::new(PAGE_TITLE).size(24.0));
                ui.label(
                    RichText::new(&self.controller.ui.form.title)
                        .size(16.0)
                        .color(style::palette().accent),
                );
                ui.separator();
                self.render_input_grid(ui);
                ui.add_space(12.0);
                self.render_prediction(ui);
                ui.add_space(12.0);
                ui.separator();
                self.render_importance(ui);
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_sidebar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.render_main(ui));
    }
}
