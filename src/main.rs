//! Entry point for the land-price dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use taksir::app_dirs;
use taksir::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use taksir::logging;
use taksir::registry::{ModelPaths, ModelRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let models_dir = app_dirs::models_dir();
    tracing::info!("Loading models from {}", models_dir.display());
    let registry = ModelRegistry::load(&ModelPaths::in_dir(&models_dir));

    let viewport = egui::ViewportBuilder::default()
        .with_title("Dashboard Prediksi Harga Tanah")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Taksir",
        native_options,
        Box::new(move |_cc| match registry {
            Ok(registry) => Ok(Box::new(EguiApp::new(Arc::new(registry)))),
            Err(err) => {
                tracing::error!("Model loading failed: {err}");
                Ok(Box::new(LaunchError {
                    message: err.to_string(),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label("Gagal memuat model");
                ui.label(&self.message);
            });
        });
    }
}
