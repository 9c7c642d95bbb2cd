mod support;

use std::sync::Arc;

use support::models;
use taksir::egui_app::controller::DashboardController;
use taksir::egui_app::state::ImportanceColumn;
use taksir::egui_app::ui::style::StatusTone;
use taksir::egui_app::state::StatusBarState;
use taksir::registry::{ModelRegistry, PropertyType, Segment};
use tempfile::TempDir;

struct DashboardHarness {
    _temp: TempDir,
    pub controller: DashboardController,
}

impl DashboardHarness {
    fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let paths = models::write_all(temp.path());
        let registry = ModelRegistry::load(&paths).expect("load registry");
        Self {
            _temp: temp,
            controller: DashboardController::new(Arc::new(registry)),
        }
    }

    fn field_names(&self) -> Vec<String> {
        self.controller
            .ui
            .form
            .layout
            .fields()
            .iter()
            .map(|field| field.name.clone())
            .collect()
    }
}

#[test]
fn starts_on_the_first_ruko_segment() {
    let harness = DashboardHarness::new();
    let ui = &harness.controller.ui;
    assert_eq!(ui.selection.property, PropertyType::Ruko);
    assert_eq!(ui.form.title, "Gradient Boosting Regressor – Low");
    assert_eq!(harness.field_names(), models::RUKO_FEATURES);
    assert!(ui.form.row.keys().all(|key| ui.form.row.get(key) == Some(0.0)));
    assert!(ui.prediction.is_none());
    assert_eq!(
        ui.status,
        StatusBarState::with_tone(
            "Model aktif: Gradient Boosting Regressor – Low",
            StatusTone::Info
        )
    );
}

#[test]
fn prediction_runs_only_on_request() {
    let mut harness = DashboardHarness::new();
    harness.controller.set_input("luas_tanah", 150.0);
    assert!(harness.controller.ui.prediction.is_none());

    harness.controller.request_prediction();
    let prediction = harness.controller.ui.prediction.expect("prediction");
    assert_eq!(prediction.log_value, 8.0);
    assert_eq!(prediction.log_display(), "8.0000");
    assert_eq!(prediction.value_display(), "2,981");
    assert_eq!(harness.controller.ui.status.text, "Prediksi berhasil!");
}

#[test]
fn default_inputs_predict_the_base_price() {
    let mut harness = DashboardHarness::new();
    harness.controller.request_prediction();
    let prediction = harness.controller.ui.prediction.expect("prediction");
    assert_eq!(prediction.log_value, 7.0);
    assert_eq!(prediction.value_display(), "1,097");
}

#[test]
fn editing_an_input_clears_the_prediction() {
    let mut harness = DashboardHarness::new();
    harness.controller.request_prediction();
    assert!(harness.controller.ui.prediction.is_some());
    harness.controller.step_input("lebar_jalan", 1.0);
    assert_eq!(harness.controller.ui.form.row.get("lebar_jalan"), Some(1.0));
    assert!(harness.controller.ui.prediction.is_none());
}

#[test]
fn unknown_feature_edits_are_ignored() {
    let mut harness = DashboardHarness::new();
    harness.controller.request_prediction();
    harness.controller.set_input("tidak_ada", 3.0);
    assert!(harness.controller.ui.form.row.get("tidak_ada").is_none());
    assert!(harness.controller.ui.prediction.is_some());
}

#[test]
fn switching_model_resets_the_form() {
    let mut harness = DashboardHarness::new();
    harness.controller.set_input("luas_tanah", 150.0);
    harness.controller.request_prediction();

    harness.controller.select_property(PropertyType::RumahTinggal);
    assert_eq!(harness.field_names(), models::RUMAH_FEATURES);
    assert!(harness.controller.ui.prediction.is_none());
    assert_eq!(
        harness.controller.ui.form.title,
        "CatBoost Regressor – Rumah Tinggal"
    );

    harness.controller.request_prediction();
    let prediction = harness.controller.ui.prediction.expect("prediction");
    assert_eq!(prediction.log_value, models::RUMAH_BASE_LOG);
}

#[test]
fn segment_choice_is_remembered_across_property_switches() {
    let mut harness = DashboardHarness::new();
    harness.controller.select_property(PropertyType::RumahTinggal);
    harness.controller.select_segment(Segment::High);
    assert_eq!(
        harness.controller.active_model().title(),
        "CatBoost Regressor – Rumah Tinggal"
    );

    harness.controller.select_property(PropertyType::Ruko);
    assert_eq!(
        harness.controller.ui.form.title,
        "Gradient Boosting Regressor – High"
    );
    harness.controller.request_prediction();
    let prediction = harness.controller.ui.prediction.expect("prediction");
    assert_eq!(prediction.log_value, models::RUKO_BASE_LOG[2]);
}

#[test]
fn importance_table_follows_the_active_model() {
    let mut harness = DashboardHarness::new();
    let rows = harness.controller.ui.importance.table.rows();
    assert_eq!(rows.len(), models::RUKO_FEATURES.len());
    assert_eq!(rows[0].feature, "luas_tanah");
    assert_eq!(rows[0].score, 1.0);
    let tail: Vec<&str> = rows[1..].iter().map(|row| row.feature.as_str()).collect();
    assert_eq!(tail, ["lebar_jalan", "zona_komersial_1"]);

    harness.controller.select_property(PropertyType::RumahTinggal);
    let rows = harness.controller.ui.importance.table.rows();
    assert_eq!(rows[0].feature, "luas_bangunan");
    assert!((rows[0].score - 100.0).abs() < 1e-9);
    assert_eq!(rows[1].score, 0.0);
}

#[test]
fn header_clicks_reorder_without_touching_the_ranking() {
    let mut harness = DashboardHarness::new();
    harness.controller.sort_importance_by(ImportanceColumn::Feature);
    let view: Vec<String> = harness
        .controller
        .ui
        .importance
        .sorted_rows()
        .iter()
        .map(|row| row.feature.clone())
        .collect();
    assert_eq!(view, ["lebar_jalan", "luas_tanah", "zona_komersial_1"]);
    assert_eq!(
        harness.controller.ui.importance.table.rows()[0].feature,
        "luas_tanah"
    );

    harness.controller.select_segment(Segment::Medium);
    assert_eq!(
        harness.controller.ui.importance.sort.column,
        ImportanceColumn::Score
    );
}
