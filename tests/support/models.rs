//! Small model artifacts with hand-checkable outputs.

use std::path::Path;

use serde_json::{Value, json};
use taksir::registry::{
    ModelPaths, RUKO_HIGH_FILE, RUKO_LOW_FILE, RUKO_MEDIUM_FILE, RUMAH_TINGGAL_FILE,
};

pub const RUKO_FEATURES: [&str; 3] = ["luas_tanah", "lebar_jalan", "zona_komersial_1"];
pub const RUMAH_FEATURES: [&str; 2] = ["luas_bangunan", "jarak_pusat_kota"];

/// Log prediction at default inputs for each ruko segment.
pub const RUKO_BASE_LOG: [f64; 3] = [7.0, 8.0, 9.0];
/// Log prediction of the rumah tinggal model at default inputs.
pub const RUMAH_BASE_LOG: f64 = 10.5;

/// Gradient boosting model: `init + 0.1 * (luas_tanah > 100 ? 10 : 0)`.
pub fn gradient_boosting_json(init_value: f64) -> Value {
    json!({
        "feature_names_in": RUKO_FEATURES,
        "learning_rate": 0.1,
        "init_value": init_value,
        "estimators": [{
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [0, -2, -2],
            "threshold": [100.0, -2.0, -2.0],
            "value": [5.0, 0.0, 10.0],
            "impurity": [1.0, 0.0, 0.0],
            "weighted_n_node_samples": [10.0, 5.0, 5.0]
        }]
    })
}

/// CatBoost model: `10 + (luas_bangunan > 50 ? 1.5 : 0.5)`.
pub fn catboost_json() -> Value {
    json!({
        "features_info": { "float_features": [
            { "flat_feature_index": 0, "feature_index": 0, "feature_id": RUMAH_FEATURES[0] },
            { "flat_feature_index": 1, "feature_index": 1, "feature_id": RUMAH_FEATURES[1] }
        ]},
        "oblivious_trees": [{
            "splits": [{ "float_feature_index": 0, "border": 50.0, "split_type": "FloatFeature" }],
            "leaf_values": [0.5, 1.5],
            "leaf_weights": [3.0, 1.0]
        }],
        "scale_and_bias": [1.0, [10.0]]
    })
}

fn write_json(path: &Path, value: &Value) {
    let text = serde_json::to_string_pretty(value).expect("serialize fixture");
    std::fs::write(path, text).expect("write fixture");
}

/// Write all four artifacts into `dir` and return their paths.
pub fn write_all(dir: &Path) -> ModelPaths {
    for (file, init) in [RUKO_LOW_FILE, RUKO_MEDIUM_FILE, RUKO_HIGH_FILE]
        .into_iter()
        .zip(RUKO_BASE_LOG)
    {
        write_json(&dir.join(file), &gradient_boosting_json(init));
    }
    write_json(&dir.join(RUMAH_TINGGAL_FILE), &catboost_json());
    ModelPaths::in_dir(dir)
}
