//! Single-row price prediction.

use ndarray::{Array1, Array2, Axis};

use crate::form::InputRow;
use crate::ml::{ModelHandle, Regressor};
use crate::schema::schema_of;

/// Errors raised before the model is invoked.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    /// The row lacks a feature the model expects.
    #[error("Input is missing feature '{missing}'")]
    SchemaMismatch { missing: String },
    /// The row carries a feature the model does not know.
    #[error("Input has unknown feature '{name}'")]
    UnexpectedFeature { name: String },
}

/// Log-space model output and its exponentiated price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictionResult {
    pub log_value: f64,
    pub value: f64,
}

impl PredictionResult {
    pub fn from_log(log_value: f64) -> Self {
        Self {
            log_value,
            value: log_value.exp(),
        }
    }

    /// Log value with four decimals, e.g. `7.0000`.
    pub fn log_display(&self) -> String {
        group_thousands(&format!("{:.4}", self.log_value))
    }

    /// Price rounded to whole Rupiah with grouped thousands, e.g. `1,097`.
    pub fn value_display(&self) -> String {
        group_thousands(&format!("{:.0}", self.value))
    }
}

/// Predict the price for one filled-in input row.
pub fn predict(handle: &ModelHandle, row: &InputRow) -> Result<PredictionResult, InferenceError> {
    let features = assemble_row(handle, row)?;
    let log_value = handle.predict(features.view())[0];
    tracing::debug!(
        "Predicted with {} over {} features: log {log_value}",
        handle.title(),
        features.ncols()
    );
    Ok(PredictionResult::from_log(log_value))
}

/// Build the `1 x n` input table in schema column order.
fn assemble_row(handle: &ModelHandle, row: &InputRow) -> Result<Array2<f64>, InferenceError> {
    let schema = schema_of(handle);
    if let Some(name) = row.keys().find(|name| !schema.contains(name)) {
        return Err(InferenceError::UnexpectedFeature {
            name: name.to_string(),
        });
    }
    let values = schema
        .iter()
        .map(|name| {
            row.get(name).ok_or_else(|| InferenceError::SchemaMismatch {
                missing: name.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(Array1::from(values).insert_axis(Axis(0)))
}

/// Insert `,` between digit triples of the integer part.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };
    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return formatted.to_string();
    }
    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::catboost::CatBoostModel;
    use serde_json::json;

    /// Single-leaf CatBoost model that always predicts `bias`.
    fn constant_model(names: &[&str], bias: f64) -> ModelHandle {
        let features: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                json!({ "flat_feature_index": idx, "feature_index": idx, "feature_id": name })
            })
            .collect();
        let model: CatBoostModel = serde_json::from_value(json!({
            "features_info": { "float_features": features },
            "oblivious_trees": [ { "splits": [], "leaf_values": [0.0] } ],
            "scale_and_bias": [1.0, [bias]]
        }))
        .unwrap();
        ModelHandle::CatBoost {
            title: "constant".into(),
            model: model.prepare().unwrap(),
        }
    }

    fn scenario_row() -> InputRow {
        [("luas_tanah", 100.0), ("jarak_pusat_kota", 5.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn exponentiates_log_prediction() {
        let handle = constant_model(&["luas_tanah", "jarak_pusat_kota"], 7.0);
        let result = predict(&handle, &scenario_row()).unwrap();
        assert_eq!(result.log_value, 7.0);
        assert_eq!(result.value, 7.0f64.exp());
        assert!((result.value - 1096.63).abs() < 0.01);
        assert_eq!(result.log_display(), "7.0000");
        assert_eq!(result.value_display(), "1,097");
    }

    #[test]
    fn repeated_predictions_are_bit_identical() {
        let handle = constant_model(&["luas_tanah", "jarak_pusat_kota"], 12.345);
        let row = scenario_row();
        let first = predict(&handle, &row).unwrap();
        let second = predict(&handle, &row).unwrap();
        assert_eq!(first.log_value.to_bits(), second.log_value.to_bits());
        assert_eq!(first.value.to_bits(), second.value.to_bits());
    }

    #[test]
    fn missing_feature_is_schema_mismatch() {
        let handle = constant_model(&["luas_tanah", "jarak_pusat_kota"], 7.0);
        let mut row = scenario_row();
        row.remove("jarak_pusat_kota");
        assert_eq!(
            predict(&handle, &row),
            Err(InferenceError::SchemaMismatch {
                missing: "jarak_pusat_kota".into()
            })
        );
    }

    #[test]
    fn extra_feature_is_rejected() {
        let handle = constant_model(&["luas_tanah"], 7.0);
        let err = predict(&handle, &scenario_row()).unwrap_err();
        assert_eq!(
            err,
            InferenceError::UnexpectedFeature {
                name: "jarak_pusat_kota".into()
            }
        );
    }

    #[test]
    fn groups_thousands_in_both_displays() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-1234.5000"), "-1,234.5000");
        assert_eq!(group_thousands("inf"), "inf");
        let result = PredictionResult::from_log(14.0);
        assert_eq!(result.value_display(), "1,202,604");
    }
}
