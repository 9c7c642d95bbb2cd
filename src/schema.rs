//! Ordered feature list expected by a model.

use crate::ml::{ModelHandle, Regressor};

/// Feature names in the order the model consumes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Extract the trained feature list from either model family.
pub fn schema_of(handle: &ModelHandle) -> FeatureSchema {
    FeatureSchema::new(handle.feature_names().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::catboost::CatBoostModel;
    use crate::ml::gradient_boosting::{GradientBoostingModel, RegressionTree, TREE_LEAF};
    use serde_json::json;

    #[test]
    fn gradient_boosting_schema_uses_declared_names() {
        let handle = ModelHandle::GradientBoosting {
            title: "gb".into(),
            model: GradientBoostingModel {
                feature_names_in: vec!["b".into(), "a".into(), "luas tanah (m²)".into()],
                learning_rate: 0.1,
                init_value: 0.0,
                estimators: vec![RegressionTree {
                    children_left: vec![TREE_LEAF],
                    children_right: vec![TREE_LEAF],
                    feature: vec![-2],
                    threshold: vec![-2.0],
                    value: vec![0.0],
                    impurity: vec![0.0],
                    weighted_n_node_samples: vec![1.0],
                }],
            },
        };
        let schema = schema_of(&handle);
        assert_eq!(schema.iter().collect::<Vec<_>>(), ["b", "a", "luas tanah (m²)"]);
    }

    #[test]
    fn catboost_schema_uses_flat_order() {
        let model: CatBoostModel = serde_json::from_value(json!({
            "features_info": { "float_features": [
                { "flat_feature_index": 1, "feature_index": 1, "feature_id": "jarak_pusat_kota" },
                { "flat_feature_index": 0, "feature_index": 0, "feature_id": "luas_tanah" }
            ]},
            "oblivious_trees": []
        }))
        .unwrap();
        let handle = ModelHandle::CatBoost {
            title: "cb".into(),
            model: model.prepare().unwrap(),
        };
        let schema = schema_of(&handle);
        assert_eq!(schema.len(), 2);
        assert!(schema.contains("jarak_pusat_kota"));
        assert_eq!(schema.names()[0], "luas_tanah");
    }
}
