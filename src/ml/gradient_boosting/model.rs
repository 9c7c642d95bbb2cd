use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Child index marking a leaf node.
pub const TREE_LEAF: i64 = -1;

/// Errors raised while loading a gradient boosting artifact.
#[derive(Debug, thiserror::Error)]
pub enum GradientBoostingError {
    /// The artifact could not be read from disk.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not valid JSON for this format.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact parsed but violates a structural invariant.
    #[error("Invalid gradient boosting model: {0}")]
    Invalid(String),
}

/// One regression tree in flat node-array form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    /// Split feature per node; ignored for leaves.
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Node output; only leaf values contribute to predictions.
    pub value: Vec<f64>,
    pub impurity: Vec<f64>,
    pub weighted_n_node_samples: Vec<f64>,
}

impl RegressionTree {
    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    fn is_leaf(&self, node: usize) -> bool {
        self.children_left[node] == TREE_LEAF
    }

    /// Walk the tree for one feature row and return the leaf value.
    pub fn predict(&self, features: ArrayView1<'_, f64>) -> f64 {
        let mut node = 0usize;
        while !self.is_leaf(node) {
            let feature = self.feature[node] as usize;
            // Splits were learned on float32 inputs.
            let x = features[feature] as f32 as f64;
            node = if x <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        self.value[node]
    }

    /// Unnormalized impurity decrease per feature, scaled by the root weight.
    fn impurity_decrease(&self, n_features: usize) -> Vec<f64> {
        let mut importances = vec![0.0; n_features];
        for node in 0..self.node_count() {
            if self.is_leaf(node) {
                continue;
            }
            let left = self.children_left[node] as usize;
            let right = self.children_right[node] as usize;
            let decrease = self.weighted_n_node_samples[node] * self.impurity[node]
                - self.weighted_n_node_samples[left] * self.impurity[left]
                - self.weighted_n_node_samples[right] * self.impurity[right];
            importances[self.feature[node] as usize] += decrease;
        }
        let root_weight = self.weighted_n_node_samples[0];
        if root_weight > 0.0 {
            for value in &mut importances {
                *value /= root_weight;
            }
        }
        importances
    }

    fn validate(&self, tree_idx: usize, n_features: usize) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err(format!("Tree {tree_idx} has no nodes"));
        }
        let lengths = [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
            self.impurity.len(),
            self.weighted_n_node_samples.len(),
        ];
        if lengths.iter().any(|&len| len != n) {
            return Err(format!(
                "Tree {tree_idx} node arrays have mismatched lengths (expected {n})"
            ));
        }
        for node in 0..n {
            if self.is_leaf(node) {
                continue;
            }
            for child in [self.children_left[node], self.children_right[node]] {
                if child <= node as i64 || child as usize >= n {
                    return Err(format!(
                        "Tree {tree_idx} node {node} references invalid child {child}"
                    ));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!(
                    "Tree {tree_idx} node {node} splits on feature {feature} but model has {n_features}"
                ));
            }
        }
        Ok(())
    }
}

/// Exported gradient boosting regressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingModel {
    /// Ordered feature names the model was trained on.
    pub feature_names_in: Vec<String>,
    /// Shrinkage applied to each tree output.
    pub learning_rate: f64,
    /// Constant initial prediction before boosting stages.
    pub init_value: f64,
    /// One tree per boosting stage.
    pub estimators: Vec<RegressionTree>,
}

impl GradientBoostingModel {
    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), String> {
        if self.feature_names_in.is_empty() {
            return Err("Model must declare at least one feature".to_string());
        }
        if self.estimators.is_empty() {
            return Err("Model must contain at least one estimator".to_string());
        }
        if !self.learning_rate.is_finite() || !self.init_value.is_finite() {
            return Err("learning_rate and init_value must be finite".to_string());
        }
        let n_features = self.feature_names_in.len();
        for (idx, tree) in self.estimators.iter().enumerate() {
            tree.validate(idx, n_features)?;
        }
        Ok(())
    }

    /// Load a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, GradientBoostingError> {
        let bytes = std::fs::read(path).map_err(|source| GradientBoostingError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self =
            serde_json::from_slice(&bytes).map_err(|source| GradientBoostingError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        model.validate().map_err(GradientBoostingError::Invalid)?;
        Ok(model)
    }

    /// Predict one value per input row.
    pub fn predict(&self, rows: ArrayView2<'_, f64>) -> Array1<f64> {
        rows.rows()
            .into_iter()
            .map(|row| self.predict_row(row))
            .collect()
    }

    /// Predict a single row.
    pub fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        let boosted: f64 = self.estimators.iter().map(|tree| tree.predict(row)).sum();
        self.init_value + self.learning_rate * boosted
    }

    /// Impurity-based importances, normalized to sum to one.
    pub fn feature_importances(&self) -> Vec<f64> {
        let n_features = self.feature_names_in.len();
        let relevant: Vec<Vec<f64>> = self
            .estimators
            .iter()
            .filter(|tree| tree.node_count() > 1)
            .map(|tree| tree.impurity_decrease(n_features))
            .collect();
        if relevant.is_empty() {
            return vec![0.0; n_features];
        }
        let mut mean = vec![0.0; n_features];
        for importances in &relevant {
            for (acc, value) in mean.iter_mut().zip(importances) {
                *acc += value;
            }
        }
        let count = relevant.len() as f64;
        for value in &mut mean {
            *value /= count;
        }
        let total: f64 = mean.iter().sum();
        if total > 0.0 {
            for value in &mut mean {
                *value /= total;
            }
        }
        mean
    }
}
