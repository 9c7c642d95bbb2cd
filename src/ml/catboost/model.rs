use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FLOAT_FEATURE_SPLIT: &str = "FloatFeature";
/// Importances are reported as percentages.
const IMPORTANCE_TOTAL: f64 = 100.0;

/// Errors raised while loading a CatBoost JSON artifact.
#[derive(Debug, thiserror::Error)]
pub enum CatBoostError {
    /// The artifact could not be read from disk.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not valid CatBoost JSON.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact uses a split this evaluator cannot apply.
    #[error("Unsupported split type '{split_type}' in tree {tree}")]
    UnsupportedSplit { tree: usize, split_type: String },
    /// The artifact parsed but violates a structural invariant.
    #[error("Invalid CatBoost model: {0}")]
    Invalid(String),
}

/// Numeric input feature description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatFeature {
    /// Column position in the flat input vector.
    pub flat_feature_index: usize,
    /// Position among float features; referenced by splits.
    pub feature_index: usize,
    #[serde(default)]
    pub feature_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturesInfo {
    #[serde(default)]
    pub float_features: Vec<FloatFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObliviousSplit {
    pub float_feature_index: usize,
    pub border: f64,
    #[serde(default = "default_split_type")]
    pub split_type: String,
}

fn default_split_type() -> String {
    FLOAT_FEATURE_SPLIT.to_string()
}

/// Symmetric tree: every level shares one split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObliviousTree {
    /// Split `d` sets bit `d` of the leaf index.
    pub splits: Vec<ObliviousSplit>,
    pub leaf_values: Vec<f64>,
    #[serde(default)]
    pub leaf_weights: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatBoostModel {
    pub features_info: FeaturesInfo,
    pub oblivious_trees: Vec<ObliviousTree>,
    #[serde(default = "default_scale_and_bias")]
    pub scale_and_bias: (f64, Vec<f64>),
    /// Float feature index to flat input column, built after load.
    #[serde(skip)]
    flat_index: Vec<usize>,
    #[serde(skip)]
    feature_names: Vec<String>,
}

fn default_scale_and_bias() -> (f64, Vec<f64>) {
    (1.0, vec![0.0])
}

impl CatBoostModel {
    /// Load a model from a JSON file produced by `save_model(format="json")`.
    pub fn load_json(path: &Path) -> Result<Self, CatBoostError> {
        let bytes = std::fs::read(path).map_err(|source| CatBoostError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| CatBoostError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.prepare()
    }

    /// Validate the parsed model and build the lookup tables used at prediction time.
    pub fn prepare(mut self) -> Result<Self, CatBoostError> {
        let mut features = self.features_info.float_features.clone();
        if features.is_empty() {
            return Err(CatBoostError::Invalid(
                "Model must declare at least one float feature".to_string(),
            ));
        }
        features.sort_by_key(|feature| feature.flat_feature_index);
        if features
            .iter()
            .enumerate()
            .any(|(pos, feature)| feature.flat_feature_index != pos)
        {
            return Err(CatBoostError::Invalid(
                "Flat feature indices must be contiguous; categorical inputs are not supported"
                    .to_string(),
            ));
        }
        let mut flat_index = vec![usize::MAX; features.len()];
        for feature in &features {
            let slot = flat_index.get_mut(feature.feature_index).ok_or_else(|| {
                CatBoostError::Invalid(format!(
                    "Float feature index {} out of range",
                    feature.feature_index
                ))
            })?;
            *slot = feature.flat_feature_index;
        }
        if flat_index.contains(&usize::MAX) {
            return Err(CatBoostError::Invalid(
                "Float feature indices must be unique".to_string(),
            ));
        }
        if self.scale_and_bias.1.len() != 1 {
            return Err(CatBoostError::Invalid(format!(
                "Expected a single bias value, got {}",
                self.scale_and_bias.1.len()
            )));
        }
        for (tree_idx, tree) in self.oblivious_trees.iter().enumerate() {
            validate_tree(tree_idx, tree, flat_index.len())?;
        }
        self.feature_names = features
            .iter()
            .map(|feature| {
                if feature.feature_id.is_empty() {
                    feature.flat_feature_index.to_string()
                } else {
                    feature.feature_id.clone()
                }
            })
            .collect();
        self.flat_index = flat_index;
        Ok(self)
    }

    /// Feature names in input column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn tree_count(&self) -> usize {
        self.oblivious_trees.len()
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
        let raw: f64 = self
            .oblivious_trees
            .iter()
            .map(|tree| tree.leaf_values[self.leaf_index(tree, row)])
            .sum();
        let (scale, bias) = &self.scale_and_bias;
        scale * raw + bias[0]
    }

    fn leaf_index(&self, tree: &ObliviousTree, row: ArrayView1<'_, f64>) -> usize {
        tree.splits
            .iter()
            .enumerate()
            .fold(0usize, |index, (depth, split)| {
                let value = row[self.flat_index[split.float_feature_index]] as f32;
                if value > split.border as f32 {
                    index | (1 << depth)
                } else {
                    index
                }
            })
    }

    /// Prediction-values-change importances, scaled to sum to 100.
    pub fn feature_importances(&self) -> Vec<f64> {
        let mut effect = vec![0.0; self.flat_index.len()];
        for tree in &self.oblivious_trees {
            let mut nodes: Vec<(f64, f64)> = tree
                .leaf_values
                .iter()
                .enumerate()
                .map(|(leaf, &value)| (value, tree.leaf_weights.get(leaf).copied().unwrap_or(1.0)))
                .collect();
            for (depth, split) in tree.splits.iter().enumerate().rev() {
                let half = 1usize << depth;
                let feature = self.flat_index[split.float_feature_index];
                let mut parents = Vec::with_capacity(half);
                for leaf in 0..half {
                    let (left_value, left_weight) = nodes[leaf];
                    let (right_value, right_weight) = nodes[leaf + half];
                    let weight = left_weight + right_weight;
                    let average = if weight > 0.0 {
                        (left_weight * left_value + right_weight * right_value) / weight
                    } else {
                        0.5 * (left_value + right_value)
                    };
                    effect[feature] += left_weight * (left_value - average).powi(2)
                        + right_weight * (right_value - average).powi(2);
                    parents.push((average, weight));
                }
                nodes = parents;
            }
        }
        let total: f64 = effect.iter().sum();
        if total > 0.0 {
            for value in &mut effect {
                *value *= IMPORTANCE_TOTAL / total;
            }
        }
        effect
    }
}

fn validate_tree(tree_idx: usize, tree: &ObliviousTree, n_float: usize) -> Result<(), CatBoostError> {
    for split in &tree.splits {
        if split.split_type != FLOAT_FEATURE_SPLIT {
            return Err(CatBoostError::UnsupportedSplit {
                tree: tree_idx,
                split_type: split.split_type.clone(),
            });
        }
        if split.float_feature_index >= n_float {
            return Err(CatBoostError::Invalid(format!(
                "Tree {tree_idx} splits on float feature {} but model has {n_float}",
                split.float_feature_index
            )));
        }
    }
    let depth = tree.splits.len();
    if depth >= usize::BITS as usize {
        return Err(CatBoostError::Invalid(format!("Tree {tree_idx} is too deep")));
    }
    let leaves = 1usize << depth;
    if tree.leaf_values.len() != leaves {
        return Err(CatBoostError::Invalid(format!(
            "Tree {tree_idx} has {} leaf values but depth {depth} needs {leaves}",
            tree.leaf_values.len()
        )));
    }
    if !tree.leaf_weights.is_empty() && tree.leaf_weights.len() != leaves {
        return Err(CatBoostError::Invalid(format!(
            "Tree {tree_idx} has {} leaf weights but {leaves} leaves",
            tree.leaf_weights.len()
        )));
    }
    Ok(())
}
