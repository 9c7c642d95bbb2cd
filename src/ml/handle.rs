use super::catboost::{CatBoostError, CatBoostModel};
use super::gradient_boosting::{GradientBoostingError, GradientBoostingModel};
use ndarray::{Array1, ArrayView2};
use std::path::Path;

/// Capabilities shared by every loaded regressor.
pub trait Regressor {
    /// Ordered feature names; positions match `feature_importances`.
    fn feature_names(&self) -> &[String];
    /// Predict one log-space value per input row.
    fn predict(&self, rows: ArrayView2<'_, f64>) -> Array1<f64>;
    /// Per-feature importance scores as reported by the model family.
    fn feature_importances(&self) -> Vec<f64>;
}

impl Regressor for GradientBoostingModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names_in
    }

    fn predict(&self, rows: ArrayView2<'_, f64>) -> Array1<f64> {
        GradientBoostingModel::predict(self, rows)
    }

    fn feature_importances(&self) -> Vec<f64> {
        GradientBoostingModel::feature_importances(self)
    }
}

impl Regressor for CatBoostModel {
    fn feature_names(&self) -> &[String] {
        CatBoostModel::feature_names(self)
    }

    fn predict(&self, rows: ArrayView2<'_, f64>) -> Array1<f64> {
        CatBoostModel::predict(self, rows)
    }

    fn feature_importances(&self) -> Vec<f64> {
        CatBoostModel::feature_importances(self)
    }
}

/// Failure to load any model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error(transparent)]
    GradientBoosting(#[from] GradientBoostingError),
    #[error(transparent)]
    CatBoost(#[from] CatBoostError),
}

/// Loaded model of either family plus its display title.
#[derive(Debug, Clone)]
pub enum ModelHandle {
    GradientBoosting {
        title: String,
        model: GradientBoostingModel,
    },
    CatBoost {
        title: String,
        model: CatBoostModel,
    },
}

impl ModelHandle {
    /// Load a gradient boosting artifact.
    pub fn load_gradient_boosting(
        path: &Path,
        title: impl Into<String>,
    ) -> Result<Self, ModelLoadError> {
        let model = GradientBoostingModel::load_json(path)?;
        Ok(Self::GradientBoosting {
            title: title.into(),
            model,
        })
    }

    /// Load a CatBoost JSON artifact.
    pub fn load_catboost(path: &Path, title: impl Into<String>) -> Result<Self, ModelLoadError> {
        let model = CatBoostModel::load_json(path)?;
        Ok(Self::CatBoost {
            title: title.into(),
            model,
        })
    }

    /// Heading shown above the input form.
    pub fn title(&self) -> &str {
        match self {
            Self::GradientBoosting { title, .. } | Self::CatBoost { title, .. } => title,
        }
    }

    /// Number of trees in the ensemble.
    pub fn tree_count(&self) -> usize {
        match self {
            Self::GradientBoosting { model, .. } => model.estimators.len(),
            Self::CatBoost { model, .. } => model.tree_count(),
        }
    }

    fn regressor(&self) -> &dyn Regressor {
        match self {
            Self::GradientBoosting { model, .. } => model,
            Self::CatBoost { model, .. } => model,
        }
    }
}

impl Regressor for ModelHandle {
    fn feature_names(&self) -> &[String] {
        self.regressor().feature_names()
    }

    fn predict(&self, rows: ArrayView2<'_, f64>) -> Array1<f64> {
        self.regressor().predict(rows)
    }

    fn feature_importances(&self) -> Vec<f64> {
        self.regressor().feature_importances()
    }
}
