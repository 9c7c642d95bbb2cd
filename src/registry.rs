//! Fixed set of pretrained models, loaded once at startup.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ml::{ModelHandle, ModelLoadError};

/// Artifact for the low-price shophouse segment.
pub const RUKO_LOW_FILE: &str = "model_Low.json";
/// Artifact for the medium-price shophouse segment.
pub const RUKO_MEDIUM_FILE: &str = "model_Medium.json";
/// Artifact for the high-price shophouse segment.
pub const RUKO_HIGH_FILE: &str = "model_High.json";
/// CatBoost artifact for residential houses.
pub const RUMAH_TINGGAL_FILE: &str = "catboost_final.json";

/// Property category chosen in the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Shophouse; served by one model per price segment.
    #[default]
    Ruko,
    /// Residential house; served by a single CatBoost model.
    RumahTinggal,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [PropertyType::Ruko, PropertyType::RumahTinggal];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Ruko => "Ruko",
            PropertyType::RumahTinggal => "Rumah Tinggal",
        }
    }

    /// Whether a segment must be chosen for this category.
    pub fn has_segments(self) -> bool {
        matches!(self, PropertyType::Ruko)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price segment of the shophouse models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Segment {
    #[default]
    Low,
    Medium,
    High,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Low, Segment::Medium, Segment::High];

    pub fn label(self) -> &'static str {
        match self {
            Segment::Low => "Low",
            Segment::Medium => "Medium",
            Segment::High => "High",
        }
    }

    fn index(self) -> usize {
        match self {
            Segment::Low => 0,
            Segment::Medium => 1,
            Segment::High => 2,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Locations of every model artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelPaths {
    pub ruko_low: PathBuf,
    pub ruko_medium: PathBuf,
    pub ruko_high: PathBuf,
    pub rumah_tinggal: PathBuf,
}

impl ModelPaths {
    /// Resolve the compiled-in artifact names against a models directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            ruko_low: dir.join(RUKO_LOW_FILE),
            ruko_medium: dir.join(RUKO_MEDIUM_FILE),
            ruko_high: dir.join(RUKO_HIGH_FILE),
            rumah_tinggal: dir.join(RUMAH_TINGGAL_FILE),
        }
    }

    fn ruko(&self, segment: Segment) -> &Path {
        match segment {
            Segment::Low => &self.ruko_low,
            Segment::Medium => &self.ruko_medium,
            Segment::High => &self.ruko_high,
        }
    }
}

/// Startup failure: an artifact is missing, unreadable or malformed.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Failed to load model {path}: {source}")]
    Load {
        path: PathBuf,
        source: ModelLoadError,
    },
}

/// Read-only cache of every loaded model.
///
/// Built once by [`ModelRegistry::load`] and shared by reference afterwards;
/// lookups never touch the filesystem.
#[derive(Debug)]
pub struct ModelRegistry {
    ruko: [ModelHandle; 3],
    rumah_tinggal: ModelHandle,
}

impl ModelRegistry {
    /// Eagerly load all artifacts, reporting the first one that fails.
    pub fn load(paths: &ModelPaths) -> Result<Self, RegistryError> {
        let [low, medium, high] = Segment::ALL.map(|segment| {
            let path = paths.ruko(segment);
            let title = format!("Gradient Boosting Regressor – {segment}");
            load_logged(path, || ModelHandle::load_gradient_boosting(path, title))
        });
        let ruko = [low?, medium?, high?];
        let rumah_tinggal = load_logged(&paths.rumah_tinggal, || {
            ModelHandle::load_catboost(&paths.rumah_tinggal, "CatBoost Regressor – Rumah Tinggal")
        })?;
        Ok(Self {
            ruko,
            rumah_tinggal,
        })
    }

    /// Return the model serving a property type and optional segment.
    ///
    /// `Ruko` without a segment resolves to the first segment; the segment is
    /// ignored for `RumahTinggal`.
    pub fn get(&self, property: PropertyType, segment: Option<Segment>) -> &ModelHandle {
        match property {
            PropertyType::Ruko => &self.ruko[segment.unwrap_or_default().index()],
            PropertyType::RumahTinggal => &self.rumah_tinggal,
        }
    }
}

fn load_logged(
    path: &Path,
    load: impl FnOnce() -> Result<ModelHandle, ModelLoadError>,
) -> Result<ModelHandle, RegistryError> {
    match load() {
        Ok(handle) => {
            tracing::info!(
                "Loaded {} from {} ({} trees, {} features)",
                handle.title(),
                path.display(),
                handle.tree_count(),
                crate::schema::schema_of(&handle).len()
            );
            Ok(handle)
        }
        Err(source) => Err(RegistryError::Load {
            path: path.to_path_buf(),
            source,
        }),
    }
}
