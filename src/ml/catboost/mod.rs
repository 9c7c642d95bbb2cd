//! CatBoost oblivious-tree regressor loaded from its JSON export.

mod model;

pub use model::{
    CatBoostError, CatBoostModel, FeaturesInfo, FloatFeature, ObliviousSplit, ObliviousTree,
};
