//! Gradient-boosted regression trees exported from scikit-learn.
//!
//! The JSON artifact mirrors the fitted estimator's node arrays so the segment
//! models can be evaluated without a Python runtime:
//! - `init_value + learning_rate * sum(tree(x))` regression output.
//! - Impurity-based feature importances with the same normalization as training.

mod model;

pub use model::{GradientBoostingError, GradientBoostingModel, RegressionTree, TREE_LEAF};
