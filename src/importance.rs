//! Ranked feature-importance report with static annotations.

use crate::annotations;
use crate::ml::{ModelHandle, Regressor};
use crate::schema::FeatureSchema;

/// Number of features listed in the interpretation summary.
pub const TOP_FEATURES: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct ImportanceRow {
    pub feature: String,
    /// Score exactly as reported by the model.
    pub score: f64,
    pub kind: &'static str,
    pub description: &'static str,
    pub interpretation: &'static str,
}

/// Rows sorted by descending score; ties keep schema order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportanceTable {
    rows: Vec<ImportanceRow>,
}

impl ImportanceTable {
    /// Build a table from names and positionally aligned scores.
    pub fn from_scores(schema: &FeatureSchema, scores: &[f64]) -> Self {
        let mut rows: Vec<ImportanceRow> = schema
            .iter()
            .zip(scores.iter().copied())
            .map(|(feature, score)| {
                let annotation = annotations::annotate(feature);
                ImportanceRow {
                    feature: feature.to_string(),
                    score,
                    kind: annotation.kind,
                    description: annotation.description,
                    interpretation: annotation.interpretation,
                }
            })
            .collect();
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { rows }
    }

    pub fn rows(&self) -> &[ImportanceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows of the ranking.
    pub fn top(&self, n: usize) -> &[ImportanceRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// `(feature, interpretation)` lines for the most influential features.
    pub fn narrative(&self) -> Vec<(&str, &'static str)> {
        self.top(TOP_FEATURES)
            .iter()
            .map(|row| (row.feature.as_str(), row.interpretation))
            .collect()
    }

    /// Largest score, used to scale the bar chart.
    pub fn max_score(&self) -> f64 {
        self.rows.first().map(|row| row.score).unwrap_or(0.0)
    }
}

/// Rank the active model's importances against its schema.
pub fn report(handle: &ModelHandle, schema: &FeatureSchema) -> ImportanceTable {
    let scores = handle.feature_importances();
    if scores.len() != schema.len() {
        tracing::warn!(
            "{} reported {} importances for {} features",
            handle.title(),
            scores.len(),
            schema.len()
        );
    }
    ImportanceTable::from_scores(schema, &scores)
}
