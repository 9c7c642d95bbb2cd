//! Input form generated from a feature schema.

use std::collections::HashMap;

use crate::schema::FeatureSchema;

/// Number of side-by-side input columns.
pub const FORM_COLUMNS: usize = 3;
/// Initial value of every input.
pub const DEFAULT_VALUE: f64 = 0.0;
/// Increment applied by the step buttons.
pub const DEFAULT_STEP: f64 = 1.0;

/// Numeric entry control description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericControl {
    pub default: f64,
    pub step: f64,
}

impl Default for NumericControl {
    fn default() -> Self {
        Self {
            default: DEFAULT_VALUE,
            step: DEFAULT_STEP,
        }
    }
}

/// One labelled input placed in the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: String,
    /// Position in the schema.
    pub index: usize,
    pub column: usize,
    pub row: usize,
    pub control: NumericControl,
}

/// Row-major placement of one input per schema feature.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormLayout {
    fields: Vec<FormField>,
}

impl FormLayout {
    pub fn new(schema: &FeatureSchema) -> Self {
        let fields = schema
            .iter()
            .enumerate()
            .map(|(index, name)| FormField {
                name: name.to_string(),
                index,
                column: index % FORM_COLUMNS,
                row: index / FORM_COLUMNS,
                control: NumericControl::default(),
            })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Fields grouped by column, each column in schema order.
    pub fn columns(&self) -> [Vec<&FormField>; FORM_COLUMNS] {
        let mut columns: [Vec<&FormField>; FORM_COLUMNS] = Default::default();
        for field in &self.fields {
            columns[field.column].push(field);
        }
        columns
    }
}

/// Current value of every input, keyed by feature name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputRow {
    values: HashMap<String, f64>,
}

impl InputRow {
    /// Fresh row holding the default value for every schema feature.
    pub fn from_schema(schema: &FeatureSchema) -> Self {
        let values = schema
            .iter()
            .map(|name| (name.to_string(), DEFAULT_VALUE))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut f64> {
        self.values.get_mut(name)
    }

    /// Set a value, inserting the key if needed.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    /// Add `delta` to an existing value; returns the new value.
    pub fn step(&mut self, name: &str, delta: f64) -> Option<f64> {
        let value = self.values.get_mut(name)?;
        *value += delta;
        Some(*value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for InputRow {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(n: usize) -> FeatureSchema {
        FeatureSchema::new((0..n).map(|i| format!("f{i}")).collect())
    }

    #[test]
    fn fields_fill_columns_row_major() {
        let layout = FormLayout::new(&schema(7));
        let placement: Vec<(usize, usize)> = layout
            .fields()
            .iter()
            .map(|field| (field.column, field.row))
            .collect();
        assert_eq!(
            placement,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2)]
        );
        let columns = layout.columns();
        let names: Vec<Vec<&str>> = columns
            .iter()
            .map(|column| column.iter().map(|field| field.name.as_str()).collect())
            .collect();
        assert_eq!(names, vec![vec!["f0", "f3", "f6"], vec!["f1", "f4"], vec!["f2", "f5"]]);
    }

    #[test]
    fn controls_default_to_zero_with_unit_step() {
        let layout = FormLayout::new(&schema(4));
        assert!(layout
            .fields()
            .iter()
            .all(|field| field.control == NumericControl { default: 0.0, step: 1.0 }));
    }

    #[test]
    fn fresh_row_has_every_feature_at_zero() {
        let schema = schema(5);
        let row = InputRow::from_schema(&schema);
        assert_eq!(row.len(), 5);
        assert!(schema.iter().all(|name| row.get(name) == Some(0.0)));
    }

    #[test]
    fn step_adjusts_existing_values_only() {
        let mut row = InputRow::from_schema(&schema(1));
        assert_eq!(row.step("f0", 1.0), Some(1.0));
        assert_eq!(row.step("f0", -3.0), Some(-2.0));
        assert_eq!(row.step("missing", 1.0), None);
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn empty_schema_builds_empty_form() {
        let layout = FormLayout::new(&FeatureSchema::default());
        assert!(layout.fields().is_empty());
        assert!(layout.columns().iter().all(Vec::is_empty));
    }
}
