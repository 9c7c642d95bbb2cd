use crate::form::{FormLayout, InputRow};
use crate::schema::FeatureSchema;

/// Inputs for the active model.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    /// Heading naming the active model.
    pub title: String,
    pub schema: FeatureSchema,
    pub layout: FormLayout,
    pub row: InputRow,
}

impl FormState {
    /// Fresh form with default values for every schema feature.
    pub fn for_schema(title: impl Into<String>, schema: FeatureSchema) -> Self {
        Self {
            title: title.into(),
            layout: FormLayout::new(&schema),
            row: InputRow::from_schema(&schema),
            schema,
        }
    }
}
