use std::collections::HashSet;

use serde::Deserialize;

use crate::Field;

/// Error type for structurally invalid schemas.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema JSON could not be parsed (includes unrecognized field types).
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The schema has no sections to show.
    #[error("schema has no sections")]
    NoSections,

    /// The same field id appears more than once in the schema.
    #[error("duplicate field id: {0}")]
    DuplicateFieldId(String),

    /// A dropdown, radio or checkbox field has nothing to select.
    #[error("selection field '{0}' has no options")]
    NoOptions(String),
}

/// One page of a multi-section form.
///
/// Field order is significant: it defines display order within the section,
/// and the section's position in the schema defines navigation order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// The heading shown for this section.
    pub title: String,

    /// Explanatory text shown under the heading.
    #[serde(default)]
    pub description: String,

    /// The fields of this section, in display order.
    pub fields: Vec<Field>,
}

impl Section {
    /// Create a new section with the given fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields,
        }
    }

    /// Look up a field of this section by id.
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_id == field_id)
    }

    /// The field ids of this section, in display order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.field_id.as_str())
    }
}

/// The server-supplied description of a whole form.
///
/// Immutable once received; owned by the interpreter for the lifetime of one
/// form-filling session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    /// The title shown above every section.
    pub form_title: String,

    /// The sections of the form, in navigation order.
    pub sections: Vec<Section>,
}

impl FormSchema {
    /// Create a new schema with the given sections.
    pub fn new(form_title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            form_title: form_title.into(),
            sections,
        }
    }

    /// Parse and validate a schema from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Check the structural invariants the interpreter relies on:
    /// at least one section, unique field ids, options on selection fields.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.sections.is_empty() {
            return Err(SchemaError::NoSections);
        }
        let mut seen = HashSet::new();
        for field in self.fields() {
            if !seen.insert(field.field_id.as_str()) {
                return Err(SchemaError::DuplicateFieldId(field.field_id.clone()));
            }
            if field.is_selection() && field.options.is_empty() {
                return Err(SchemaError::NoOptions(field.field_id.clone()));
            }
        }
        Ok(())
    }

    /// Get a section by index.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// The number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Iterate over every field of every section, in display order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    /// Look up a field anywhere in the schema by id.
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields().find(|f| f.field_id == field_id)
    }
}
