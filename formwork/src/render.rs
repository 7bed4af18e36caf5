use std::collections::HashMap;

use formwork_types::{Field, FieldType, FieldValue, FormValues, Section, ValidationError, ValidationErrors};

/// Capability interface of one field-type renderer.
///
/// A renderer is a pure function from a field descriptor, its current value
/// and its current error to one backend control `C`. It does not raise
/// validation errors itself; rules live on the descriptor and are enforced
/// by the navigator, which hands the error map back in for display.
pub trait FieldRenderer<C> {
    /// Produce the control for one field.
    fn render(
        &self,
        field: &Field,
        value: Option<&FieldValue>,
        error: Option<&ValidationError>,
    ) -> C;
}

impl<C, F> FieldRenderer<C> for F
where
    F: Fn(&Field, Option<&FieldValue>, Option<&ValidationError>) -> C,
{
    fn render(
        &self,
        field: &Field,
        value: Option<&FieldValue>,
        error: Option<&ValidationError>,
    ) -> C {
        self(field, value, error)
    }
}

/// Mapping from field-type tag to its renderer.
///
/// Adding a field type is a registration, not an edit of a conditional
/// chain. A field whose type has no registered renderer renders as nothing:
/// [`render`](Self::render) returns `None` and
/// [`render_section`](Self::render_section) skips it silently.
pub struct RendererRegistry<C> {
    renderers: HashMap<FieldType, Box<dyn FieldRenderer<C>>>,
}

impl<C> RendererRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register the renderer for a field type, replacing any previous one.
    pub fn register(&mut self, kind: FieldType, renderer: impl FieldRenderer<C> + 'static) {
        self.renderers.insert(kind, Box::new(renderer));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, kind: FieldType, renderer: impl FieldRenderer<C> + 'static) -> Self {
        self.register(kind, renderer);
        self
    }

    /// Check if a field type has a registered renderer.
    pub fn supports(&self, kind: FieldType) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Render one field, looking up its value and error by field id.
    pub fn render(
        &self,
        field: &Field,
        values: &FormValues,
        errors: &ValidationErrors,
    ) -> Option<C> {
        let renderer = self.renderers.get(&field.kind)?;
        Some(renderer.render(
            field,
            values.get(&field.field_id),
            errors.get(&field.field_id),
        ))
    }

    /// Render every field of a section in display order, skipping fields
    /// whose type has no renderer.
    pub fn render_section(
        &self,
        section: &Section,
        values: &FormValues,
        errors: &ValidationErrors,
    ) -> Vec<C> {
        section
            .fields
            .iter()
            .filter_map(|field| self.render(field, values, errors))
            .collect()
    }
}

impl<C> Default for RendererRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_renderer(field: &Field, _: Option<&FieldValue>, _: Option<&ValidationError>) -> String {
        format!("[{}] {}", field.kind, field.label)
    }

    #[test]
    fn renders_registered_types() {
        let registry = RendererRegistry::new().with(FieldType::Text, label_renderer);
        let field = Field::new("name", FieldType::Text, "Name");

        let control = registry
            .render(&field, &FormValues::new(), &ValidationErrors::new())
            .unwrap();
        assert_eq!(control, "[text] Name");
    }

    #[test]
    fn unregistered_type_renders_nothing() {
        let registry = RendererRegistry::new().with(FieldType::Text, label_renderer);
        let field = Field::new("when", FieldType::Date, "When");

        assert!(!registry.supports(FieldType::Date));
        assert!(
            registry
                .render(&field, &FormValues::new(), &ValidationErrors::new())
                .is_none()
        );
    }

    #[test]
    fn section_skips_unrenderable_fields() {
        let registry = RendererRegistry::new().with(FieldType::Text, label_renderer);
        let section = Section::new(
            "A",
            "",
            vec![
                Field::new("name", FieldType::Text, "Name"),
                Field::new("when", FieldType::Date, "When"),
                Field::new("bio", FieldType::Text, "Bio"),
            ],
        );

        let controls =
            registry.render_section(&section, &FormValues::new(), &ValidationErrors::new());
        assert_eq!(controls, vec!["[text] Name", "[text] Bio"]);
    }

    #[test]
    fn renderer_sees_value_and_error() {
        let registry = RendererRegistry::new().with(
            FieldType::Text,
            |field: &Field, value: Option<&FieldValue>, error: Option<&ValidationError>| {
                format!(
                    "{}={} err={}",
                    field.field_id,
                    value.and_then(FieldValue::as_text).unwrap_or(""),
                    error.map(ToString::to_string).unwrap_or_default(),
                )
            },
        );
        let field = Field::new("name", FieldType::Text, "Name");

        let mut values = FormValues::new();
        values.set_text("name", "Alice");
        let mut errors = ValidationErrors::new();
        errors.insert("name", ValidationError::TooShort { min: 8 });

        let control = registry.render(&field, &values, &errors).unwrap();
        assert_eq!(control, "name=Alice err=Minimum length is 8");
    }
}
