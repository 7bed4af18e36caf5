//! Scripted driver for filling forms without user interaction.
//!
//! `TestFill` walks a schema through the real interpreter — explicit
//! setters, section-by-section validation, submission, completion — with
//! pre-configured values. This is useful for testing schemas and anything
//! built on top of the engine.
//!
//! # Example
//!
//! ```
//! use formwork::{Field, FieldType, FormBackend, FormSchema, Section, TestFill};
//!
//! let schema = FormSchema::new(
//!     "T",
//!     vec![Section::new(
//!         "A",
//!         "",
//!         vec![Field::new("name", FieldType::Text, "Name").required()],
//!     )],
//! );
//!
//! let payload = TestFill::new().with_text("name", "Alice").run(schema).unwrap();
//! assert_eq!(payload.get_text("name"), Some("Alice"));
//! ```

use std::time::{Duration, Instant};

use formwork_types::{FieldValue, FormSchema, FormValues, SchemaError, ValidationErrors};

use crate::{FormBackend, FormInterpreter};

/// A scripted fill that applies pre-configured values.
#[derive(Debug, Clone, Default)]
pub struct TestFill {
    values: FormValues,
}

/// Error type for `TestFill`.
#[derive(Debug, thiserror::Error)]
pub enum TestFillError {
    /// The schema failed structural validation.
    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// A configured value names a field the schema does not have.
    #[error("no field '{0}' in the schema")]
    UnknownField(String),

    /// A section failed validation with the configured values.
    #[error("section '{title}' rejected: {errors:?}")]
    Rejected {
        title: String,
        errors: ValidationErrors,
    },
}

impl TestFill {
    /// Create a fill with no values configured.
    pub fn new() -> Self {
        Self {
            values: FormValues::new(),
        }
    }

    /// Configure the text of a text-like field.
    pub fn with_text(mut self, field_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.values.set_text(field_id, text);
        self
    }

    /// Configure the selected option value of a dropdown or radio field.
    pub fn with_selection(mut self, field_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.select(field_id, value);
        self
    }

    /// Configure the checked option values of a checkbox field.
    pub fn with_checked<I, S>(mut self, field_id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field_id = field_id.into();
        for value in values {
            self.values.toggle(field_id.clone(), value);
        }
        self
    }
}

impl FormBackend for TestFill {
    type Error = TestFillError;

    fn run(&self, schema: FormSchema) -> Result<FormValues, Self::Error> {
        for (field_id, _) in self.values.iter() {
            if schema.field(field_id).is_none() {
                return Err(TestFillError::UnknownField(field_id.to_string()));
            }
        }

        // Zero delay: the confirmation is not worth simulating in a script.
        let mut form = FormInterpreter::new().with_confirmation_delay(Duration::ZERO);
        form.supply_schema(schema)?;

        // Apply the canned values through the explicit setters.
        for (field_id, value) in self.values.iter() {
            match value {
                FieldValue::Text(text) => form.set_text(field_id, text.clone()),
                FieldValue::Checked(set) => {
                    for option_value in set {
                        form.toggle(field_id, option_value.clone());
                    }
                }
            }
        }

        // Walk forward through the real validation path.
        while !form.is_last_section() {
            let title = section_title(&form);
            if let Err(errors) = form.advance() {
                return Err(TestFillError::Rejected { title, errors });
            }
        }

        let title = section_title(&form);
        let now = Instant::now();
        if let Err(errors) = form.submit(now) {
            return Err(TestFillError::Rejected { title, errors });
        }
        form.poll_completion(now);

        Ok(form.take_submission().unwrap_or_default())
    }
}

fn section_title(form: &FormInterpreter) -> String {
    form.current_section()
        .map(|section| section.title.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_types::{Choice, Field, FieldType, Section};

    fn schema() -> FormSchema {
        FormSchema::new(
            "Signup",
            vec![
                Section::new(
                    "Identity",
                    "",
                    vec![Field::new("name", FieldType::Text, "Name").required()],
                ),
                Section::new(
                    "Preferences",
                    "",
                    vec![
                        Field::new("hobbies", FieldType::Checkbox, "Hobbies")
                            .required()
                            .with_options(vec![
                                Choice::new("chess", "Chess"),
                                Choice::new("reading", "Reading"),
                            ]),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn fills_every_section_and_returns_the_payload() {
        let payload = TestFill::new()
            .with_text("name", "Alice")
            .with_checked("hobbies", ["chess", "reading"])
            .run(schema())
            .unwrap();

        assert_eq!(payload.get_text("name"), Some("Alice"));
        assert_eq!(payload.get_checked("hobbies").unwrap().len(), 2);
    }

    #[test]
    fn reports_the_rejecting_section() {
        let err = TestFill::new().with_text("name", "Alice").run(schema()).unwrap_err();

        match err {
            TestFillError::Rejected { title, errors } => {
                assert_eq!(title, "Preferences");
                assert!(errors.contains("hobbies"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_values_for_unknown_fields() {
        let err = TestFill::new()
            .with_text("name", "Alice")
            .with_text("ghost", "boo")
            .run(schema())
            .unwrap_err();
        assert!(matches!(err, TestFillError::UnknownField(id) if id == "ghost"));
    }
}
