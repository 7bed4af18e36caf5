use formwork_types::{Field, FieldValue, FormValues, Section, ValidationError, ValidationErrors};

/// Validate one field against the values entered so far.
///
/// An empty value only fails when the field is required; length constraints
/// apply to non-empty text values, measured in characters.
pub fn validate_field(field: &Field, values: &FormValues) -> Option<ValidationError> {
    let value = values.get(&field.field_id);
    if value.is_none_or(FieldValue::is_empty) {
        return field.required.then_some(ValidationError::Required);
    }
    if let Some(len) = value.and_then(FieldValue::text_len) {
        if let Some(min) = field.min_length
            && len < min
        {
            return Some(ValidationError::TooShort { min });
        }
        if let Some(max) = field.max_length
            && len > max
        {
            return Some(ValidationError::TooLong { max });
        }
    }
    None
}

/// Validate every field of a section together.
///
/// No short-circuit: every failing field is reported at once, so the user
/// sees all inline errors simultaneously.
pub fn validate_section(section: &Section, values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in &section.fields {
        if let Some(error) = validate_field(field, values) {
            errors.insert(field.field_id.clone(), error);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_types::{Choice, FieldType};

    fn text_field(id: &str) -> Field {
        Field::new(id, FieldType::Text, id.to_uppercase())
    }

    #[test]
    fn required_field_fails_when_missing() {
        let field = text_field("name").required();
        let values = FormValues::new();
        assert_eq!(validate_field(&field, &values), Some(ValidationError::Required));
    }

    #[test]
    fn required_field_fails_when_empty() {
        let field = text_field("name").required();
        let mut values = FormValues::new();
        values.set_text("name", "");
        assert_eq!(validate_field(&field, &values), Some(ValidationError::Required));
    }

    #[test]
    fn optional_field_passes_when_empty() {
        let field = text_field("nick").with_min_length(3);
        let values = FormValues::new();
        assert_eq!(validate_field(&field, &values), None);
    }

    #[test]
    fn length_bounds() {
        let field = text_field("bio").with_min_length(3).with_max_length(5);
        let mut values = FormValues::new();

        values.set_text("bio", "ab");
        assert_eq!(
            validate_field(&field, &values),
            Some(ValidationError::TooShort { min: 3 })
        );

        values.set_text("bio", "abcdef");
        assert_eq!(
            validate_field(&field, &values),
            Some(ValidationError::TooLong { max: 5 })
        );

        values.set_text("bio", "abcd");
        assert_eq!(validate_field(&field, &values), None);
    }

    #[test]
    fn required_checkbox_needs_a_checked_value() {
        let field = Field::new("hobbies", FieldType::Checkbox, "Hobbies")
            .required()
            .with_options(vec![Choice::new("chess", "Chess")]);
        let mut values = FormValues::new();
        assert_eq!(validate_field(&field, &values), Some(ValidationError::Required));

        values.toggle("hobbies", "chess");
        assert_eq!(validate_field(&field, &values), None);

        // Unchecking the only value empties the set again
        values.toggle("hobbies", "chess");
        assert_eq!(validate_field(&field, &values), Some(ValidationError::Required));
    }

    #[test]
    fn section_reports_every_failure_at_once() {
        let section = Section::new(
            "A",
            "",
            vec![
                text_field("a").required(),
                text_field("b").with_min_length(4),
                text_field("c").required(),
            ],
        );
        let mut values = FormValues::new();
        values.set_text("b", "xy");

        let errors = validate_section(&section, &values);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("a"), Some(&ValidationError::Required));
        assert_eq!(errors.get("b"), Some(&ValidationError::TooShort { min: 4 }));
        assert_eq!(errors.get("c"), Some(&ValidationError::Required));
    }
}
