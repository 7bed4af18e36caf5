use std::fmt;

use serde::Deserialize;

/// The input control kind of a field, as tagged on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line free text.
    Text,

    /// Telephone number input.
    Tel,

    /// Email address input.
    Email,

    /// Calendar date input.
    Date,

    /// Multi-line free text.
    Textarea,

    /// Single selection from a list, with a "no selection" placeholder entry.
    Dropdown,

    /// Single selection, one control per option.
    Radio,

    /// Multiple selection, one control per option.
    Checkbox,
}

impl FieldType {
    /// Check if this type selects from a list of options.
    pub fn is_selection(self) -> bool {
        matches!(self, Self::Dropdown | Self::Radio | Self::Checkbox)
    }

    /// Check if this type holds a set of values rather than a single one.
    pub fn is_multi(self) -> bool {
        self == Self::Checkbox
    }

    /// The wire tag for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Date => "date",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable option of a dropdown, radio or checkbox field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// The value stored when this option is chosen.
    pub value: String,

    /// The text shown for this option.
    pub label: String,

    /// Optional hook for UI test harnesses.
    #[serde(default)]
    pub test_id: Option<String>,
}

impl Choice {
    /// Create a new choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            test_id: None,
        }
    }
}

/// Metadata for one input, independent of its rendered control.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// The key for this field's value, unique across the whole schema.
    pub field_id: String,

    /// The input control kind.
    #[serde(rename = "type")]
    pub kind: FieldType,

    /// The label shown next to the control.
    pub label: String,

    /// Whether a non-empty value is needed to leave the section.
    #[serde(default)]
    pub required: bool,

    /// Minimum text length, in characters.
    #[serde(default)]
    pub min_length: Option<usize>,

    /// Maximum text length, in characters.
    #[serde(default)]
    pub max_length: Option<usize>,

    /// Hint text shown while the field is empty.
    #[serde(default)]
    pub placeholder: Option<String>,

    /// The options of a selection field; empty for text-like fields.
    #[serde(default)]
    pub options: Vec<Choice>,

    /// Optional hook for UI test harnesses.
    #[serde(default)]
    pub test_id: Option<String>,
}

impl Field {
    /// Create a new field with the given id, type and label.
    pub fn new(field_id: impl Into<String>, kind: FieldType, label: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            kind,
            label: label.into(),
            required: false,
            min_length: None,
            max_length: None,
            placeholder: None,
            options: Vec::new(),
            test_id: None,
        }
    }

    /// Mark this field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the minimum text length.
    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set the maximum text length.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the placeholder hint.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the selectable options.
    pub fn with_options(mut self, options: Vec<Choice>) -> Self {
        self.options = options;
        self
    }

    /// Set the test harness hook.
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Check if this field selects from a list of options.
    pub fn is_selection(&self) -> bool {
        self.kind.is_selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camel_case_keys() {
        let json = r#"{
            "fieldId": "phone",
            "type": "tel",
            "label": "Phone number",
            "required": true,
            "minLength": 10,
            "maxLength": 15,
            "placeholder": "+1 555 0100",
            "testId": "phone-input"
        }"#;
        let field: Field = serde_json::from_str(json).unwrap();

        assert_eq!(field.field_id, "phone");
        assert_eq!(field.kind, FieldType::Tel);
        assert!(field.required);
        assert_eq!(field.min_length, Some(10));
        assert_eq!(field.max_length, Some(15));
        assert_eq!(field.placeholder.as_deref(), Some("+1 555 0100"));
        assert_eq!(field.test_id.as_deref(), Some("phone-input"));
        assert!(field.options.is_empty());
    }

    #[test]
    fn deserialize_omitted_keys_default() {
        let json = r#"{ "fieldId": "name", "type": "text", "label": "Name" }"#;
        let field: Field = serde_json::from_str(json).unwrap();

        assert!(!field.required);
        assert_eq!(field.min_length, None);
        assert_eq!(field.placeholder, None);
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let json = r#"{ "fieldId": "x", "type": "slider", "label": "X" }"#;
        assert!(serde_json::from_str::<Field>(json).is_err());
    }

    #[test]
    fn selection_types() {
        assert!(FieldType::Dropdown.is_selection());
        assert!(FieldType::Radio.is_selection());
        assert!(FieldType::Checkbox.is_selection());
        assert!(!FieldType::Text.is_selection());
        assert!(FieldType::Checkbox.is_multi());
        assert!(!FieldType::Radio.is_multi());
    }

    #[test]
    fn choice_deserialize() {
        let json = r#"{ "value": "cs", "label": "Computer Science", "testId": "opt-cs" }"#;
        let choice: Choice = serde_json::from_str(json).unwrap();
        assert_eq!(choice.value, "cs");
        assert_eq!(choice.label, "Computer Science");
        assert_eq!(choice.test_id.as_deref(), Some("opt-cs"));
    }
}
