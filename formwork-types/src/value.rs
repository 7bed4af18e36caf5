use std::collections::BTreeSet;

/// A single collected field value.
///
/// Text-like fields, dropdowns and radios hold one string; checkboxes hold
/// the set of checked option values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, or the single selected option value.
    Text(String),

    /// The checked option values of a checkbox field.
    Checked(BTreeSet<String>),
}

impl FieldValue {
    /// Create a text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a checkbox value from the given checked option values.
    pub fn checked<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Checked(values.into_iter().map(Into::into).collect())
    }

    /// Try to get this value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Checked(_) => None,
        }
    }

    /// Try to get this value as a set of checked option values.
    pub fn as_checked(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Checked(set) => Some(set),
            Self::Text(_) => None,
        }
    }

    /// Check if this value counts as empty for required-field validation.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Checked(set) => set.is_empty(),
        }
    }

    /// The text length in characters, for min/max length validation.
    /// Checkbox values have no text length.
    pub fn text_len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.chars().count()),
            Self::Checked(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
