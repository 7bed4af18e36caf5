use std::collections::BTreeMap;

/// A single field's validation failure, shown inline next to the field.
///
/// Recovered locally by the user editing the field; never surfaced to the
/// interpreter's caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field has no value.
    #[error("This field is required")]
    Required,

    /// A text value is shorter than the field's minimum length.
    #[error("Minimum length is {min}")]
    TooShort { min: usize },

    /// A text value is longer than the field's maximum length.
    #[error("Maximum length is {max}")]
    TooLong { max: usize },
}

/// Validation failures of one section, keyed by field id.
///
/// A section is validated as a unit: every failing field appears here at
/// once, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty error map.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Record a failure for a field.
    pub fn insert(&mut self, field_id: impl Into<String>, error: ValidationError) {
        self.errors.insert(field_id.into(), error);
    }

    /// Get the failure recorded for a field, if any.
    pub fn get(&self, field_id: &str) -> Option<&ValidationError> {
        self.errors.get(field_id)
    }

    /// Drop the failure recorded for a field.
    pub fn remove(&mut self, field_id: &str) -> Option<ValidationError> {
        self.errors.remove(field_id)
    }

    /// Check if a field currently has a recorded failure.
    pub fn contains(&self, field_id: &str) -> bool {
        self.errors.contains_key(field_id)
    }

    /// Check if the section passed validation.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Drop all recorded failures.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// The first failing field id in key order, for focusing.
    pub fn first_field(&self) -> Option<&str> {
        self.errors.keys().next().map(String::as_str)
    }

    /// Iterate over all field id / failure pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (String, ValidationError);
    type IntoIter = std::collections::btree_map::IntoIter<String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a String, &'a ValidationError);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_inline_texts() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(
            ValidationError::TooShort { min: 3 }.to_string(),
            "Minimum length is 3"
        );
        assert_eq!(
            ValidationError::TooLong { max: 10 }.to_string(),
            "Maximum length is 10"
        );
    }

    #[test]
    fn insert_and_query() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.insert("name", ValidationError::Required);
        errors.insert("bio", ValidationError::TooShort { min: 5 });

        assert_eq!(errors.len(), 2);
        assert!(errors.contains("name"));
        assert_eq!(errors.get("bio"), Some(&ValidationError::TooShort { min: 5 }));
        assert_eq!(errors.first_field(), Some("bio"));

        errors.remove("bio");
        assert_eq!(errors.first_field(), Some("name"));
    }
}
