use std::collections::{BTreeSet, HashMap};

use crate::FieldValue;

/// Collected values of one form-filling session, keyed by field id.
///
/// Mutated incrementally through explicit setters as the user edits; read in
/// full only when the form is submitted. Going back to an earlier section
/// never removes anything from this map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    /// Create a new empty value map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the text of a text-like field.
    pub fn set_text(&mut self, field_id: impl Into<String>, text: impl Into<String>) {
        self.values
            .insert(field_id.into(), FieldValue::Text(text.into()));
    }

    /// Select the single option value of a dropdown or radio field.
    pub fn select(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(field_id.into(), FieldValue::Text(value.into()));
    }

    /// Toggle one option value of a checkbox field: checked values accumulate
    /// into a set, toggling a checked value removes it again.
    pub fn toggle(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        let field_id = field_id.into();
        let value = value.into();
        let set = match self.values.get_mut(&field_id) {
            Some(FieldValue::Checked(set)) => set,
            _ => {
                self.values
                    .insert(field_id.clone(), FieldValue::Checked(BTreeSet::new()));
                match self.values.get_mut(&field_id) {
                    Some(FieldValue::Checked(set)) => set,
                    _ => unreachable!("just inserted a Checked value"),
                }
            }
        };
        if !set.remove(&value) {
            set.insert(value);
        }
    }

    /// Remove the value of a field.
    pub fn clear(&mut self, field_id: &str) -> Option<FieldValue> {
        self.values.remove(field_id)
    }

    /// Get the value of a field.
    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    /// Get the text of a field, if it holds one.
    pub fn get_text(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).and_then(FieldValue::as_text)
    }

    /// Get the checked option values of a field, if it holds a set.
    pub fn get_checked(&self, field_id: &str) -> Option<&BTreeSet<String>> {
        self.get(field_id).and_then(FieldValue::as_checked)
    }

    /// Check if one option value of a field is currently checked or selected.
    pub fn is_chosen(&self, field_id: &str, value: &str) -> bool {
        match self.get(field_id) {
            Some(FieldValue::Text(s)) => s == value,
            Some(FieldValue::Checked(set)) => set.contains(value),
            None => false,
        }
    }

    /// Check if a field has a value at all.
    pub fn contains(&self, field_id: &str) -> bool {
        self.values.contains_key(field_id)
    }

    /// The number of fields with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no field has a value yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all field id / value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for FormValues {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_text() {
        let mut values = FormValues::new();
        values.set_text("name", "Alice");
        assert_eq!(values.get_text("name"), Some("Alice"));
        assert!(values.contains("name"));
        assert!(!values.contains("email"));
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut values = FormValues::new();
        values.select("gender", "male");
        values.select("gender", "female");
        assert_eq!(values.get_text("gender"), Some("female"));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn toggle_accumulates_a_set() {
        let mut values = FormValues::new();
        values.toggle("hobbies", "reading");
        values.toggle("hobbies", "chess");

        let checked = values.get_checked("hobbies").unwrap();
        assert_eq!(checked.len(), 2);
        assert!(checked.contains("reading"));
        assert!(checked.contains("chess"));
    }

    #[test]
    fn toggle_twice_unchecks() {
        let mut values = FormValues::new();
        values.toggle("hobbies", "reading");
        values.toggle("hobbies", "reading");

        assert!(values.get_checked("hobbies").unwrap().is_empty());
        assert!(values.get("hobbies").unwrap().is_empty());
    }

    #[test]
    fn is_chosen_covers_both_shapes() {
        let mut values = FormValues::new();
        values.select("gender", "other");
        values.toggle("hobbies", "chess");

        assert!(values.is_chosen("gender", "other"));
        assert!(!values.is_chosen("gender", "male"));
        assert!(values.is_chosen("hobbies", "chess"));
        assert!(!values.is_chosen("missing", "x"));
    }
}
