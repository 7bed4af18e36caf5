use formwork_types::{FormValues, Section, ValidationErrors};

use crate::validate::validate_section;

/// State machine over the active section index of one form-filling session.
///
/// The index always stays within `[0, section_count)`. Moving forward
/// validates the section being left as a unit; moving backward is
/// unconditional and never loses entered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    current: usize,
    count: usize,
}

impl SectionNavigator {
    /// Create a navigator positioned on the first section.
    ///
    /// `count` must be at least 1; `FormSchema::validate` guarantees this
    /// for any schema the interpreter accepts.
    pub fn new(count: usize) -> Self {
        debug_assert!(count >= 1, "a form needs at least one section");
        Self { current: 0, count }
    }

    /// The active section index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The number of sections.
    pub fn section_count(&self) -> usize {
        self.count
    }

    /// Check if the first section is active ("Previous" is hidden here).
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Check if the last section is active ("Submit" replaces "Next" here).
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.count
    }

    /// Validate the active section and advance to the next one.
    ///
    /// On failure the section does not change and the full error map is
    /// returned for inline display. Never advances past the last section.
    pub fn next(&mut self, section: &Section, values: &FormValues) -> Result<usize, ValidationErrors> {
        let errors = validate_section(section, values);
        if !errors.is_empty() {
            return Err(errors);
        }
        if self.current + 1 < self.count {
            self.current += 1;
        }
        Ok(self.current)
    }

    /// Move back one section, unconditionally. Never regresses below 0.
    pub fn prev(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Validate the final section for submission.
    ///
    /// Only enabled on the last section; the index does not change either
    /// way. A successful result signals the interpreter's transition into
    /// its submitted state.
    pub fn submit(&self, section: &Section, values: &FormValues) -> Result<(), ValidationErrors> {
        debug_assert!(self.is_last(), "submit is only enabled on the last section");
        let errors = validate_section(section, values);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
