//! # formwork
//!
//! Interpret server-supplied form schemas as paginated, validated forms.
//! Backend-agnostic.
//!
//! A [`FormSchema`] describes a multi-section form: each section is one page
//! of fields, and each field carries its own validation rules. The
//! [`FormInterpreter`] owns one form-filling session: it tracks the active
//! section, routes user edits into a [`FormValues`] map, validates a section
//! as a unit before letting the user advance, and latches into a submitted
//! state once the final section passes.
//!
//! ## Usage
//!
//! ```
//! use std::time::Instant;
//! use formwork::{FormInterpreter, FormSchema, Phase};
//!
//! let schema = FormSchema::from_json(
//!     r#"{ "formTitle": "T", "sections": [ { "title": "A", "description": "",
//!          "fields": [ { "fieldId": "x", "type": "text", "label": "X",
//!                        "required": true } ] } ] }"#,
//! )
//! .unwrap();
//!
//! let mut form = FormInterpreter::new();
//! form.supply_schema(schema).unwrap();
//! assert_eq!(form.phase(), Phase::Active);
//!
//! form.set_text("x", "ok");
//! form.submit(Instant::now()).unwrap();
//! assert_eq!(form.phase(), Phase::Submitted);
//! ```
//!
//! ## Backends
//!
//! Backends implement [`FormBackend`]: they decide how to present the form
//! (terminal, GUI, scripted) and drive the interpreter with user input.
//! `formwork-ratatui` provides a terminal form; [`TestFill`] fills a form
//! programmatically for tests.

// Re-export all types from formwork-types
pub use formwork_types::*;

mod backend;
pub use backend::FormBackend;

mod validate;
pub use validate::{validate_field, validate_section};

mod navigator;
pub use navigator::SectionNavigator;

mod completion;
pub use completion::CompletionTimer;

mod interpreter;
pub use interpreter::{FormInterpreter, Phase};

mod render;
pub use render::{FieldRenderer, RendererRegistry};

// Scripted driver for filling forms without user interaction
mod test_fill;
pub use test_fill::{TestFill, TestFillError};
