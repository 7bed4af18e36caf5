//! Core types for the formwork crate.
//!
//! This crate provides the foundational types for schema-driven forms:
//! - `FormSchema` and `Section` - The server-supplied form structure
//! - `Field`, `FieldType` and `Choice` - Individual field descriptors
//! - `FormValues` and `FieldValue` - Collected user input, keyed by field id
//! - `ValidationError` and `ValidationErrors` - Per-field validation failures
//!
//! The schema is consumed, not authored, by this crate: it arrives as JSON
//! from an external collaborator and is treated as the authoritative
//! structure for one form-filling session.

mod field;
pub use field::{Choice, Field, FieldType};

mod schema;
pub use schema::{FormSchema, SchemaError, Section};

mod value;
pub use value::FieldValue;

mod values;
pub use values::FormValues;

mod validation;
pub use validation::{ValidationError, ValidationErrors};
