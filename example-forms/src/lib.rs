//! Sample form schemas for formwork examples and tests.

pub mod event_feedback;
pub mod student_registration;

pub use event_feedback::event_feedback;
pub use student_registration::{STUDENT_REGISTRATION_JSON, student_registration};
