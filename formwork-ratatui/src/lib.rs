//! # formwork-ratatui
//!
//! Terminal backend for formwork.
//!
//! Shows one section per screen with Previous/Next/Submit navigation, the
//! way a paginated web form would. Fields are validated as a section when
//! the user tries to move forward; failures show inline under the field
//! and focus jumps to the first failing one.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formwork::{FormBackend, FormSchema};
//! use formwork_ratatui::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let schema = FormSchema::from_json(include_str!("schema.json"))?;
//!     let payload = RatatuiFormBackend::new().run(schema)?;
//!     println!("{payload:#?}");
//!     Ok(())
//! }
//! ```

mod backend;
mod render;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
pub use render::{Control, DROPDOWN_PLACEHOLDER, default_registry};
