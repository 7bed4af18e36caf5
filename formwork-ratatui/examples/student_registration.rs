//! Student registration demo: three sections, validated page by page.

use example_forms::student_registration;
use formwork::FormBackend;
use formwork_ratatui::RatatuiFormBackend;

fn main() -> anyhow::Result<()> {
    let backend = RatatuiFormBackend::new();
    let payload = backend.run(student_registration())?;
    println!("{payload:#?}");
    Ok(())
}
