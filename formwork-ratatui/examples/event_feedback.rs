//! Event feedback demo with a custom color theme.

use example_forms::event_feedback;
use formwork::FormBackend;
use formwork_ratatui::{RatatuiFormBackend, Theme};
use ratatui::style::Color;

fn main() -> anyhow::Result<()> {
    let warm_theme = Theme {
        primary: Color::Magenta,
        secondary: Color::LightMagenta,
        background: Color::Reset,
        text: Color::White,
        highlight: Color::Yellow,
        error: Color::LightRed,
        success: Color::LightGreen,
        border: Color::DarkGray,
        selected_bg: Color::DarkGray,
    };

    let backend = RatatuiFormBackend::new().with_theme(warm_theme);
    let payload = backend.run(event_feedback())?;
    println!("{payload:#?}");
    Ok(())
}
