//! Terminal renderers for the built-in field types.
//!
//! Each renderer turns one field, its current value and its current error
//! into a [`Control`]: the content lines drawn inside the field's block.
//! [`default_registry`] wires up all eight built-in types; a caller can
//! replace individual entries or register additional types on top.

use formwork::{Field, FieldType, FieldValue, RendererRegistry, ValidationError};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::Theme;

/// Shown in place of a dropdown's value while nothing is selected.
pub const DROPDOWN_PLACEHOLDER: &str = "Select an option";

/// The rendered content of one field, without its surrounding block.
#[derive(Debug, Clone, Default)]
pub struct Control {
    /// Content lines, in display order.
    pub lines: Vec<Line<'static>>,

    /// Index of the first option line, for selection fields. The backend
    /// overlays the keyboard highlight on `lines[options_start + n]`.
    pub options_start: Option<usize>,
}

impl Control {
    /// Total drawn height, including the surrounding block borders.
    pub fn height(&self) -> u16 {
        self.lines.len() as u16 + 2
    }
}

/// Registry with a renderer for every built-in field type.
pub fn default_registry(theme: &Theme) -> RendererRegistry<Control> {
    RendererRegistry::new()
        .with(FieldType::Text, single_line(theme.clone()))
        .with(FieldType::Tel, single_line(theme.clone()))
        .with(FieldType::Email, single_line(theme.clone()))
        .with(FieldType::Date, single_line(theme.clone()))
        .with(FieldType::Textarea, multi_line(theme.clone()))
        .with(FieldType::Dropdown, dropdown(theme.clone()))
        .with(FieldType::Radio, radio(theme.clone()))
        .with(FieldType::Checkbox, checkbox(theme.clone()))
}

fn single_line(
    theme: Theme,
) -> impl Fn(&Field, Option<&FieldValue>, Option<&ValidationError>) -> Control {
    move |field, value, error| {
        let mut lines = vec![text_line(field, value, &theme)];
        push_error(&mut lines, error, &theme);
        Control {
            lines,
            options_start: None,
        }
    }
}

fn multi_line(
    theme: Theme,
) -> impl Fn(&Field, Option<&FieldValue>, Option<&ValidationError>) -> Control {
    move |field, value, error| {
        let mut lines: Vec<Line<'static>> = match entered_text(value) {
            Some(text) => text
                .split('\n')
                .map(|row| {
                    Line::from(Span::styled(
                        row.to_owned(),
                        Style::default().fg(theme.text),
                    ))
                })
                .collect(),
            None => vec![placeholder_line(field, &theme)],
        };
        while lines.len() < 3 {
            lines.push(Line::default());
        }
        push_error(&mut lines, error, &theme);
        Control {
            lines,
            options_start: None,
        }
    }
}

fn dropdown(
    theme: Theme,
) -> impl Fn(&Field, Option<&FieldValue>, Option<&ValidationError>) -> Control {
    move |field, value, error| {
        let selected = value.and_then(FieldValue::as_text);
        let head = match selected.and_then(|v| field.options.iter().find(|o| o.value == v)) {
            Some(choice) => Line::from(Span::styled(
                format!("▾ {}", choice.label),
                Style::default().fg(theme.highlight),
            )),
            None => Line::from(Span::styled(
                format!("▾ {DROPDOWN_PLACEHOLDER}"),
                Style::default().fg(theme.border).add_modifier(Modifier::DIM),
            )),
        };
        let mut lines = vec![head];
        for choice in &field.options {
            let chosen = selected == Some(choice.value.as_str());
            lines.push(option_line(
                if chosen { "(●)" } else { "( )" },
                &choice.label,
                chosen,
                theme.highlight,
                &theme,
            ));
        }
        push_error(&mut lines, error, &theme);
        Control {
            lines,
            options_start: Some(1),
        }
    }
}

fn radio(
    theme: Theme,
) -> impl Fn(&Field, Option<&FieldValue>, Option<&ValidationError>) -> Control {
    move |field, value, error| {
        let selected = value.and_then(FieldValue::as_text);
        let mut lines = Vec::with_capacity(field.options.len() + 1);
        for choice in &field.options {
            let chosen = selected == Some(choice.value.as_str());
            lines.push(option_line(
                if chosen { "(●)" } else { "( )" },
                &choice.label,
                chosen,
                theme.highlight,
                &theme,
            ));
        }
        push_error(&mut lines, error, &theme);
        Control {
            lines,
            options_start: Some(0),
        }
    }
}

fn checkbox(
    theme: Theme,
) -> impl Fn(&Field, Option<&FieldValue>, Option<&ValidationError>) -> Control {
    move |field, value, error| {
        let checked = value.and_then(FieldValue::as_checked);
        let mut lines = Vec::with_capacity(field.options.len() + 1);
        for choice in &field.options {
            let chosen = checked.is_some_and(|set| set.contains(&choice.value));
            lines.push(option_line(
                if chosen { "[✓]" } else { "[ ]" },
                &choice.label,
                chosen,
                theme.success,
                &theme,
            ));
        }
        push_error(&mut lines, error, &theme);
        Control {
            lines,
            options_start: Some(0),
        }
    }
}

fn entered_text(value: Option<&FieldValue>) -> Option<&str> {
    value.and_then(FieldValue::as_text).filter(|t| !t.is_empty())
}

fn text_line(field: &Field, value: Option<&FieldValue>, theme: &Theme) -> Line<'static> {
    match entered_text(value) {
        Some(text) => Line::from(Span::styled(
            text.to_owned(),
            Style::default().fg(theme.text),
        )),
        None => placeholder_line(field, theme),
    }
}

fn placeholder_line(field: &Field, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        field.placeholder.clone().unwrap_or_default(),
        Style::default().fg(theme.border).add_modifier(Modifier::DIM),
    ))
}

fn option_line(
    marker: &str,
    label: &str,
    chosen: bool,
    chosen_color: ratatui::style::Color,
    theme: &Theme,
) -> Line<'static> {
    let style = if chosen {
        Style::default().fg(chosen_color)
    } else {
        Style::default().fg(theme.text)
    };
    Line::from(Span::styled(format!("{marker} {label}"), style))
}

fn push_error(lines: &mut Vec<Line<'static>>, error: Option<&ValidationError>, theme: &Theme) {
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("⚠ {error}"),
            Style::default().fg(theme.error),
        )));
    }
}
