//! Paginated terminal form driving a [`FormInterpreter`].
//!
//! One section fills the screen at a time. Tab walks the section's fields
//! and then the navigation buttons; a rejected Next or Submit keeps the
//! section on screen with inline errors and jumps focus to the first
//! failing field. After submission a confirmation screen is shown until
//! the interpreter's completion timer fires.

use std::collections::HashMap;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use formwork::{
    Field, FieldType, FormBackend, FormInterpreter, FormSchema, FormValues, Phase, RendererRegistry,
    SchemaError, Section,
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use thiserror::Error;

use crate::render::{Control, default_registry};

/// How often the UI redraws while idle; also the confirmation poll cadence.
const TICK: Duration = Duration::from_millis(250);

/// Error type for the Ratatui form backend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// User cancelled the form (pressed Esc).
    #[error("form cancelled by user")]
    Cancelled,

    /// The schema failed structural validation.
    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Ratatui form backend showing one section per screen.
#[derive(Debug, Clone)]
pub struct RatatuiFormBackend {
    theme: Theme,
}

impl Default for RatatuiFormBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFormBackend {
    /// Create a new Ratatui form backend with the default theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiFormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn drive(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        schema: FormSchema,
    ) -> Result<FormValues, RatatuiFormError> {
        let mut session = Session::new(schema, self.theme.clone())?;

        loop {
            terminal.draw(|frame| session.draw(frame))?;

            let timeout = session
                .form
                .completion_timer()
                .map_or(TICK, |timer| timer.remaining(Instant::now()).min(TICK));
            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
            {
                session.handle_key(key);
            }

            if session.cancelled {
                return Err(RatatuiFormError::Cancelled);
            }
            if session.form.poll_completion(Instant::now()) {
                return Ok(session.form.take_submission().unwrap_or_default());
            }
        }
    }
}

impl FormBackend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn run(&self, schema: FormSchema) -> Result<FormValues, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.drive(&mut terminal, schema);
        self.restore_terminal(&mut terminal)?;
        result
    }
}

/// One navigation button of the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormButton {
    Previous,
    Next,
    Submit,
}

impl FormButton {
    fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
            Self::Submit => "Submit",
        }
    }
}

/// Keyboard focus within the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// A field, by index into the active section's field list.
    Field(usize),
    /// A navigation button, by index into the visible button row.
    Button(usize),
}

/// Live state of one terminal form-filling session.
struct Session {
    form: FormInterpreter,
    registry: RendererRegistry<Control>,
    theme: Theme,
    focus: Focus,
    /// Char-indexed cursor per text-like field.
    cursors: HashMap<String, usize>,
    /// Keyboard highlight per selection field.
    highlights: HashMap<String, usize>,
    scroll: u16,
    cancelled: bool,
}

impl Session {
    fn new(schema: FormSchema, theme: Theme) -> Result<Self, SchemaError> {
        let registry = default_registry(&theme);
        let mut form = FormInterpreter::new();
        form.supply_schema(schema)?;
        let mut session = Self {
            form,
            registry,
            theme,
            focus: Focus::Button(0),
            cursors: HashMap::new(),
            highlights: HashMap::new(),
            scroll: 0,
            cancelled: false,
        };
        session.enter_section();
        Ok(session)
    }

    fn section(&self) -> Option<&Section> {
        self.form.current_section()
    }

    /// Indices of the active section's fields that have a renderer.
    fn focusable(&self) -> Vec<usize> {
        self.section().map_or_else(Vec::new, |section| {
            section
                .fields
                .iter()
                .enumerate()
                .filter(|(_, field)| self.registry.supports(field.kind))
                .map(|(i, _)| i)
                .collect()
        })
    }

    /// The visible navigation buttons: Previous only past the first
    /// section, Submit instead of Next on the last one.
    fn buttons(&self) -> Vec<FormButton> {
        let mut buttons = Vec::new();
        if !self.form.is_first_section() {
            buttons.push(FormButton::Previous);
        }
        buttons.push(if self.form.is_last_section() {
            FormButton::Submit
        } else {
            FormButton::Next
        });
        buttons
    }

    /// Reset focus and scroll after a section change.
    fn enter_section(&mut self) {
        self.scroll = 0;
        self.focus = match self.focusable().first() {
            Some(&idx) => Focus::Field(idx),
            None => Focus::Button(0),
        };
    }

    fn focused_field(&self) -> Option<&Field> {
        match self.focus {
            Focus::Field(idx) => self.section()?.fields.get(idx),
            Focus::Button(_) => None,
        }
    }

    fn on_selection(&self) -> bool {
        self.focused_field().is_some_and(Field::is_selection)
    }

    fn next_focus(&mut self) {
        match self.focus {
            Focus::Field(idx) => {
                let fields = self.focusable();
                let pos = fields.iter().position(|&i| i == idx);
                match pos.and_then(|p| fields.get(p + 1)) {
                    Some(&next) => self.focus = Focus::Field(next),
                    None => self.focus = Focus::Button(0),
                }
            }
            Focus::Button(b) => {
                if b + 1 < self.buttons().len() {
                    self.focus = Focus::Button(b + 1);
                }
            }
        }
    }

    fn prev_focus(&mut self) {
        match self.focus {
            Focus::Field(idx) => {
                let fields = self.focusable();
                if let Some(pos) = fields.iter().position(|&i| i == idx)
                    && pos > 0
                {
                    self.focus = Focus::Field(fields[pos - 1]);
                }
            }
            Focus::Button(0) => {
                if let Some(&last) = self.focusable().last() {
                    self.focus = Focus::Field(last);
                }
            }
            Focus::Button(b) => self.focus = Focus::Button(b - 1),
        }
    }

    /// Jump to the first field the last rejected transition flagged.
    fn focus_first_error(&mut self) {
        let Some(field_id) = self.form.errors().first_field().map(str::to_owned) else {
            return;
        };
        let Some(section) = self.section() else { return };
        if let Some(idx) = section
            .fields
            .iter()
            .position(|field| field.field_id == field_id)
        {
            self.focus = Focus::Field(idx);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.form.phase() == Phase::Submitted {
            // Only teardown is possible from the confirmation screen.
            if key.code == KeyCode::Esc {
                self.form.cancel_completion();
                self.cancelled = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancelled = true,
            KeyCode::BackTab => self.prev_focus(),
            KeyCode::Tab => self.next_focus(),
            KeyCode::Up => {
                if self.on_selection() {
                    self.option_move(-1);
                } else {
                    self.prev_focus();
                }
            }
            KeyCode::Down => {
                if self.on_selection() {
                    self.option_move(1);
                } else {
                    self.next_focus();
                }
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') if self.on_selection() => self.choose(),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_cursor(|cursor, _| cursor.saturating_sub(1)),
            KeyCode::Right => self.move_cursor(|cursor, len| (cursor + 1).min(len)),
            KeyCode::Home => self.move_cursor(|_, _| 0),
            KeyCode::End => self.move_cursor(|_, len| len),
            _ => {}
        }
    }

    /// Enter: select an option, insert a newline in a textarea, press the
    /// focused button, or move on to the next field.
    fn activate(&mut self) {
        match self.focus {
            Focus::Field(_) => {
                if self.on_selection() {
                    self.choose();
                } else if self
                    .focused_field()
                    .is_some_and(|f| f.kind == FieldType::Textarea)
                {
                    self.insert_char('\n');
                } else {
                    self.next_focus();
                }
            }
            Focus::Button(b) => match self.buttons().get(b).copied() {
                Some(FormButton::Previous) => {
                    self.form.retreat();
                    self.enter_section();
                }
                Some(FormButton::Next) => match self.form.advance() {
                    Ok(_) => self.enter_section(),
                    Err(_) => self.focus_first_error(),
                },
                Some(FormButton::Submit) => {
                    if self.form.submit(Instant::now()).is_err() {
                        self.focus_first_error();
                    }
                }
                None => {}
            },
        }
    }

    /// Move the keyboard highlight within the focused selection field.
    fn option_move(&mut self, delta: isize) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let count = field.options.len();
        if count == 0 {
            return;
        }
        let id = field.field_id.clone();
        let current = self.highlights.get(&id).copied().unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(count as isize) as usize;
        self.highlights.insert(id, next);
    }

    /// Apply the highlighted option: toggles a checkbox, selects otherwise.
    fn choose(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let id = field.field_id.clone();
        let multi = field.kind.is_multi();
        let highlight = self.highlights.get(&id).copied().unwrap_or(0);
        let Some(value) = field.options.get(highlight).map(|c| c.value.clone()) else {
            return;
        };
        if multi {
            self.form.toggle(&id, value);
        } else {
            self.form.select(&id, value);
        }
    }

    /// Apply an edit to the focused text-like field's value and cursor.
    fn edit_text(&mut self, edit: impl FnOnce(&mut String, &mut usize)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.is_selection() {
            return;
        }
        let id = field.field_id.clone();
        let mut text = self.form.values().get_text(&id).unwrap_or("").to_owned();
        let len = text.chars().count();
        let mut cursor = self.cursors.get(&id).copied().unwrap_or(len).min(len);
        edit(&mut text, &mut cursor);
        self.cursors.insert(id.clone(), cursor);
        self.form.set_text(&id, text);
    }

    /// Move the cursor without touching the value or its error.
    fn move_cursor(&mut self, update: impl FnOnce(usize, usize) -> usize) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.is_selection() {
            return;
        }
        let id = field.field_id.clone();
        let len = self
            .form
            .values()
            .get_text(&id)
            .map_or(0, |t| t.chars().count());
        let cursor = self.cursors.get(&id).copied().unwrap_or(len).min(len);
        self.cursors.insert(id, update(cursor, len).min(len));
    }

    fn insert_char(&mut self, c: char) {
        self.edit_text(|text, cursor| {
            text.insert(byte_index(text, *cursor), c);
            *cursor += 1;
        });
    }

    fn backspace(&mut self) {
        self.edit_text(|text, cursor| {
            if *cursor > 0 {
                *cursor -= 1;
                text.remove(byte_index(text, *cursor));
            }
        });
    }

    fn delete(&mut self) {
        self.edit_text(|text, cursor| {
            if *cursor < text.chars().count() {
                text.remove(byte_index(text, *cursor));
            }
        });
    }

    fn draw(&mut self, frame: &mut Frame) {
        if self.form.phase() == Phase::Submitted {
            self.draw_confirmation(frame);
        } else {
            self.draw_form(frame);
        }
    }

    fn draw_form(&mut self, frame: &mut Frame) {
        let Some(schema) = self.form.schema() else {
            return;
        };
        let form_title = schema.form_title.clone();
        let section_count = schema.section_count();
        let Some(section) = self.section().cloned() else {
            return;
        };
        let index = self.form.section_index();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // form title
                Constraint::Length(2), // section header
                Constraint::Min(5),    // fields
                Constraint::Length(3), // navigation buttons
                Constraint::Length(1), // help bar
            ])
            .split(frame.area());

        let title = Paragraph::new(form_title)
            .style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(self.theme.border)),
            );
        frame.render_widget(title, chunks[0]);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Section {} of {}: {}", index + 1, section_count, section.title),
                Style::default()
                    .fg(self.theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                section.description.clone(),
                Style::default().fg(self.theme.border),
            )),
        ]);
        frame.render_widget(header, chunks[1]);

        self.draw_fields(frame, &section, chunks[2]);
        self.draw_buttons(frame, chunks[3]);

        let help = Paragraph::new("Tab: Next  Shift+Tab: Back  ↑/↓: Options  Enter: Select  Esc: Cancel")
            .style(Style::default().fg(self.theme.border));
        frame.render_widget(help, chunks[4]);
    }

    fn draw_fields(&mut self, frame: &mut Frame, section: &Section, viewport: Rect) {
        let mut controls: Vec<(usize, Control)> = section
            .fields
            .iter()
            .enumerate()
            .filter_map(|(i, field)| {
                self.registry
                    .render(field, self.form.values(), self.form.errors())
                    .map(|control| (i, control))
            })
            .collect();

        // Overlay the keyboard highlight on the focused selection field.
        if let Focus::Field(focused) = self.focus
            && let Some(field) = section.fields.get(focused)
            && field.is_selection()
        {
            let highlight = self.highlights.get(&field.field_id).copied().unwrap_or(0);
            if let Some((_, control)) = controls.iter_mut().find(|(i, _)| *i == focused)
                && let Some(start) = control.options_start
                && let Some(line) = control.lines.get_mut(start + highlight)
            {
                let styled = std::mem::take(line);
                *line = styled.style(
                    Style::default()
                        .bg(self.theme.selected_bg)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }

        // Keep the focused field inside the viewport.
        if let Focus::Field(focused) = self.focus {
            let mut y = 0u16;
            for (i, control) in &controls {
                let height = control.height();
                if *i == focused {
                    if y < self.scroll {
                        self.scroll = y;
                    }
                    if y + height > self.scroll + viewport.height {
                        self.scroll = (y + height).saturating_sub(viewport.height);
                    }
                    break;
                }
                y += height;
            }
        }

        let mut y = 0u16;
        for (i, control) in controls {
            let height = control.height();
            let top = y;
            y += height;

            if top + height <= self.scroll {
                continue;
            }
            if top >= self.scroll + viewport.height {
                break;
            }
            // Fields clipped at the top look broken; skip them.
            if top < self.scroll {
                continue;
            }

            let visible = height.min(viewport.height - (top - self.scroll));
            let area = Rect {
                x: viewport.x,
                y: viewport.y + top - self.scroll,
                width: viewport.width,
                height: visible,
            };
            let focused = self.focus == Focus::Field(i);
            self.draw_field(frame, &section.fields[i], control, area, focused);
        }
    }

    fn draw_field(
        &self,
        frame: &mut Frame,
        field: &Field,
        control: Control,
        area: Rect,
        focused: bool,
    ) {
        let border = if self.form.errors().contains(&field.field_id) {
            self.theme.error
        } else if focused {
            self.theme.primary
        } else {
            self.theme.border
        };
        let mut title = field.label.clone();
        if field.required {
            title.push_str(" *");
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {title} "))
            .title_style(Style::default().fg(if focused {
                self.theme.highlight
            } else {
                self.theme.text
            }));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(control.lines), inner);

        if focused && !field.is_selection() {
            let text = self.form.values().get_text(&field.field_id).unwrap_or("");
            let cursor = self
                .cursors
                .get(&field.field_id)
                .copied()
                .unwrap_or_else(|| text.chars().count());
            let (row, col) = cursor_row_col(text, cursor);
            let x = inner.x + col;
            let y = inner.y + row;
            if x < inner.x + inner.width && y < inner.y + inner.height {
                frame.set_cursor_position((x, y));
            }
        }
    }

    fn draw_buttons(&self, frame: &mut Frame, area: Rect) {
        let buttons = self.buttons();
        let constraints: Vec<Constraint> = buttons
            .iter()
            .map(|_| Constraint::Ratio(1, buttons.len() as u32))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (b, button) in buttons.iter().enumerate() {
            let focused = self.focus == Focus::Button(b);
            let style = if focused {
                Style::default()
                    .fg(self.theme.text)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            };
            let widget = Paragraph::new(button.label())
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(if focused {
                            self.theme.primary
                        } else {
                            self.theme.border
                        })),
                );
            frame.render_widget(widget, cells[b]);
        }
    }

    fn draw_confirmation(&self, frame: &mut Frame) {
        let remaining = self
            .form
            .completion_timer()
            .map_or(Duration::ZERO, |timer| timer.remaining(Instant::now()));

        let lines = vec![
            Line::from(Span::styled(
                "Form submitted successfully!",
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("Closing in {}s", remaining.as_secs_f32().ceil() as u64),
                Style::default().fg(self.theme.border),
            )),
        ];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(5),
                Constraint::Fill(1),
            ])
            .split(frame.area());
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(44),
                Constraint::Fill(1),
            ])
            .split(rows[1]);

        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.success)),
        );
        frame.render_widget(widget, cells[1]);
    }
}

fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

fn cursor_row_col(text: &str, cursor: usize) -> (u16, u16) {
    let mut row = 0u16;
    let mut col = 0u16;
    for c in text.chars().take(cursor) {
        if c == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (row, col)
}
