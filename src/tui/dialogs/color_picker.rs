//! Custom color picker
//!
//! Takes a hex color (`#RRGGBB`) and previews it before handing it to the
//! form. Leaving the dialog without a color reports "no selection".

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::editor::EditorEvent;
use crate::models::Rgb;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::swatch::swatch_color;

#[derive(Debug, Clone)]
pub struct ColorPickerState {
    pub input: TextInput,
    pub error: Option<String>,
}

impl ColorPickerState {
    pub fn new(current: Rgb) -> Self {
        let input = TextInput::new()
            .label("Hex")
            .max_len(7)
            .accept(|c| c == '#' || c.is_ascii_hexdigit())
            .focused(true);
        let input = if current.is_unset() {
            input
        } else {
            input.content(current.to_string())
        };
        Self { input, error: None }
    }

    /// The color typed so far, if it parses
    pub fn preview(&self) -> Option<Rgb> {
        Rgb::parse_hex(self.input.value())
    }
}

pub fn render(frame: &mut Frame, state: &ColorPickerState) {
    let area = centered_rect_fixed(40, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Pick a color ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let mut line = state.input.spans(Style::default().fg(Color::White));
    line.insert(0, Span::styled("Hex: ", Style::default().fg(Color::Cyan)));
    if let Some(rgb) = state.preview() {
        line.push(Span::raw("  "));
        line.push(Span::styled("████", Style::default().fg(swatch_color(rgb))));
    }
    frame.render_widget(Paragraph::new(Line::from(line)), rows[0]);

    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            rows[1],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Use color  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[3]);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ActiveDialog::ColorPicker(state) = &mut app.active_dialog else {
        return false;
    };

    let picked = match key.code {
        KeyCode::Esc => None,
        KeyCode::Enter if state.input.value().trim().is_empty() => None,
        KeyCode::Enter => match state.preview() {
            Some(rgb) if !rgb.is_unset() => Some(rgb),
            _ => {
                state.error = Some(format!("'{}' is not a color", state.input.value()));
                return true;
            }
        },
        KeyCode::Char(c) => {
            state.error = None;
            state.input.insert(c);
            return true;
        }
        KeyCode::Backspace => {
            state.error = None;
            state.input.backspace();
            return true;
        }
        KeyCode::Left => {
            state.input.move_left();
            return true;
        }
        KeyCode::Right => {
            state.input.move_right();
            return true;
        }
        _ => return false,
    };

    app.close_dialog();
    app.dispatch(EditorEvent::ColorPicked(picked));
    true
}
