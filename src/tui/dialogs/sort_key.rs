//! Sort key dialog
//!
//! Digits-only input limited to the length the form asks for.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::editor::{DialogResult, EditorEvent, SortKeyRequest};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

#[derive(Debug, Clone)]
pub struct SortKeyDialogState {
    pub title: &'static str,
    pub input: TextInput,
}

impl SortKeyDialogState {
    pub fn new(request: &SortKeyRequest) -> Self {
        Self {
            title: request.title,
            input: TextInput::new()
                .max_len(request.max_len)
                .accept(|c| c.is_ascii_digit())
                .content(request.current.as_str())
                .focused(true),
        }
    }
}

pub fn render(frame: &mut Frame, state: &SortKeyDialogState) {
    let area = centered_rect_fixed(36, 6, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", state.title))
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
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&state.input, rows[1]);
    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Set  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[2]);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ActiveDialog::SortKey(state) = &mut app.active_dialog else {
        return false;
    };

    let result = match key.code {
        KeyCode::Enter => DialogResult::Submitted(state.input.value().to_string()),
        KeyCode::Esc => DialogResult::Cancelled,
        KeyCode::Char(c) => {
            state.input.insert(c);
            return true;
        }
        KeyCode::Backspace => {
            state.input.backspace();
            return true;
        }
        KeyCode::Delete => {
            state.input.delete();
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
    app.dispatch(EditorEvent::SortKeyEntered(result));
    true
}
