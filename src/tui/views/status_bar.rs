//! Status bar view
//!
//! Shows the session state and the function-key menu.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::SessionState;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let menu = app.form.menu_state();
    let (state_text, state_color) = match app.form.state() {
        SessionState::Loaded => ("unchanged", Color::Green),
        SessionState::Dirty => ("modified", Color::Yellow),
        SessionState::Saved => ("saved", Color::Green),
        SessionState::Discarded => ("discarded", Color::Red),
    };

    // Keys go to the open dialog, not the menu
    let key_style = if menu.enabled && !app.has_dialog() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let exclude = if menu.exclude_from_totals_checked {
        "[x]"
    } else {
        "[ ]"
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state_text),
            Style::default().fg(state_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled("F2", key_style),
        Span::raw(" Sort key  "),
        Span::styled("F3", key_style),
        Span::raw(format!(" Exclude from totals {}  ", exclude)),
        Span::styled("F4", key_style),
        Span::raw(" Custom color  "),
        Span::styled("^S", key_style),
        Span::raw(" Save"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
