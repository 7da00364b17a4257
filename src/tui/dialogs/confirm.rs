//! Discard confirmation
//!
//! Simple yes/no question; anything but yes keeps the form open.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::editor::EditorEvent;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(50, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Discard  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" Keep editing"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let accepted = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return false,
    };
    app.close_dialog();
    app.dispatch(EditorEvent::DiscardConfirmed(accepted));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{MenuCommand, SessionState, TextField};
    use crate::tui::app::tests::Fixture;
    use crate::tui::app::{ActiveDialog, EditorExit};
    use crossterm::event::KeyModifiers;

    fn dirty_app_asking(fixture: &Fixture) -> App<'_> {
        let mut app = fixture.app(None);
        app.dispatch(EditorEvent::FieldChanged {
            field: TextField::Label,
            value: "Draft".into(),
        });
        app.dispatch(EditorEvent::Menu(MenuCommand::Cancel));
        assert!(matches!(
            app.active_dialog,
            ActiveDialog::ConfirmDiscard("Discard the new account?")
        ));
        app
    }

    #[test]
    fn test_no_keeps_editing() {
        let fixture = Fixture::new();
        let mut app = dirty_app_asking(&fixture);

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));
        assert!(!app.has_dialog());
        assert_eq!(app.form.state(), SessionState::Dirty);
        assert!(app.exit.is_none());
    }

    #[test]
    fn test_yes_discards() {
        let fixture = Fixture::new();
        let mut app = dirty_app_asking(&fixture);

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));
        assert_eq!(app.exit, Some(EditorExit::Cancelled));
    }
}
