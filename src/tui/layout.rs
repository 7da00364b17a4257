//! Layout definitions for the TUI
//!
//! The screen is the form panel above a one-line status bar; dialogs and
//! notifications float over it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Rows of the account form
pub struct FormLayout {
    pub label: Rect,
    pub label_error: Rect,
    pub description: Rect,
    pub amount: Rect,
    pub currency: Rect,
    pub account_type: Rect,
    pub color: Rect,
    pub options: Rect,
    pub hints: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label
                Constraint::Length(1), // Label error
                Constraint::Length(1), // Description
                Constraint::Length(1), // Amount + sign
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Currency
                Constraint::Length(1), // Account type
                Constraint::Length(1), // Color
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Sort key / exclude
                Constraint::Min(0),
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Self {
            label: chunks[0],
            label_error: chunks[1],
            description: chunks[2],
            amount: chunks[3],
            currency: chunks[5],
            account_type: chunks[6],
            color: chunks[7],
            options: chunks[9],
            hints: chunks[11],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast in the top-right corner
pub fn notification_area(r: Rect) -> Rect {
    let width = 44.min(r.width);
    let height = 4.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
