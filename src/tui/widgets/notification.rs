//! Toast notifications
//!
//! Rejected form input and failed background writes show up as a toast in
//! the corner of the form until they expire.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::editor::EditorError;
use crate::tasks::TaskCompletion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it and retry
    Warning,
    /// Something failed outside the user's control
    Error,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Warning => " ! Warning ",
            Self::Error => " x Error ",
        }
    }

    fn ttl(self) -> Duration {
        match self {
            Self::Warning => Duration::from_secs(3),
            Self::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            shown_at: Instant::now(),
        }
    }

    /// Toast for an error returned by the edit form
    pub fn for_rejection(err: &EditorError) -> Self {
        let severity = if err.is_recoverable() {
            Severity::Warning
        } else {
            Severity::Error
        };
        Self::new(err.to_string(), severity)
    }

    /// Toast for a background write that failed; `None` on success
    pub fn for_completion(completion: &TaskCompletion) -> Option<Self> {
        completion.result.as_ref().err().map(|err| {
            Self::new(
                format!("Could not store {}: {}", completion.task, err),
                Severity::Error,
            )
        })
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.severity.ttl()
    }
}

pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let severity = self.notification.severity;
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(severity.color()))
            .title(severity.title())
            .title_style(
                Style::default()
                    .fg(severity.color())
                    .add_modifier(Modifier::BOLD),
            );

        Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Pending toasts, oldest first; only the oldest is drawn
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    pub fn remove_expired(&mut self) {
        self.pending.retain(|n| !n.is_expired());
    }

    pub fn current(&self) -> Option<&Notification> {
        self.pending.first()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
