//! Text input widget
//!
//! A single-line text field with a character cursor, an optional length
//! limit and an optional character filter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Longest accepted content, in characters
    pub max_len: Option<usize>,
    /// Only characters passing this test are inserted
    pub accept: Option<fn(char) -> bool>,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: String::new(),
            max_len: None,
            accept: None,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Limit the content length
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Restrict which characters can be typed
    pub fn accept(mut self, accept: fn(char) -> bool) -> Self {
        self.accept = Some(accept);
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor; returns false if it was refused
    pub fn insert(&mut self, c: char) -> bool {
        if self.accept.is_some_and(|accept| !accept(c)) {
            return false;
        }
        if self.max_len.is_some_and(|max| self.char_count() >= max) {
            return false;
        }
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let offset = self.byte_offset(self.cursor);
        self.content.remove(offset);
        true
    }

    /// Delete character at cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let offset = self.byte_offset(self.cursor);
        self.content.remove(offset);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Spans for the value with the cursor highlighted when focused
    pub fn spans(&self, value_style: Style) -> Vec<Span<'static>> {
        if self.content.is_empty() && !self.focused {
            return vec![Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )];
        }
        if !self.focused {
            return vec![Span::styled(self.content.clone(), value_style)];
        }

        let offset = self.byte_offset(self.cursor);
        let (before, after) = self.content.split_at(offset);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');
        vec![
            Span::styled(before.to_string(), value_style),
            Span::styled(
                cursor_char.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::styled(rest.as_str().to_string(), value_style),
        ]
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if !self.label.is_empty() {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(format!("{}: ", self.label), label_style));
        }
        spans.extend(self.spans(Style::default().fg(Color::White)));
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
