//! Account form panel
//!
//! Renders the edit form with its text fields and selectors, and turns key
//! presses into form events. Text is edited in local buffers and pushed to
//! the form after every change.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::editor::{AmountSign, EditorEvent, MenuCommand, Selector, TextField};
use crate::tui::app::{App, EditorForm};
use crate::tui::layout::{centered_rect, FormLayout};
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::swatch::palette_spans;

/// Which field is currently focused in the account form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountField {
    #[default]
    Label,
    Description,
    Amount,
    Sign,
    Currency,
    AccountType,
    Color,
}

impl AccountField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Label => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Sign,
            Self::Sign => Self::Currency,
            Self::Currency => Self::AccountType,
            Self::AccountType => Self::Color,
            Self::Color => Self::Label,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Label => Self::Color,
            Self::Description => Self::Label,
            Self::Amount => Self::Description,
            Self::Sign => Self::Amount,
            Self::Currency => Self::Sign,
            Self::AccountType => Self::Currency,
            Self::Color => Self::AccountType,
        }
    }

    fn text_field(self) -> Option<TextField> {
        match self {
            Self::Label => Some(TextField::Label),
            Self::Description => Some(TextField::Description),
            Self::Amount => Some(TextField::Amount),
            _ => None,
        }
    }

    fn selector(self) -> Option<Selector> {
        match self {
            Self::Currency => Some(Selector::Currency),
            Self::AccountType => Some(Selector::AccountType),
            Self::Color => Some(Selector::Color),
            _ => None,
        }
    }
}

/// Focus and text buffers of the form panel
#[derive(Debug, Clone)]
pub struct AccountFormState {
    pub focused_field: AccountField,
    pub label_input: TextInput,
    pub description_input: TextInput,
    pub amount_input: TextInput,
}

impl AccountFormState {
    /// Buffers pre-filled from the form
    pub fn from_form(form: &EditorForm<'_>) -> Self {
        let mut state = Self {
            focused_field: AccountField::Label,
            label_input: TextInput::new()
                .label("Label")
                .placeholder("Account name")
                .content(form.label()),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional")
                .content(form.description()),
            amount_input: TextInput::new()
                .label("Opening balance")
                .placeholder("0")
                .content(form.amount_text()),
        };
        state.set_focus(AccountField::Label);
        state
    }

    pub fn set_focus(&mut self, field: AccountField) {
        self.focused_field = field;
        self.label_input.focused = field == AccountField::Label;
        self.description_input.focused = field == AccountField::Description;
        self.amount_input.focused = field == AccountField::Amount;
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    /// The focused text buffer and the form field it feeds
    fn focused_input(&mut self) -> Option<(TextField, &mut TextInput)> {
        let field = self.focused_field.text_field()?;
        let input = match field {
            TextField::Label => &mut self.label_input,
            TextField::Description => &mut self.description_input,
            TextField::Amount => &mut self.amount_input,
        };
        Some((field, input))
    }
}

/// Render the account form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let area = centered_rect(80, 90, area);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", app.form.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let rows = FormLayout::new(inner);
    let state = &app.account_form;
    let form = &app.form;
    let focused = state.focused_field;

    render_input(frame, rows.label, &state.label_input);
    if let Some(error) = form.label_error() {
        let line = Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), rows.label_error);
    }
    render_input(frame, rows.description, &state.description_input);

    let mut amount = vec![sign_span(form.sign(), focused == AccountField::Sign), Span::raw(" ")];
    amount.extend(input_line(&state.amount_input).spans);
    frame.render_widget(Paragraph::new(Line::from(amount)), rows.amount);

    let currency = form.selected_currency();
    render_choice(
        frame,
        rows.currency,
        "Currency",
        format!("{} ({})", currency.code(), currency.name()),
        focused == AccountField::Currency,
    );
    render_choice(
        frame,
        rows.account_type,
        "Type",
        form.selected_account_type().to_string(),
        focused == AccountField::AccountType,
    );

    let mut color = vec![field_label("Color", focused == AccountField::Color)];
    color.extend(palette_spans(form.palette(), focused == AccountField::Color));
    frame.render_widget(Paragraph::new(Line::from(color)), rows.color);

    let account = form.draft().account();
    let menu = form.menu_state();
    let options = Line::from(vec![
        Span::styled("Sort key: ", Style::default().fg(Color::Yellow)),
        Span::styled(account.sort_key.to_string(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled("Exclude from totals: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            if menu.exclude_from_totals_checked { "[x]" } else { "[ ]" },
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(options), rows.options);

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::White)),
        Span::raw(" Change  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows.hints);
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("{}: ", label), style)
}

fn input_line(input: &TextInput) -> Line<'static> {
    let mut spans = vec![field_label(&input.label, input.focused)];
    spans.extend(input.spans(Style::default().fg(Color::White)));
    Line::from(spans)
}

fn render_input(frame: &mut Frame, area: Rect, input: &TextInput) {
    frame.render_widget(Paragraph::new(input_line(input)), area);
}

fn sign_span(sign: AmountSign, focused: bool) -> Span<'static> {
    let color = match sign {
        AmountSign::Income => Color::Green,
        AmountSign::Expense => Color::Red,
    };
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if focused {
        style = style.bg(Color::DarkGray);
    }
    Span::styled(format!("[{}]", sign), style)
}

fn render_choice(frame: &mut Frame, area: Rect, label: &str, value: String, focused: bool) {
    let arrows = Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray });
    let line = Line::from(vec![
        field_label(label, focused),
        Span::styled("< ", arrows),
        Span::styled(value, Style::default().fg(Color::White)),
        Span::styled(" >", arrows),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Step a selector one position, wrapping at both ends
fn step(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, _) => 0,
        (Some(idx), true) => (idx + 1) % len,
        (Some(idx), false) => (idx + len - 1) % len,
    })
}

fn cycle_selector(app: &mut App, selector: Selector, forward: bool) {
    let form = &app.form;
    let (current, len) = match selector {
        Selector::Currency => (Some(form.currency_index()), form.currencies().len()),
        Selector::AccountType => (Some(form.type_index()), form.account_types().len()),
        Selector::Color => (form.palette().selected(), form.palette().len()),
    };
    if let Some(index) = step(current, len, forward) {
        app.dispatch(EditorEvent::SelectionChanged { selector, index });
        if selector == Selector::Currency {
            // The form re-renders the amount for the new currency's digits
            let amount = app.form.amount_text().to_string();
            app.account_form.amount_input.set_content(amount);
        }
    }
}

/// Push the focused buffer's text to the form
fn sync_focused_input(app: &mut App) {
    if let Some((field, input)) = app.account_form.focused_input() {
        let value = input.value().to_string();
        app.dispatch(EditorEvent::FieldChanged { field, value });
    }
}

/// Edit the focused buffer; returns whether the text changed
fn edit_focused_input(app: &mut App, edit: impl FnOnce(&mut TextInput) -> bool) -> bool {
    let changed = match app.account_form.focused_input() {
        Some((_, input)) => edit(input),
        None => false,
    };
    if changed {
        sync_focused_input(app);
    }
    changed
}

/// Handle key input for the account form
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let focused = app.account_form.focused_field;

    match key.code {
        KeyCode::Esc => app.dispatch(EditorEvent::Menu(MenuCommand::Cancel)),
        KeyCode::Char('c') if ctrl => app.dispatch(EditorEvent::Menu(MenuCommand::Cancel)),
        KeyCode::Enter => app.dispatch(EditorEvent::Menu(MenuCommand::Save)),
        KeyCode::Char('s') if ctrl => app.dispatch(EditorEvent::Menu(MenuCommand::Save)),
        KeyCode::F(2) => app.dispatch(EditorEvent::Menu(MenuCommand::SetSortKey)),
        KeyCode::F(3) => app.dispatch(EditorEvent::Menu(MenuCommand::ToggleExcludeFromTotals)),
        KeyCode::F(4) => app.dispatch(EditorEvent::Menu(MenuCommand::PickColor)),

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.account_form.prev_field()
        }
        KeyCode::Tab | KeyCode::Down => app.account_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.account_form.prev_field(),

        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            if let Some(selector) = focused.selector() {
                cycle_selector(app, selector, forward);
            } else if focused == AccountField::Sign {
                app.dispatch(EditorEvent::SignToggled);
            } else if let Some((_, input)) = app.account_form.focused_input() {
                if forward {
                    input.move_right();
                } else {
                    input.move_left();
                }
            }
        }
        KeyCode::Home => {
            if let Some((_, input)) = app.account_form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some((_, input)) = app.account_form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Char(' ') if focused == AccountField::Sign => {
            app.dispatch(EditorEvent::SignToggled)
        }
        KeyCode::Char('-') if focused == AccountField::Amount => {
            // The sign lives in the toggle, never in the text
            app.dispatch(EditorEvent::SignToggled)
        }
        KeyCode::Char(c) if !ctrl => {
            edit_focused_input(app, |input| input.insert(c));
        }
        KeyCode::Backspace => {
            edit_focused_input(app, TextInput::backspace);
        }
        KeyCode::Delete => {
            edit_focused_input(app, TextInput::delete);
        }

        _ => return false,
    }
    true
}
