//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::tasks::TaskRunner;

use super::app::{App, EditorExit, EditorForm};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the edit form until it is saved or cancelled
pub fn run_tui(form: EditorForm<'_>, runner: &TaskRunner) -> Result<EditorExit> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, App::new(form, runner));
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, mut app: App<'_>) -> Result<EditorExit> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| super::views::render(frame, &app))?;

        handle_event(&mut app, events.next()?)?;

        if let Some(exit) = app.exit {
            return Ok(exit);
        }
    }
}
