//! Account CLI commands
//!
//! Opens the edit form for a new or stored account, and prints stored
//! accounts.

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;

use crate::audit::Diagnostics;
use crate::config::{EditorPaths, Settings};
use crate::display::account::format_account_details;
use crate::editor::{AccountEditForm, AmountFormat, EditorConfig};
use crate::error::AccountEditorError;
use crate::models::AccountId;
use crate::services::AccountService;
use crate::tasks::TaskRunner;
use crate::tui::{run_tui, EditorExit};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open the form for a new account
    New {
        /// Currency code for the new account (e.g. EUR)
        #[arg(short, long)]
        currency: Option<String>,
    },
    /// Open the form for an existing account
    Edit {
        /// Account ID
        id: i64,
    },
    /// Show a stored account
    Show {
        /// Account ID
        id: i64,
    },
}

/// Handle an account command
pub fn handle_account_command(
    paths: &EditorPaths,
    settings: &Settings,
    cmd: AccountCommands,
) -> Result<()> {
    match cmd {
        AccountCommands::New { currency } => {
            run_editor(paths, settings, None, currency.as_deref())
        }
        AccountCommands::Edit { id } => run_editor(paths, settings, Some(AccountId::new(id)), None),
        AccountCommands::Show { id } => {
            let id = AccountId::new(id);
            let account = AccountService::open(paths)?
                .get(id)?
                .ok_or(AccountEditorError::AccountNotFound(id))?;
            print!(
                "{}",
                format_account_details(&account, &AmountFormat::from(&settings.locale))
            );
            Ok(())
        }
    }
}

fn run_editor(
    paths: &EditorPaths,
    settings: &Settings,
    existing: Option<AccountId>,
    currency_hint: Option<&str>,
) -> Result<()> {
    let service = Arc::new(AccountService::open(paths)?);
    let runner = TaskRunner::spawn(Arc::clone(&service));
    let config = EditorConfig::from_settings(settings, Diagnostics::new(paths.diagnostics_log()));

    let form = AccountEditForm::initialize(
        Arc::clone(&service),
        &runner,
        config,
        existing,
        currency_hint,
    )?;
    let exit = run_tui(form, &runner)?;

    for failed in runner.shutdown().into_iter().filter(|c| !c.is_success()) {
        if let Err(e) = &failed.result {
            eprintln!("Could not store {}: {}", failed.task, e);
        }
    }

    match exit {
        EditorExit::Saved(id) => println!("Saved account {}", id),
        EditorExit::Cancelled => println!("Cancelled"),
    }
    Ok(())
}
