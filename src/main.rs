use anyhow::Result;
use clap::{Parser, Subcommand};

use account_editor::cli::{handle_account_command, AccountCommands};
use account_editor::config::{paths::EditorPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "account-editor",
    version,
    about = "Terminal form for creating and editing ledger accounts",
    long_about = "Opens a terminal form for one ledger account: label, description, \
                  currency, type, color and opening balance. Sort key and the \
                  exclude-from-totals flag are written in the background."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Account(AccountCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = EditorPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Account Editor Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Accounts file:    {}", paths.accounts_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Diagnostics log:  {}", paths.diagnostics_log().display());
            println!();
            println!("Settings:");
            println!("  Default currency:   {}", settings.default_currency);
            println!(
                "  Decimal separator:  '{}'",
                settings.locale.decimal_separator
            );
            match settings.locale.grouping_separator {
                Some(sep) => println!("  Grouping separator: '{}'", sep),
                None => println!("  Grouping separator: none"),
            }
            if settings.unsupported_currencies.is_empty() {
                println!("  Unsupported currencies: none");
            } else {
                let codes: Vec<&str> = settings
                    .unsupported_currencies
                    .iter()
                    .map(|c| c.code())
                    .collect();
                println!("  Unsupported currencies: {}", codes.join(", "));
            }
        }
        None => {
            println!("account-editor - terminal account form");
            println!();
            println!("Run 'account-editor --help' for usage information.");
            println!("Run 'account-editor new' to create an account.");
        }
    }

    Ok(())
}
