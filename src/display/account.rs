//! Account display formatting
//!
//! Formats a stored account for the `show` command.

use crate::editor::AmountFormat;
use crate::models::{Account, Money};

/// Opening balance in major units with its currency code
pub fn format_balance(balance: Money, account: &Account, format: &AmountFormat) -> String {
    let digits = account.currency.fraction_digits();
    format!(
        "{} {}",
        format.format(balance.to_major(digits), digits),
        account.currency.code()
    )
}

/// Format a single account's details
pub fn format_account_details(account: &Account, format: &AmountFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.label));
    output.push_str(&format!("  ID:             {}\n", account.id));
    output.push_str(&format!("  Type:           {}\n", account.account_type));
    output.push_str(&format!(
        "  Currency:       {} ({})\n",
        account.currency.code(),
        account.currency.name()
    ));
    output.push_str(&format!(
        "  Opening Balance: {}\n",
        format_balance(account.opening_balance, account, format)
    ));
    output.push_str(&format!(
        "  Color:          {}\n",
        if account.color.is_unset() {
            "none".to_string()
        } else {
            account.color.to_string()
        }
    ));
    output.push_str(&format!("  Sort Key:       {}\n", account.sort_key));
    output.push_str(&format!(
        "  In Totals:      {}\n",
        if account.exclude_from_totals { "No" } else { "Yes" }
    ));

    if !account.description.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Description: {}\n", account.description));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
