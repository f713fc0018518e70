use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::cli::core::CommandError;
use crate::currency::CurrencyEntry;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Lets the user choose one currency; `None` when the picker is dismissed.
pub fn select_currency(
    theme: &ColorfulTheme,
    entries: &[&'static CurrencyEntry],
    active: &str,
) -> Result<Option<&'static CurrencyEntry>, CommandError> {
    let labels: Vec<String> = entries.iter().map(|entry| entry.label()).collect();
    let initial = entries
        .iter()
        .position(|entry| entry.code == active)
        .unwrap_or(0);
    let choice = Select::with_theme(theme)
        .with_prompt("Currency")
        .items(&labels)
        .default(initial)
        .interact_opt()?;
    Ok(choice.and_then(|index| entries.get(index).copied()))
}
