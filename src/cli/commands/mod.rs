pub mod config;
pub mod currency;
pub mod expense;
pub mod system;

use crate::cli::registry::CommandEntry;

/// Every shell command, in the order `help` lists them.
pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(expense::definitions());
    commands.extend(currency::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}
