use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::currency::CurrencyCode;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View or change preferences",
        "config [show|set default-currency <code>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action, key, value] if action.eq_ignore_ascii_case("set") => {
            set_config_value(context, key, value)
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show|set default-currency <code>]".into(),
        )),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    output::line(format!(
        "  default-currency  {}",
        context.config.default_currency
    ));
    output::line(format!(
        "  storage-file      {}",
        context
            .config
            .storage_path_in(context.config_manager.base_dir())
            .display()
    ));
    output::line(format!(
        "  config-file       {}",
        context.config_manager.path().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key.to_lowercase().as_str() {
        "default-currency" | "default_currency" => {
            let code = CurrencyCode::parse(value)?;
            let mut updated = context.config.clone();
            updated.default_currency = code.as_str().to_string();
            context.config_manager.save(&updated)?;
            context.config = updated;
            output::success(format!("Default currency set to {}.", code));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config key `{}` (expected default-currency)",
            other
        ))),
    }
}
