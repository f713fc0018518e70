use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::render;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::currency::CurrencyEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "currency",
            "Show or set the display currency",
            "currency [code]",
            cmd_currency,
        ),
        CommandEntry::new(
            "currencies",
            "Search the currency catalog by code or name",
            "currencies [query]",
            cmd_currencies,
        ),
        CommandEntry::new(
            "pick",
            "Open the currency picker, optionally filtered",
            "pick [query]",
            cmd_pick,
        ),
    ]
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let entry = context.store.currency().entry();
            output::info(format!("Currency: {}", entry.label()));
            Ok(())
        }
        [code] => {
            let currency = context.store.set_currency(code)?;
            output::success(format!("Currency set to {}.", currency.entry().label()));
            output::line(render::total_line(&context.store));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: currency [code]".into(),
        )),
    }
}

fn cmd_currencies(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = args.join(" ");
    let active = context.store.currency().as_str();
    render::print_currencies(crate::currency::search(&query), active);
    Ok(())
}

/// Interactive sessions choose from a list; scripts take the first match.
fn cmd_pick(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.store.open_picker();
    context.store.set_search_query(args.join(" "));
    let matches: Vec<&'static CurrencyEntry> = context.store.search_currencies().collect();
    let active = context.store.currency().as_str();

    let chosen = match context.mode {
        CliMode::Interactive if !matches.is_empty() => {
            io::select_currency(&context.theme, &matches, active)?
        }
        _ => matches.first().copied(),
    };

    match chosen {
        Some(entry) => {
            let currency = context.store.pick_currency(entry.code)?;
            output::success(format!("Currency set to {}.", currency.entry().label()));
            output::line(render::total_line(&context.store));
        }
        None => {
            if matches.is_empty() {
                output::warning(format!(
                    "No currencies match `{}`.",
                    context.store.picker().query
                ));
            }
            context.store.close_picker();
        }
    }
    Ok(())
}
