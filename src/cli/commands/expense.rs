use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::render;
use crate::cli::shell_context::ShellContext;
use crate::errors::ExpenseError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("name", "Type the expense name", "name <text>", cmd_name),
        CommandEntry::new("price", "Type the expense price", "price <amount>", cmd_price),
        CommandEntry::new(
            "add",
            "Add the drafted expense, or fill and add in one step",
            "add [<name> <price>]",
            cmd_add,
        ),
        CommandEntry::new("draft", "Show the expense being typed", "draft", cmd_draft),
        CommandEntry::new("list", "List expenses and the total", "list", cmd_list),
        CommandEntry::new(
            "delete",
            "Delete an expense by row number",
            "delete <row>",
            cmd_delete,
        ),
        CommandEntry::new("total", "Show the formatted total", "total", cmd_total),
    ]
}

fn cmd_name(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.store.set_draft_name(args.join(" "));
    Ok(())
}

fn cmd_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.store.set_draft_price(args.join(" "));
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {}
        [name @ .., price] if !name.is_empty() => {
            context.store.set_draft_name(name.join(" "));
            context.store.set_draft_price(*price);
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: add [<name> <price>]".into(),
            ))
        }
    }

    let record = match context.store.commit_expense() {
        Ok(record) => record.clone(),
        Err(ExpenseError::Validation(errors)) => {
            for message in errors.messages() {
                output::warning(message);
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let amount = context.store.format_amount(record.price);
    output::success(format!("Added {} ({}).", record.name, amount));
    output::line(render::total_line(&context.store));
    Ok(())
}

fn cmd_draft(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render::print_draft(context.store.draft());
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render::print_expenses(&context.store);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let row = match args {
        [raw] => parse_row(raw)?,
        _ => return Err(CommandError::InvalidArguments("usage: delete <row>".into())),
    };

    match context.store.delete_expense(row - 1)? {
        Some(removed) => {
            let amount = context.store.format_amount(removed.price);
            output::success(format!("Deleted {} ({}).", removed.name, amount));
            output::line(render::total_line(&context.store));
        }
        None => output::warning(format!("No expense at row {}.", row)),
    }
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line(render::total_line(&context.store));
    Ok(())
}

/// Rows are shown starting at 1.
fn parse_row(raw: &str) -> Result<usize, CommandError> {
    raw.parse::<usize>()
        .ok()
        .filter(|row| *row >= 1)
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "invalid row `{}` (use a number from `list`)",
                raw
            ))
        })
}
