use chrono::{Local, NaiveDate};

use crate::cli::output;
use crate::currency::CurrencyEntry;
use crate::domain::{DraftInput, DraftState};
use crate::storage::KeyValueStorage;
use crate::store::ExpenseStore;

pub const EMPTY_LIST: &str = "No expenses added yet.";

/// `October 15, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn print_banner() {
    output::section("Expense Tracker");
    output::line(format!(
        "Today's Date: {}",
        format_long_date(Local::now().date_naive())
    ));
}

/// One line per expense, numbered from 1, with amounts right-aligned.
pub fn expense_rows<S: KeyValueStorage>(store: &ExpenseStore<S>) -> Vec<String> {
    let amounts: Vec<String> = store
        .expenses()
        .iter()
        .map(|expense| store.format_amount(expense.price))
        .collect();
    let name_width = store
        .expenses()
        .iter()
        .map(|expense| expense.name.chars().count())
        .max()
        .unwrap_or(0);
    let amount_width = amounts
        .iter()
        .map(|amount| amount.chars().count())
        .max()
        .unwrap_or(0);

    store
        .expenses()
        .iter()
        .zip(&amounts)
        .enumerate()
        .map(|(index, (expense, amount))| {
            format!(
                "{:>3}. {:<name_width$}  {:>amount_width$}",
                index + 1,
                expense.name,
                amount
            )
        })
        .collect()
}

pub fn total_line<S: KeyValueStorage>(store: &ExpenseStore<S>) -> String {
    format!("TOTAL: {}", store.formatted_total())
}

pub fn print_expenses<S: KeyValueStorage>(store: &ExpenseStore<S>) {
    output::section(format!("Expenses ({})", store.currency()));
    let rows = expense_rows(store);
    if rows.is_empty() {
        output::line(EMPTY_LIST);
    }
    for row in rows {
        output::line(row);
    }
    output::line(total_line(store));
}

pub fn print_draft(draft: &DraftInput) {
    output::section("Add New Expense");
    output::line(format!("  Name:  {}", display_field(&draft.name)));
    if let Some(message) = &draft.name_error {
        output::warning(message);
    }
    output::line(format!("  Price: {}", display_field(&draft.price)));
    if let Some(message) = &draft.price_error {
        output::warning(message);
    }
    output::line(format!("  State: {}", state_label(draft.state())));
}

pub fn print_currencies<'a>(entries: impl IntoIterator<Item = &'a CurrencyEntry>, active: &str) {
    let mut any = false;
    for entry in entries {
        any = true;
        let marker = if entry.code == active { "*" } else { " " };
        output::line(format!(" {} {}", marker, entry.label()));
    }
    if !any {
        output::line("No currencies match.");
    }
}

fn display_field(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

fn state_label(state: DraftState) -> &'static str {
    match state {
        DraftState::Empty => "empty",
        DraftState::PartiallyFilled => "partially filled",
        DraftState::ReadyToCommit => "ready to add",
        DraftState::Invalid => "needs attention",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn long_date_matches_us_header() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "March 5, 2026");
    }

    #[test]
    fn rows_align_names_and_amounts() {
        let mut store = ExpenseStore::init(MemoryStorage::new());
        store.set_currency("USD").unwrap();
        for (name, price) in [("Coffee", "3.5"), ("Rent", "1200")] {
            store.set_draft_name(name);
            store.set_draft_price(price);
            store.commit_expense().unwrap();
        }

        let rows = expense_rows(&store);
        assert_eq!(rows[0], "  1. Coffee      $3.50");
        assert_eq!(rows[1], "  2. Rent    $1,200.00");
        assert_eq!(total_line(&store), "TOTAL: $1,203.50");
    }

    #[test]
    fn empty_store_has_no_rows() {
        let store = ExpenseStore::init(MemoryStorage::new());
        assert!(expense_rows(&store).is_empty());
        assert_eq!(total_line(&store), "TOTAL: ₱0.00");
    }
}
