//! The expense-and-currency state manager.
//!
//! [`ExpenseStore`] owns every piece of application state and is the only
//! place it changes. Persisted fields (`expenses`, `currency`) are written
//! through [`Persistence`] before the in-memory value is replaced, so a failed
//! write leaves both sides as they were.

use crate::{
    currency::{self, format_currency_value, CurrencyCode, CurrencySearch},
    domain::{DraftInput, ExpenseRecord},
    errors::ExpenseError,
    storage::{KeyValueStorage, Persistence},
};

/// UI-only state of the searchable currency picker. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyPicker {
    pub is_open: bool,
    pub query: String,
}

#[derive(Debug)]
pub struct ExpenseStore<S> {
    persistence: Persistence<S>,
    expenses: Vec<ExpenseRecord>,
    currency: CurrencyCode,
    draft: DraftInput,
    picker: CurrencyPicker,
}

impl<S: KeyValueStorage> ExpenseStore<S> {
    /// Rehydrates the store from `storage`, defaulting to PHP.
    pub fn init(storage: S) -> Self {
        Self::init_with_default(storage, CurrencyCode::default())
    }

    /// Rehydrates the store; `fallback` is used when no currency was stored.
    pub fn init_with_default(storage: S, fallback: CurrencyCode) -> Self {
        let persistence = Persistence::new(storage);
        let expenses = persistence.load_expenses();
        let currency = persistence.load_currency(fallback);
        tracing::debug!(
            expenses = expenses.len(),
            currency = %currency,
            "expense store initialized"
        );
        Self {
            persistence,
            expenses,
            currency,
            draft: DraftInput::new(),
            picker: CurrencyPicker::default(),
        }
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn picker(&self) -> &CurrencyPicker {
        &self.picker
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn set_draft_name(&mut self, text: impl Into<String>) {
        self.draft.set_name(text);
    }

    pub fn set_draft_price(&mut self, text: impl Into<String>) {
        self.draft.set_price(text);
    }

    /// Validates the draft and appends it as a new expense.
    ///
    /// On a validation failure the messages stay on the draft (see
    /// [`DraftInput::errors`]) and are also returned as
    /// [`ExpenseError::Validation`]. The draft text is kept so it can be fixed.
    pub fn commit_expense(&mut self) -> Result<&ExpenseRecord, ExpenseError> {
        let (name, price) = self.draft.validate().map_err(ExpenseError::Validation)?;

        let mut updated = self.expenses.clone();
        updated.push(ExpenseRecord::new(name, price));
        self.persistence.save_expenses(&updated)?;
        self.expenses = updated;
        self.draft.clear();

        let index = self.expenses.len() - 1;
        tracing::debug!(index, price, "expense committed");
        Ok(&self.expenses[index])
    }

    /// Removes the expense at `index`. Indices past the end are ignored.
    pub fn delete_expense(&mut self, index: usize) -> Result<Option<ExpenseRecord>, ExpenseError> {
        if index >= self.expenses.len() {
            tracing::debug!(index, len = self.expenses.len(), "delete ignored");
            return Ok(None);
        }

        let mut updated = Vec::with_capacity(self.expenses.len() - 1);
        let mut removed = None;
        for (position, record) in self.expenses.iter().enumerate() {
            if position == index {
                removed = Some(record.clone());
            } else {
                updated.push(record.clone());
            }
        }
        self.persistence.save_expenses(&updated)?;
        self.expenses = updated;
        tracing::debug!(index, "expense deleted");
        Ok(removed)
    }

    /// Switches the display currency. Codes outside the catalog are rejected
    /// and the current selection is kept.
    pub fn set_currency(&mut self, code: &str) -> Result<CurrencyCode, ExpenseError> {
        let currency = CurrencyCode::parse(code)?;
        self.persistence.save_currency(currency)?;
        self.currency = currency;
        tracing::debug!(currency = %currency, "currency selected");
        Ok(currency)
    }

    /// Sum of every price, in insertion order. Independent of the display currency.
    pub fn compute_total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.price).sum()
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format_currency_value(amount, self.currency)
    }

    pub fn formatted_total(&self) -> String {
        self.format_amount(self.compute_total())
    }

    pub fn open_picker(&mut self) {
        self.picker.is_open = true;
    }

    /// Closes the picker and forgets the query, as dismissing the dropdown does.
    pub fn close_picker(&mut self) {
        self.picker = CurrencyPicker::default();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.picker.query = query.into();
    }

    /// Catalog entries matching the picker's current query.
    pub fn search_currencies(&self) -> CurrencySearch {
        currency::search(&self.picker.query)
    }

    /// Chooses a currency from the picker and closes it.
    pub fn pick_currency(&mut self, code: &str) -> Result<CurrencyCode, ExpenseError> {
        let currency = self.set_currency(code)?;
        self.close_picker();
        Ok(currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DraftState, NAME_REQUIRED, PRICE_REQUIRED};
    use crate::storage::{MemoryStorage, EXPENSES_KEY};

    fn store() -> ExpenseStore<MemoryStorage> {
        ExpenseStore::init(MemoryStorage::new())
    }

    fn add(store: &mut ExpenseStore<MemoryStorage>, name: &str, price: &str) {
        store.set_draft_name(name);
        store.set_draft_price(price);
        store.commit_expense().unwrap();
    }

    #[test]
    fn starts_empty_in_php() {
        let store = store();
        assert!(store.expenses().is_empty());
        assert_eq!(store.currency().as_str(), "PHP");
        assert_eq!(store.draft().state(), DraftState::Empty);
        assert_eq!(store.compute_total(), 0.0);
    }

    #[test]
    fn commit_appends_and_clears_draft() {
        let mut store = store();
        add(&mut store, "Coffee", "3.50");

        assert_eq!(store.expenses(), &[ExpenseRecord::new("Coffee", 3.5)]);
        assert_eq!(store.compute_total(), 3.5);
        assert_eq!(store.draft(), &DraftInput::default());
    }

    #[test]
    fn failed_commit_keeps_text_and_reports_both_fields() {
        let mut store = store();
        let err = store.commit_expense().unwrap_err();

        match err {
            ExpenseError::Validation(errors) => {
                assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
                assert_eq!(errors.price.as_deref(), Some(PRICE_REQUIRED));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.expenses().is_empty());
        assert_eq!(store.draft().state(), DraftState::Invalid);
        assert!(store.persistence().storage().get(EXPENSES_KEY).unwrap().is_none());
    }

    #[test]
    fn failed_commit_retains_partial_input() {
        let mut store = store();
        store.set_draft_name("Groceries");
        assert!(store.commit_expense().is_err());
        assert_eq!(store.draft().name, "Groceries");
        assert!(store.draft().name_error.is_none());
        assert_eq!(store.draft().price_error.as_deref(), Some(PRICE_REQUIRED));
    }

    #[test]
    fn delete_removes_one_position() {
        let mut store = store();
        add(&mut store, "Coffee", "3.50");
        add(&mut store, "Tea", "2");
        assert_eq!(store.compute_total(), 5.5);

        let removed = store.delete_expense(0).unwrap();
        assert_eq!(removed, Some(ExpenseRecord::new("Coffee", 3.5)));
        assert_eq!(store.expenses(), &[ExpenseRecord::new("Tea", 2.0)]);
        assert_eq!(store.compute_total(), 2.0);
    }

    #[test]
    fn out_of_range_delete_is_a_noop() {
        let mut store = store();
        add(&mut store, "Coffee", "3.50");
        assert_eq!(store.delete_expense(5).unwrap(), None);
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn currency_changes_only_formatting() {
        let mut store = store();
        add(&mut store, "Laptop", "1234.5");

        store.set_currency("USD").unwrap();
        assert_eq!(store.formatted_total(), "$1,234.50");

        store.set_currency("EUR").unwrap();
        assert_eq!(store.formatted_total(), "€1,234.50");
        assert_eq!(store.expenses()[0].price, 1234.5);
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let mut store = store();
        store.set_currency("USD").unwrap();
        let err = store.set_currency("DOGE").unwrap_err();
        assert!(matches!(err, ExpenseError::UnknownCurrency(_)));
        assert_eq!(store.currency().as_str(), "USD");
    }

    #[test]
    fn picker_filters_and_closes_on_pick() {
        let mut store = store();
        store.open_picker();
        store.set_search_query("yen");
        let codes: Vec<_> = store.search_currencies().map(|entry| entry.code).collect();
        assert_eq!(codes, vec!["JPY"]);

        store.pick_currency("JPY").unwrap();
        assert_eq!(store.currency().as_str(), "JPY");
        assert_eq!(store.picker(), &CurrencyPicker::default());
    }

    #[test]
    fn rehydrates_from_previous_session() {
        let mut first = store();
        add(&mut first, "Rent", "900");
        first.set_currency("GBP").unwrap();
        let storage = first.persistence.into_inner();

        let second = ExpenseStore::init(storage);
        assert_eq!(second.expenses(), &[ExpenseRecord::new("Rent", 900.0)]);
        assert_eq!(second.currency().as_str(), "GBP");
        assert_eq!(second.draft(), &DraftInput::default());
    }
}
