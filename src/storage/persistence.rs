use crate::{currency::CurrencyCode, domain::ExpenseRecord};

use super::{KeyValueStorage, Result};

pub const EXPENSES_KEY: &str = "expenses";
pub const CURRENCY_KEY: &str = "currency";

/// Mirrors the expense list and the currency selection into a key-value store.
///
/// Reads never fail: absent or malformed values fall back to defaults so that
/// a damaged store can always be opened.
#[derive(Debug)]
pub struct Persistence<S> {
    storage: S,
}

impl<S: KeyValueStorage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    pub fn load_expenses(&self) -> Vec<ExpenseRecord> {
        let raw = match self.storage.get(EXPENSES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored expenses");
                return Vec::new();
            }
        };
        let mut expenses: Vec<ExpenseRecord> = match serde_json::from_str(&raw) {
            Ok(expenses) => expenses,
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed stored expenses");
                return Vec::new();
            }
        };
        let stored = expenses.len();
        expenses.retain(ExpenseRecord::is_valid);
        if expenses.len() != stored {
            tracing::warn!(
                dropped = stored - expenses.len(),
                "discarding invalid stored expenses"
            );
        }
        expenses
    }

    pub fn load_currency(&self, fallback: CurrencyCode) -> CurrencyCode {
        match self.storage.get(CURRENCY_KEY) {
            Ok(Some(raw)) => CurrencyCode::parse(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, fallback = %fallback, "ignoring stored currency");
                fallback
            }),
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored currency");
                fallback
            }
        }
    }

    pub fn save_expenses(&mut self, expenses: &[ExpenseRecord]) -> Result<()> {
        let json = serde_json::to_string(expenses)?;
        self.storage.set(EXPENSES_KEY, &json)
    }

    pub fn save_currency(&mut self, currency: CurrencyCode) -> Result<()> {
        self.storage.set(CURRENCY_KEY, currency.as_str())
    }
}
