#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps a running list of named expenses, shows their total
//! in a selectable display currency, and mirrors that state into durable
//! key-value storage between sessions.
//!
//! ```
//! use expense_tracker::{storage::MemoryStorage, store::ExpenseStore};
//!
//! let mut store = ExpenseStore::init(MemoryStorage::new());
//! store.set_draft_name("Coffee");
//! store.set_draft_price("3.50");
//! store.commit_expense().unwrap();
//! store.set_currency("USD").unwrap();
//! assert_eq!(store.formatted_total(), "$3.50");
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}
