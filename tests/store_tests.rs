mod common;

use common::{add_expense, TestEnv};
use expense_tracker::{
    domain::{DraftInput, DraftState, ExpenseRecord, NAME_REQUIRED, PRICE_REQUIRED},
    errors::ExpenseError,
    storage::MemoryStorage,
    store::ExpenseStore,
};

#[test]
fn coffee_example_produces_single_record() {
    let env = TestEnv::new();
    let mut store = env.open_store();

    add_expense(&mut store, "Coffee", "3.50");

    assert_eq!(store.expenses(), &[ExpenseRecord::new("Coffee", 3.5)]);
    assert_eq!(store.compute_total(), 3.5);
    assert_eq!(store.draft(), &DraftInput::default());
    assert_eq!(store.draft().state(), DraftState::Empty);
}

#[test]
fn empty_commit_sets_both_errors_and_changes_nothing() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    add_expense(&mut store, "Tea", "2");

    let err = store.commit_expense().unwrap_err();
    let ExpenseError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
    assert_eq!(errors.price.as_deref(), Some(PRICE_REQUIRED));
    assert_eq!(store.expenses().len(), 1);
    assert_eq!(store.draft().name, "");
    assert_eq!(store.draft().price, "");
}

#[test]
fn retry_after_fix_succeeds() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    store.set_draft_price("12");
    assert!(store.commit_expense().is_err());
    assert_eq!(store.draft().state(), DraftState::Invalid);

    store.set_draft_name("Lunch");
    assert_eq!(store.draft().state(), DraftState::ReadyToCommit);
    store.commit_expense().unwrap();
    assert_eq!(store.expenses(), &[ExpenseRecord::new("Lunch", 12.0)]);
}

#[test]
fn delete_first_of_two_updates_total() {
    let env = TestEnv::new();
    let mut store = env.open_store();
    add_expense(&mut store, "Coffee", "3.5");
    add_expense(&mut store, "Tea", "2");
    assert_eq!(store.compute_total(), 5.5);

    store.delete_expense(0).unwrap();

    assert_eq!(store.expenses(), &[ExpenseRecord::new("Tea", 2.0)]);
    assert_eq!(store.compute_total(), 2.0);
}

#[test]
fn insertion_order_is_preserved() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    for (name, price) in [("a", "1"), ("b", "2"), ("c", "3")] {
        add_expense(&mut store, name, price);
    }
    store.delete_expense(1).unwrap();
    let names: Vec<_> = store.expenses().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[test]
fn switching_currency_keeps_prices() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    add_expense(&mut store, "Camera", "1234.5");

    store.set_currency("USD").unwrap();
    assert_eq!(store.format_amount(1234.5), "$1,234.50");

    store.set_currency("EUR").unwrap();
    assert_eq!(store.format_amount(1234.5), "€1,234.50");
    assert_eq!(store.expenses()[0].price, 1234.5);
    assert_eq!(store.compute_total(), 1234.5);
}

#[test]
fn unknown_currency_leaves_selection_and_storage_alone() {
    let env = TestEnv::new();
    let mut store = env.open_store();
    store.set_currency("CAD").unwrap();

    assert!(matches!(
        store.set_currency("ABC"),
        Err(ExpenseError::UnknownCurrency(code)) if code == "ABC"
    ));
    assert_eq!(store.currency().as_str(), "CAD");

    drop(store);
    assert_eq!(env.open_store().currency().as_str(), "CAD");
}

#[test]
fn near_max_price_formats_as_digits() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    store.set_currency("USD").unwrap();
    add_expense(&mut store, "Yacht", "1.7e308");

    let total = store.formatted_total();
    assert!(total.starts_with("$170,000,000"), "{total}");
    assert!(total.ends_with(".00"), "{total}");
    assert!(total.chars().all(|ch| "$,.0123456789".contains(ch)), "{total}");
}
