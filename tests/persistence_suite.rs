mod common;

use std::fs;

use common::{add_expense, TestEnv};
use expense_tracker::{
    domain::ExpenseRecord,
    storage::{
        JsonFileStorage, KeyValueStorage, MemoryStorage, Persistence, CURRENCY_KEY, EXPENSES_KEY,
    },
    store::ExpenseStore,
};

#[test]
fn expenses_round_trip_through_storage_file() {
    let env = TestEnv::new();
    let records = vec![
        ExpenseRecord::new("Coffee", 3.5),
        ExpenseRecord::new("Tea", 2.0),
        ExpenseRecord::new("Groceries", 87.25),
    ];

    let storage = JsonFileStorage::open(env.storage_path()).unwrap();
    let mut persistence = Persistence::new(storage);
    persistence.save_expenses(&records).unwrap();

    let reopened = Persistence::new(JsonFileStorage::open(env.storage_path()).unwrap());
    assert_eq!(reopened.load_expenses(), records);
}

#[test]
fn writing_same_snapshot_twice_is_idempotent() {
    let env = TestEnv::new();
    let records = vec![ExpenseRecord::new("Rent", 900.0)];
    let mut persistence = Persistence::new(JsonFileStorage::open(env.storage_path()).unwrap());

    persistence.save_expenses(&records).unwrap();
    let first = fs::read_to_string(env.storage_path()).unwrap();
    persistence.save_expenses(&records).unwrap();
    let second = fs::read_to_string(env.storage_path()).unwrap();

    assert_eq!(first, second);
    let reopened = Persistence::new(JsonFileStorage::open(env.storage_path()).unwrap());
    assert_eq!(reopened.load_expenses(), records);
}

#[test]
fn store_mirrors_every_mutation() {
    let env = TestEnv::new();
    let mut store = env.open_store();
    add_expense(&mut store, "Coffee", "3.5");
    add_expense(&mut store, "Tea", "2");
    store.delete_expense(0).unwrap();
    store.set_currency("SGD").unwrap();
    drop(store);

    let reloaded = env.open_store();
    assert_eq!(reloaded.expenses(), &[ExpenseRecord::new("Tea", 2.0)]);
    assert_eq!(reloaded.currency().as_str(), "SGD");
}

#[test]
fn currency_is_stored_as_raw_code() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    store.set_currency("nzd").unwrap();
    let raw = store.persistence().storage().get(CURRENCY_KEY).unwrap();
    assert_eq!(raw.as_deref(), Some("NZD"));
}

#[test]
fn corrupt_expenses_value_fails_soft() {
    let mut storage = MemoryStorage::new();
    storage.set(EXPENSES_KEY, "not json at all").unwrap();
    storage.set(CURRENCY_KEY, "EUR").unwrap();

    let store = ExpenseStore::init(storage);
    assert!(store.expenses().is_empty());
    assert_eq!(store.currency().as_str(), "EUR");
}

#[test]
fn corrupt_storage_file_starts_fresh() {
    let env = TestEnv::new();
    fs::write(env.storage_path(), "\u{0}\u{1}garbage").unwrap();

    let mut store = env.open_store();
    assert!(store.expenses().is_empty());
    assert_eq!(store.currency().as_str(), "PHP");

    add_expense(&mut store, "Bus", "1.25");
    drop(store);
    assert_eq!(env.open_store().expenses().len(), 1);
}

#[test]
fn non_utf8_storage_file_starts_fresh() {
    let env = TestEnv::new();
    fs::write(env.storage_path(), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let mut store = env.open_store();
    assert!(store.expenses().is_empty());
    add_expense(&mut store, "Lunch", "8");
    drop(store);
    assert_eq!(env.open_store().expenses(), &[ExpenseRecord::new("Lunch", 8.0)]);
}

#[test]
fn invalid_stored_records_are_dropped() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            EXPENSES_KEY,
            r#"[{"name":"","price":-5},{"name":"Tea","price":2},{"name":"Gift","price":-1}]"#,
        )
        .unwrap();

    let store = ExpenseStore::init(storage);
    assert_eq!(store.expenses(), &[ExpenseRecord::new("Tea", 2.0)]);
    assert_eq!(store.compute_total(), 2.0);
}

#[test]
fn out_of_range_delete_does_not_write() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    assert_eq!(store.delete_expense(0).unwrap(), None);
    assert!(store.persistence().storage().is_empty());
}

#[test]
fn failed_commit_does_not_write() {
    let mut store = ExpenseStore::init(MemoryStorage::new());
    store.set_draft_name("Taxi");
    store.set_draft_price("twelve");
    assert!(store.commit_expense().is_err());
    assert!(store.persistence().storage().get(EXPENSES_KEY).unwrap().is_none());
}
