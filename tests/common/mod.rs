#![allow(dead_code)]

use std::path::PathBuf;

use expense_tracker::{storage::JsonFileStorage, store::ExpenseStore};
use tempfile::TempDir;

/// Temporary data directory; removed when dropped.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.dir.path().join("storage.json")
    }

    pub fn open_store(&self) -> ExpenseStore<JsonFileStorage> {
        let storage = JsonFileStorage::open(self.storage_path()).expect("open storage file");
        ExpenseStore::init(storage)
    }
}

pub fn add_expense<S>(store: &mut ExpenseStore<S>, name: &str, price: &str)
where
    S: expense_tracker::storage::KeyValueStorage,
{
    store.set_draft_name(name);
    store.set_draft_price(price);
    store.commit_expense().expect("commit expense");
}
