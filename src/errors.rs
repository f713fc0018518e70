use thiserror::Error;

use crate::domain::DraftErrors;

/// Error type shared by the store, the catalog and the storage backends.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Validation(DraftErrors),
    #[error("Unknown currency code `{0}`")]
    UnknownCurrency(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// True for failures the user can fix by editing their input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExpenseError::Validation(_) | ExpenseError::UnknownCurrency(_)
        )
    }
}
