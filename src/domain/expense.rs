use serde::{Deserialize, Serialize};

/// A single committed expense. Identity is its position in the store's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub name: String,
    pub price: f64,
}

impl ExpenseRecord {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Holds for every record a draft can produce: a non-empty name and a
    /// finite, non-negative price.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.price.is_finite() && self.price >= 0.0
    }
}
