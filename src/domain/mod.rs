pub mod draft;
pub mod expense;

pub use draft::{
    DraftErrors, DraftInput, DraftState, NAME_REQUIRED, PRICE_INVALID, PRICE_REQUIRED,
};
pub use expense::ExpenseRecord;
