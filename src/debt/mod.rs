//! Debt records, loading and caller-side validation

mod data;
pub mod loader;
pub mod validation;

pub use data::{Debt, PayoffPolicy};
pub use loader::{load_debts, load_debts_from_reader, load_debts_json, load_default_debts};
pub use validation::{validate_debts, validate_extra_payment};
