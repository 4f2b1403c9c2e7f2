//! Error type shared by the loaders, validation and strategy persistence

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid debt '{id}': {field} {reason}")]
    InvalidDebt {
        id: String,
        field: &'static str,
        reason: String,
    },

    #[error("duplicate debt id '{0}'")]
    DuplicateDebtId(String),

    #[error("invalid extra payment {0}: must be a finite, non-negative amount")]
    InvalidExtraPayment(f64),

    #[error("invalid month '{0}': expected YYYY-MM")]
    InvalidMonth(String),

    #[error("unknown payoff policy '{0}': expected snowball or avalanche")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
