//! Caller-side input checks. The simulator itself does not validate.

use super::Debt;
use crate::error::{PayoffError, Result};
use std::collections::HashSet;

/// Reject negative or non-finite amounts, empty ids and duplicate ids
pub fn validate_debts(debts: &[Debt]) -> Result<()> {
    let mut seen = HashSet::new();

    for debt in debts {
        let invalid = |field: &'static str, reason: &str| PayoffError::InvalidDebt {
            id: debt.id.clone(),
            field,
            reason: reason.to_string(),
        };

        if debt.id.trim().is_empty() {
            return Err(invalid("id", "must not be empty"));
        }
        if !seen.insert(debt.id.as_str()) {
            return Err(PayoffError::DuplicateDebtId(debt.id.clone()));
        }

        check_amount(debt.balance).map_err(|r| invalid("balance", r))?;
        check_amount(debt.annual_rate_percent).map_err(|r| invalid("interest rate", r))?;
        check_amount(debt.minimum_payment).map_err(|r| invalid("minimum payment", r))?;
    }

    Ok(())
}

pub fn validate_extra_payment(extra_payment: f64) -> Result<()> {
    check_amount(extra_payment).map_err(|_| PayoffError::InvalidExtraPayment(extra_payment))
}

fn check_amount(value: f64) -> std::result::Result<(), &'static str> {
    if !value.is_finite() {
        Err("must be a finite number")
    } else if value < 0.0 {
        Err("must not be negative")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_debts_pass() {
        let debts = vec![
            Debt::new("a", "A", 100.0, 0.0, 10.0),
            Debt::new("b", "B", 0.0, 18.0, 0.0),
        ];
        assert!(validate_debts(&debts).is_ok());
        assert!(validate_debts(&[]).is_ok());
    }

    #[test]
    fn test_negative_balance_rejected() {
        let debts = vec![Debt::new("a", "A", -5.0, 10.0, 10.0)];
        let err = validate_debts(&debts).unwrap_err();
        match err {
            PayoffError::InvalidDebt { id, field, .. } => {
                assert_eq!(id, "a");
                assert_eq!(field, "balance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nan_rate_rejected() {
        let debts = vec![Debt::new("a", "A", 5.0, f64::NAN, 10.0)];
        let err = validate_debts(&debts).unwrap_err();
        assert!(err.to_string().contains("interest rate must be a finite number"));
    }

    #[test]
    fn test_duplicate_and_empty_ids_rejected() {
        let dupes = vec![
            Debt::new("a", "A", 5.0, 1.0, 1.0),
            Debt::new("a", "A again", 5.0, 1.0, 1.0),
        ];
        assert!(matches!(
            validate_debts(&dupes),
            Err(PayoffError::DuplicateDebtId(id)) if id == "a"
        ));

        let empty = vec![Debt::new("  ", "blank", 5.0, 1.0, 1.0)];
        assert!(matches!(
            validate_debts(&empty),
            Err(PayoffError::InvalidDebt { field: "id", .. })
        ));
    }

    #[test]
    fn test_extra_payment() {
        assert!(validate_extra_payment(0.0).is_ok());
        assert!(validate_extra_payment(250.0).is_ok());
        assert!(matches!(
            validate_extra_payment(-1.0),
            Err(PayoffError::InvalidExtraPayment(_))
        ));
        assert!(validate_extra_payment(f64::INFINITY).is_err());
    }
}
