//! Working state of a payoff simulation

use chrono::NaiveDate;

use crate::debt::{Debt, PayoffPolicy};

/// Remaining balance of one debt during a run
#[derive(Debug, Clone)]
pub(crate) struct DebtBalance {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub annual_rate_percent: f64,
    pub minimum_payment: f64,
}

impl DebtBalance {
    fn from_debt(debt: &Debt) -> Self {
        Self {
            id: debt.id.clone(),
            name: debt.name.clone(),
            balance: debt.balance,
            annual_rate_percent: debt.annual_rate_percent,
            minimum_payment: debt.minimum_payment,
        }
    }

    pub fn monthly_interest(&self) -> f64 {
        self.balance * (self.annual_rate_percent / 100.0) / 12.0
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }
}

/// State of all debts at a point in the simulation
#[derive(Debug, Clone)]
pub(crate) struct PayoffState {
    /// Months simulated so far (0 before the first month)
    pub month: u32,

    /// Calendar month of the latest timeline point
    pub current_date: NaiveDate,

    /// Private copies of the debts, in the fixed target order for this run
    pub debts: Vec<DebtBalance>,

    /// Sum of clamped balances
    pub total_balance: f64,

    /// Interest accrued since the start of the run
    pub total_interest_paid: f64,
}

impl PayoffState {
    /// Copy the debts into policy order at the start month
    pub fn new(debts: &[Debt], policy: PayoffPolicy, start_month: NaiveDate) -> Self {
        let debts: Vec<DebtBalance> = policy
            .order(debts)
            .into_iter()
            .map(DebtBalance::from_debt)
            .collect();
        let total_balance: f64 = debts.iter().map(|d| d.balance).sum();

        Self {
            month: 0,
            current_date: start_month,
            debts,
            total_balance,
            total_interest_paid: 0.0,
        }
    }

    pub fn recompute_total(&mut self) {
        self.total_balance = self.debts.iter().map(|d| d.balance.max(0.0)).sum();
    }

    /// Move to the next calendar month
    pub fn advance_month(&mut self, next_date: NaiveDate) {
        self.month += 1;
        self.current_date = next_date;
    }

    pub fn payoff_order(&self) -> Vec<String> {
        self.debts.iter().map(|d| d.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_copies_in_policy_order() {
        let debts = vec![
            Debt::new("big", "Big", 5_000.0, 5.0, 100.0),
            Debt::new("small", "Small", 200.0, 25.0, 25.0),
        ];
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let state = PayoffState::new(&debts, PayoffPolicy::Snowball, start);

        assert_eq!(state.payoff_order(), vec!["small", "big"]);
        assert_eq!(state.total_balance, 5_200.0);
        assert_eq!(state.month, 0);
        // input untouched
        assert_eq!(debts[0].id, "big");
    }

    #[test]
    fn test_monthly_interest() {
        let debts = vec![Debt::new("visa", "Visa", 1_200.0, 12.0, 50.0)];
        let state =
            PayoffState::new(&debts, PayoffPolicy::Snowball, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!((state.debts[0].monthly_interest() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_recompute_total_clamps_negative() {
        let debts = vec![Debt::new("a", "A", 100.0, 0.0, 10.0)];
        let mut state =
            PayoffState::new(&debts, PayoffPolicy::Avalanche, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        state.debts[0].balance = -1e-9;
        state.recompute_total();
        assert_eq!(state.total_balance, 0.0);
    }
}
