//! Strategy planner for side-by-side policy runs
//!
//! Holds one engine configuration and runs both policies over the same
//! debts, either for a single extra payment or a sweep of them.

use chrono::NaiveDate;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::debt::{Debt, PayoffPolicy};
use crate::simulation::{PayoffEngine, PayoffStatus, SimulationConfig, SimulationResult};

/// Snowball and avalanche results for the same input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub extra_payment: f64,
    pub snowball: SimulationResult,
    pub avalanche: SimulationResult,
}

impl StrategyComparison {
    pub fn result(&self, policy: PayoffPolicy) -> &SimulationResult {
        match policy {
            PayoffPolicy::Snowball => &self.snowball,
            PayoffPolicy::Avalanche => &self.avalanche,
        }
    }

    /// Interest avoided by choosing avalanche over snowball (negative if snowball is cheaper)
    pub fn interest_saved(&self) -> f64 {
        self.snowball.total_interest_paid - self.avalanche.total_interest_paid
    }

    /// Months avoided by choosing avalanche over snowball
    pub fn months_saved(&self) -> i64 {
        self.snowball.months() as i64 - self.avalanche.months() as i64
    }

    /// Cheaper policy. A plan that pays off beats one that does not; equal
    /// interest falls back to the earlier payoff date, then snowball.
    pub fn recommended(&self) -> PayoffPolicy {
        match (self.snowball.status, self.avalanche.status) {
            (PayoffStatus::PaidOff, PayoffStatus::Unresolved) => return PayoffPolicy::Snowball,
            (PayoffStatus::Unresolved, PayoffStatus::PaidOff) => return PayoffPolicy::Avalanche,
            _ => {}
        }

        let saved = self.interest_saved();
        if saved > 1e-6 {
            PayoffPolicy::Avalanche
        } else if saved < -1e-6 {
            PayoffPolicy::Snowball
        } else if self.avalanche.payoff_date < self.snowball.payoff_date {
            PayoffPolicy::Avalanche
        } else {
            PayoffPolicy::Snowball
        }
    }
}

/// Runs both policies with a shared engine configuration
#[derive(Debug, Clone, Default)]
pub struct StrategyPlanner {
    engine: PayoffEngine,
}

impl StrategyPlanner {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            engine: PayoffEngine::new(config),
        }
    }

    /// Planner whose runs open in the given month
    pub fn starting(start_month: NaiveDate) -> Self {
        Self::new(SimulationConfig::starting(start_month))
    }

    /// Run one policy
    pub fn run(&self, debts: &[Debt], extra_payment: f64, policy: PayoffPolicy) -> SimulationResult {
        self.engine.simulate(debts, extra_payment, policy)
    }

    /// Run both policies over independent copies of the same debts
    pub fn compare(&self, debts: &[Debt], extra_payment: f64) -> StrategyComparison {
        StrategyComparison {
            extra_payment,
            snowball: self.engine.simulate(debts, extra_payment, PayoffPolicy::Snowball),
            avalanche: self.engine.simulate(debts, extra_payment, PayoffPolicy::Avalanche),
        }
    }

    /// Compare both policies for each extra payment, in parallel.
    /// Results come back in the order of `extra_payments`.
    pub fn sweep(&self, debts: &[Debt], extra_payments: &[f64]) -> Vec<StrategyComparison> {
        debug!("sweeping {} extra payment levels over {} debts", extra_payments.len(), debts.len());
        extra_payments
            .par_iter()
            .map(|&extra| self.compare(debts, extra))
            .collect()
    }
}

/// Compare both policies starting this month with the default iteration cap
pub fn compare(debts: &[Debt], extra_payment: f64) -> StrategyComparison {
    StrategyPlanner::default().compare(debts, extra_payment)
}
