//! Output structures for payoff simulations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::debt::PayoffPolicy;

/// Aggregate position at the end of one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Months since the start (0 = balances before the first month)
    pub month: u32,

    /// Calendar month this point represents
    pub date: NaiveDate,

    /// Sum of remaining balances, never negative
    pub aggregate_balance: f64,

    /// Interest charged across all debts this month
    pub interest_accrued: f64,

    /// Minimum and extra payments applied this month
    pub amount_paid: f64,
}

impl TimelinePoint {
    pub fn opening(date: NaiveDate, aggregate_balance: f64) -> Self {
        Self {
            month: 0,
            date,
            aggregate_balance,
            interest_accrued: 0.0,
            amount_paid: 0.0,
        }
    }
}

/// Month in which an individual debt reached zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub id: String,
    pub name: String,
    pub month: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffStatus {
    /// Every balance reached zero
    PaidOff,
    /// The iteration cap was hit with a balance still owed
    Unresolved,
}

/// Complete result of one policy run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub policy: PayoffPolicy,

    /// Human-readable policy label
    pub policy_name: String,

    pub extra_payment: f64,

    /// Sum of minimum payments plus the extra payment
    pub monthly_payment: f64,

    /// Interest accrued over the whole run
    pub total_interest_paid: f64,

    /// Calendar month of the last timeline point
    pub payoff_date: NaiveDate,

    /// Debt ids in the fixed target order used for this run
    pub payoff_order: Vec<String>,

    /// Debts in the order they reached zero
    pub debt_payoffs: Vec<DebtPayoff>,

    /// Month 0 first, one point per simulated month after that
    pub timeline: Vec<TimelinePoint>,

    pub status: PayoffStatus,
}

impl SimulationResult {
    pub fn new(
        policy: PayoffPolicy,
        extra_payment: f64,
        monthly_payment: f64,
        payoff_order: Vec<String>,
        opening: TimelinePoint,
    ) -> Self {
        Self {
            policy,
            policy_name: policy.label().to_string(),
            extra_payment,
            monthly_payment,
            total_interest_paid: 0.0,
            payoff_date: opening.date,
            payoff_order,
            debt_payoffs: Vec::new(),
            timeline: vec![opening],
            status: PayoffStatus::PaidOff,
        }
    }

    pub fn add_point(&mut self, point: TimelinePoint) {
        self.payoff_date = point.date;
        self.timeline.push(point);
    }

    /// Number of simulated months (the opening point is not counted)
    pub fn months(&self) -> u32 {
        self.timeline.len().saturating_sub(1) as u32
    }

    pub fn is_paid_off(&self) -> bool {
        self.status == PayoffStatus::PaidOff
    }

    pub fn starting_balance(&self) -> f64 {
        self.timeline.first().map(|p| p.aggregate_balance).unwrap_or(0.0)
    }

    pub fn final_balance(&self) -> f64 {
        self.timeline.last().map(|p| p.aggregate_balance).unwrap_or(0.0)
    }

    /// Everything paid over the run: principal retired plus interest
    pub fn total_paid(&self) -> f64 {
        self.starting_balance() + self.total_interest_paid - self.final_balance()
    }

    /// Month in which the given debt reached zero, if it did
    pub fn payoff_month_of(&self, debt_id: &str) -> Option<u32> {
        self.debt_payoffs.iter().find(|p| p.id == debt_id).map(|p| p.month)
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            policy_name: self.policy_name.clone(),
            months: self.months(),
            payoff_date: self.payoff_date,
            monthly_payment: self.monthly_payment,
            total_interest_paid: self.total_interest_paid,
            total_paid: self.total_paid(),
            starting_balance: self.starting_balance(),
            final_balance: self.final_balance(),
            status: self.status,
        }
    }
}

/// Headline figures for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub policy_name: String,
    pub months: u32,
    pub payoff_date: NaiveDate,
    pub monthly_payment: f64,
    pub total_interest_paid: f64,
    pub total_paid: f64,
    pub starting_balance: f64,
    pub final_balance: f64,
    pub status: PayoffStatus,
}
