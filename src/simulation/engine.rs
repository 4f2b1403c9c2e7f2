//! Core payoff engine for month-by-month debt amortization

use chrono::NaiveDate;
use log::{debug, warn};

use super::month::{add_months, current_month, first_of_month};
use super::state::PayoffState;
use super::timeline::{DebtPayoff, PayoffStatus, SimulationResult, TimelinePoint};
use crate::debt::{Debt, PayoffPolicy};

/// Iteration cap: 100 years of monthly payments
pub const MAX_SIMULATION_MONTHS: u32 = 1200;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Calendar month of the opening timeline point
    pub start_month: NaiveDate,

    /// Longest timeline a run may return, opening month included
    pub max_months: u32,
}

impl SimulationConfig {
    pub fn starting(start_month: NaiveDate) -> Self {
        Self {
            start_month: first_of_month(start_month),
            ..Default::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_month: current_month(),
            max_months: MAX_SIMULATION_MONTHS,
        }
    }
}

/// Which part of the monthly outlay a payment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Minimum,
    Extra,
}

/// Receives every step of a run as it is applied
///
/// All methods default to doing nothing, so an implementation only
/// overrides the events it cares about.
pub trait PaymentObserver {
    fn on_interest(&mut self, _month: u32, _debt_id: &str, _amount: f64) {}

    fn on_payment(&mut self, _month: u32, _debt_id: &str, _kind: PaymentKind, _amount: f64) {}

    fn on_paid_off(&mut self, _month: u32, _debt_id: &str) {}
}

/// Observer that ignores everything
pub struct NoopObserver;

impl PaymentObserver for NoopObserver {}

/// Main payoff engine
#[derive(Debug, Clone, Default)]
pub struct PayoffEngine {
    config: SimulationConfig,
}

impl PayoffEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run the simulation for one policy
    pub fn simulate(&self, debts: &[Debt], extra_payment: f64, policy: PayoffPolicy) -> SimulationResult {
        self.simulate_with_observer(debts, extra_payment, policy, &mut NoopObserver)
    }

    /// Run the simulation, reporting each accrual and payment to `observer`
    pub fn simulate_with_observer<O: PaymentObserver + ?Sized>(
        &self,
        debts: &[Debt],
        extra_payment: f64,
        policy: PayoffPolicy,
        observer: &mut O,
    ) -> SimulationResult {
        let mut state = PayoffState::new(debts, policy, self.config.start_month);
        let monthly_payment: f64 =
            debts.iter().map(|d| d.minimum_payment).sum::<f64>() + extra_payment;

        let mut result = SimulationResult::new(
            policy,
            extra_payment,
            monthly_payment,
            state.payoff_order(),
            TimelinePoint::opening(state.current_date, state.total_balance),
        );

        // Debts that start at zero count as paid off in the opening month
        for debt in state.debts.iter().filter(|d| d.is_paid_off()) {
            result.debt_payoffs.push(DebtPayoff {
                id: debt.id.clone(),
                name: debt.name.clone(),
                month: 0,
                date: state.current_date,
            });
        }

        debug!(
            "{} run: {} debts, balance {:.2}, monthly payment {:.2}",
            policy.label(),
            state.debts.len(),
            state.total_balance,
            monthly_payment
        );

        while state.total_balance > 0.0 {
            // The opening point counts toward the cap
            if result.timeline.len() >= self.config.max_months as usize {
                result.status = PayoffStatus::Unresolved;
                break;
            }
            let Some(next_date) = add_months(state.current_date, 1) else {
                result.status = PayoffStatus::Unresolved;
                break;
            };

            state.advance_month(next_date);
            let point = self.calculate_month(&mut state, extra_payment, &mut result, observer);
            result.add_point(point);
        }

        result.total_interest_paid = state.total_interest_paid;

        if result.is_paid_off() {
            debug!(
                "{} run paid off after {} months on {}, interest {:.2}",
                policy.label(),
                result.months(),
                result.payoff_date,
                result.total_interest_paid
            );
        } else {
            warn!(
                "{} run unresolved after {} months: {:.2} still owed",
                policy.label(),
                result.months(),
                result.final_balance()
            );
        }

        result
    }

    /// Accrue interest and apply payments for a single month.
    /// Order per debt is interest, then minimum payment, then extra payment.
    fn calculate_month<O: PaymentObserver + ?Sized>(
        &self,
        state: &mut PayoffState,
        extra_payment: f64,
        result: &mut SimulationResult,
        observer: &mut O,
    ) -> TimelinePoint {
        let month = state.month;
        let mut remaining_extra = extra_payment;
        let mut interest_accrued = 0.0;
        let mut amount_paid = 0.0;

        for debt in state.debts.iter_mut() {
            if debt.is_paid_off() {
                continue;
            }

            let interest = debt.monthly_interest();
            interest_accrued += interest;
            debt.balance += interest;
            observer.on_interest(month, &debt.id, interest);

            let payment = debt.balance.min(debt.minimum_payment);
            debt.balance -= payment;
            amount_paid += payment;
            if payment > 0.0 {
                observer.on_payment(month, &debt.id, PaymentKind::Minimum, payment);
            }

            if remaining_extra > 0.0 && debt.balance > 0.0 {
                let extra_applied = debt.balance.min(remaining_extra);
                debt.balance -= extra_applied;
                remaining_extra -= extra_applied;
                amount_paid += extra_applied;
                observer.on_payment(month, &debt.id, PaymentKind::Extra, extra_applied);
            }

            if debt.is_paid_off() {
                observer.on_paid_off(month, &debt.id);
                result.debt_payoffs.push(DebtPayoff {
                    id: debt.id.clone(),
                    name: debt.name.clone(),
                    month,
                    date: state.current_date,
                });
            }
        }

        state.total_interest_paid += interest_accrued;
        state.recompute_total();

        TimelinePoint {
            month,
            date: state.current_date,
            aggregate_balance: state.total_balance,
            interest_accrued,
            amount_paid,
        }
    }
}

/// Simulate starting this month with the default iteration cap
pub fn simulate(debts: &[Debt], extra_payment: f64, policy: PayoffPolicy) -> SimulationResult {
    PayoffEngine::default().simulate(debts, extra_payment, policy)
}
